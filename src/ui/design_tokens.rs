// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants for every FolioReel view.

## Organization

- **Palette**: Base colors (warm neutrals and the amber accent)
- **Opacity**: Overlay and surface transparency levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use folio_reel::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

// Modal backdrop
let backdrop = Color {
    a: opacity::BACKDROP,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.07, 0.07, 0.08);
    pub const GRAY_400: Color = Color::from_rgb(0.55, 0.55, 0.58);

    // Accent (amber scale)
    pub const AMBER_400: Color = Color::from_rgb(0.984, 0.749, 0.141);
    pub const AMBER_500: Color = Color::from_rgb(0.961, 0.620, 0.043);
    pub const AMBER_600: Color = Color::from_rgb(0.851, 0.467, 0.024);

    pub const SUCCESS_500: Color = Color::from_rgb(0.133, 0.694, 0.298);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Carousel arrow buttons at rest
    pub const CONTROL: f32 = 0.2;
    /// Carousel arrow buttons under the pointer
    pub const CONTROL_HOVER: f32 = 0.4;
    /// Inactive carousel dots
    pub const DOT_INACTIVE: f32 = 0.8;
    /// Modal backdrop behind dialogs
    pub const BACKDROP: f32 = 0.75;
    /// Secondary text on cards
    pub const MUTED_TEXT: f32 = 0.7;
    /// Navbar background over page content
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const NAVBAR_HEIGHT: f32 = 56.0;

    /// Talk card width in the engagement grid
    pub const CARD_WIDTH: f32 = 320.0;
    /// 16:9 cover height for a card of [`CARD_WIDTH`]
    pub const CARD_COVER_HEIGHT: f32 = 180.0;

    pub const MODAL_MAX_WIDTH: f32 = 1000.0;
    pub const MODAL_MEDIA_HEIGHT: f32 = 400.0;
    pub const CONTACT_MODAL_WIDTH: f32 = 380.0;
    pub const TOAST_WIDTH: f32 = 320.0;

    pub const CAROUSEL_DOT: f32 = 10.0;
    pub const CAROUSEL_DOT_ACTIVE: f32 = 13.0;

    /// Rendered QR code edge
    pub const QR_CODE: f32 = 220.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Page section headings ("Speaking Engagements")
    pub const TITLE_LG: f32 = 34.0;
    /// Card and modal titles
    pub const TITLE_MD: f32 = 22.0;
    /// Modal section headers ("Event Details")
    pub const TITLE_SM: f32 = 17.0;
    pub const BODY: f32 = 14.0;
    pub const BODY_SM: f32 = 13.0;
    /// Slide counters, captions
    pub const CAPTION: f32 = 12.0;
    /// Large faded card numbers ("01")
    pub const DISPLAY: f32 = 56.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::Color;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Amber glow under a hovered talk card.
    pub const CARD_HOVER: Shadow = Shadow {
        color: Color::from_rgba(1.0, 0.69, 0.23, 0.15),
        offset: Vector { x: 0.0, y: 10.0 },
        blur_radius: 40.0,
    };

    pub const MODAL: Shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.35),
        offset: Vector { x: 0.0, y: 12.0 },
        blur_radius: 32.0,
    };
}

const _: () = {
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::CONTROL_HOVER > opacity::CONTROL);
    assert!(opacity::BACKDROP > 0.0 && opacity::BACKDROP < 1.0);

    assert!(sizing::CAROUSEL_DOT_ACTIVE > sizing::CAROUSEL_DOT);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_cover_is_sixteen_by_nine() {
        let ratio = sizing::CARD_WIDTH / sizing::CARD_COVER_HEIGHT;
        assert!((ratio - 16.0 / 9.0).abs() < 0.01);
    }
}
