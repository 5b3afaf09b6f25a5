// SPDX-License-Identifier: MPL-2.0
//! Dialog layering shared by the media and contact modals.

use crate::ui::styles;
use iced::widget::{center, mouse_area, opaque, Stack};
use iced::Element;

/// Lays `dialog` over `base` on a dimmed backdrop.
///
/// Clicking the backdrop emits `on_dismiss`. The dialog itself is opaque,
/// so clicks on its non-interactive parts never reach the backdrop.
pub fn modal<'a, Message>(
    base: impl Into<Element<'a, Message>>,
    dialog: impl Into<Element<'a, Message>>,
    on_dismiss: Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    Stack::new()
        .push(base)
        .push(opaque(
            mouse_area(center(opaque(dialog)).style(styles::container::backdrop))
                .on_press(on_dismiss),
        ))
        .into()
}
