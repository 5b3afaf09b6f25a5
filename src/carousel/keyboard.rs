// SPDX-License-Identifier: MPL-2.0
//! Keyboard bindings for an open carousel.

/// Carousel actions a host can dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    JumpTo(usize),
    ToggleAutoPlay,
    Close,
}

/// Keys the carousel reacts to, independent of the windowing toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowLeft,
    ArrowRight,
    Escape,
    Space,
}

/// Maps a key press to its carousel command.
#[must_use]
pub fn command_for_key(key: NavKey) -> Command {
    match key {
        NavKey::ArrowLeft => Command::Previous,
        NavKey::ArrowRight => Command::Next,
        NavKey::Escape => Command::Close,
        NavKey::Space => Command::ToggleAutoPlay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_navigate_and_escape_closes() {
        assert_eq!(command_for_key(NavKey::ArrowLeft), Command::Previous);
        assert_eq!(command_for_key(NavKey::ArrowRight), Command::Next);
        assert_eq!(command_for_key(NavKey::Escape), Command::Close);
    }

    #[test]
    fn space_toggles_auto_play() {
        assert_eq!(command_for_key(NavKey::Space), Command::ToggleAutoPlay);
    }
}
