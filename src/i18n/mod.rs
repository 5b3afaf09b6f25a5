// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations are Fluent `.ftl` files embedded at build time. The active
//! locale comes from the `--lang` argument, then `[general] language` in
//! the settings file, then the OS locale, and finally `en-US`.

pub mod fluent;
