// SPDX-License-Identifier: MPL-2.0
//! Shared styles for buttons and containers.

pub mod button;
pub mod container;
pub mod text;
