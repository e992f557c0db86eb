// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Outline colors.

use peniko::Color;

/// The set of colors used for selection outlines.
///
/// Only [`OverlayTheme::multiselect_bounds`] is read directly by the outline
/// resolver; the other colors are a palette for [`ColorResolver`]
/// implementations such as [`FocusColors`].
///
/// [`ColorResolver`]: crate::ColorResolver
/// [`FocusColors`]: crate::FocusColors
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OverlayTheme {
    /// Outline of an ordinary selected element.
    pub primary: Color,
    /// Outline of the element that currently has focus.
    pub focused: Color,
    /// Outline of a selected element inside the focused element.
    pub focused_child: Color,
    /// Outline enclosing the whole multi-selection.
    pub multiselect_bounds: Color,
}

impl OverlayTheme {
    /// Default light palette.
    pub const LIGHT: Self = Self {
        primary: Color::from_rgba8(0x00, 0x75, 0xF9, 0xFF),
        focused: Color::from_rgba8(0xA0, 0x2B, 0xF5, 0xFF),
        focused_child: Color::from_rgba8(0xD2, 0x8E, 0xFF, 0xFF),
        multiselect_bounds: Color::from_rgba8(0x00, 0x75, 0xF9, 0x80),
    };

    /// Returns a copy with a different multi-selection bounds color.
    #[must_use]
    pub const fn with_multiselect_bounds(mut self, color: Color) -> Self {
        self.multiselect_bounds = color;
        self
    }
}

impl Default for OverlayTheme {
    fn default() -> Self {
        Self::LIGHT
    }
}
