// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lookup traits for the editor state an outline is derived from.
//!
//! The overlay does not own element metadata or focus state. It reads them
//! through two small traits, [`GeometryProvider`] and [`ColorResolver`], which
//! the host implements over a read-only snapshot of its editor state.

use core::hash::{BuildHasher, Hash};

use hashbrown::HashMap;
use kurbo::Rect;
use peniko::Color;

use crate::{ElementPath, OverlayTheme};

/// Source of canvas-space frames for elements.
pub trait GeometryProvider<K: ?Sized> {
    /// Returns the frame of `key` in canvas coordinates (before zoom).
    ///
    /// Returns `None` when the element currently has no resolvable frame, for
    /// example because it is unmounted or its metadata is stale. Such elements
    /// are left out of bounding boxes rather than treated as errors.
    fn frame(&self, key: &K) -> Option<Rect>;
}

impl<K: ?Sized, F> GeometryProvider<K> for F
where
    F: Fn(&K) -> Option<Rect>,
{
    fn frame(&self, key: &K) -> Option<Rect> {
        self(key)
    }
}

impl<K, S> GeometryProvider<K> for HashMap<K, Rect, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn frame(&self, key: &K) -> Option<Rect> {
        self.get(key).copied()
    }
}

/// Chooses the outline color of a single element.
///
/// Implementations usually consult selection and focus state, for example
/// whether the element is the focused element or lives inside it.
pub trait ColorResolver<K: ?Sized> {
    /// Returns the outline color for `key`, picked from `theme`.
    fn color(&self, key: &K, theme: &OverlayTheme) -> Color;
}

impl<K: ?Sized, F> ColorResolver<K> for F
where
    F: Fn(&K, &OverlayTheme) -> Color,
{
    fn color(&self, key: &K, theme: &OverlayTheme) -> Color {
        self(key, theme)
    }
}

/// Focus-aware colors for [`ElementPath`] keys.
///
/// - Elements strictly inside the focused element use
///   [`OverlayTheme::focused_child`].
/// - The focused element itself uses [`OverlayTheme::focused`].
/// - Everything else uses [`OverlayTheme::primary`].
///
/// ```rust
/// use understory_selection_overlay::{ColorResolver, ElementPath, FocusColors, OverlayTheme};
///
/// let theme = OverlayTheme::default();
/// let focused = ElementPath::parse("app/card");
/// let colors = FocusColors::new(Some(&focused));
///
/// assert_eq!(colors.color(&focused, &theme), theme.focused);
/// assert_eq!(colors.color(&focused.child("title"), &theme), theme.focused_child);
/// assert_eq!(colors.color(&ElementPath::parse("app"), &theme), theme.primary);
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct FocusColors<'a> {
    focused: Option<&'a ElementPath>,
}

impl<'a> FocusColors<'a> {
    /// Creates a resolver for the given focused path, if any.
    #[must_use]
    pub fn new(focused: Option<&'a ElementPath>) -> Self {
        Self { focused }
    }

    /// Returns the focused path this resolver was built with.
    #[must_use]
    pub fn focused(&self) -> Option<&'a ElementPath> {
        self.focused
    }
}

impl ColorResolver<ElementPath> for FocusColors<'_> {
    fn color(&self, key: &ElementPath, theme: &OverlayTheme) -> Color {
        match self.focused {
            Some(focused) if key.is_descendant_of(focused) => theme.focused_child,
            Some(focused) if key == focused => theme.focused,
            _ => theme.primary,
        }
    }
}
