// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Aggregate overlays for a whole selection.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use crate::{ColorResolver, ColorRole, DrawableOutline, GeometryProvider, OutlineResolver};

/// Identity key of the group outline.
pub const GROUP_KEY: &str = "multiselect-outline";

/// Which slot of an overlay list an outline fills.
///
/// Slots give each outline a stable identity across renders, so hosts that
/// keep retained overlay nodes can match old and new outlines by key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum OutlineSlot<K> {
    /// The outline enclosing the whole selection.
    Group,
    /// The outline of one selected element.
    Element(K),
}

impl<K> OutlineSlot<K> {
    /// Returns the element of an [`OutlineSlot::Element`] slot.
    #[must_use]
    pub fn element(&self) -> Option<&K> {
        match self {
            Self::Group => None,
            Self::Element(key) => Some(key),
        }
    }
}

impl<K: fmt::Display> OutlineSlot<K> {
    /// Returns the stable string key of this slot.
    ///
    /// This is [`GROUP_KEY`] for the group and the element's display form
    /// otherwise.
    #[must_use]
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl<K: fmt::Display> fmt::Display for OutlineSlot<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Group => f.write_str(GROUP_KEY),
            Self::Element(key) => fmt::Display::fmt(key, f),
        }
    }
}

/// One outline of an overlay list, tagged with its slot.
#[derive(Clone, Debug, PartialEq)]
pub struct OutlineEntry<K> {
    /// Identity of this outline.
    pub slot: OutlineSlot<K>,
    /// Geometry and stroke.
    pub outline: DrawableOutline,
}

impl<G: ?Sized, C: ?Sized> OutlineResolver<'_, G, C> {
    /// Renders the overlay list for `selection`.
    ///
    /// The list holds the group outline first, then one outline per selected
    /// element in selection order. Outlines that resolve to nothing are left
    /// out, so the list can be shorter than `1 + selection.len()`.
    ///
    /// ```rust
    /// use kurbo::Rect;
    /// use understory_selection_overlay::{OutlineResolver, OutlineSlot, OverlayTheme};
    ///
    /// let geometry = |id: &u32| match id {
    ///     1 => Some(Rect::new(0.0, 0.0, 10.0, 10.0)),
    ///     2 => Some(Rect::new(20.0, 20.0, 30.0, 30.0)),
    ///     _ => None,
    /// };
    /// let colors = |_: &u32, theme: &OverlayTheme| theme.primary;
    /// let theme = OverlayTheme::default();
    /// let resolver = OutlineResolver::new(&geometry, &colors, &theme, 1.0);
    ///
    /// let overlay = resolver.render(&[3_u32, 1, 2]);
    /// let slots: Vec<_> = overlay.iter().map(|e| e.slot.clone()).collect();
    /// assert_eq!(
    ///     slots,
    ///     [OutlineSlot::Group, OutlineSlot::Element(1_u32), OutlineSlot::Element(2)]
    /// );
    /// ```
    pub fn render<K>(&self, selection: &[K]) -> Vec<OutlineEntry<K>>
    where
        K: Clone,
        G: GeometryProvider<K>,
        C: ColorResolver<K>,
    {
        let mut out = Vec::with_capacity(selection.len() + 1);
        self.render_into(selection, &mut out);
        out
    }

    /// Like [`OutlineResolver::render`], but writes into `out`.
    ///
    /// `out` is cleared first, so a host can reuse one buffer across frames.
    pub fn render_into<K>(&self, selection: &[K], out: &mut Vec<OutlineEntry<K>>)
    where
        K: Clone,
        G: GeometryProvider<K>,
        C: ColorResolver<K>,
    {
        assemble(selection, out, |targets, role| self.resolve(targets, role));
    }
}

/// Builds the overlay list for `selection` into `out`, resolving each outline
/// through `resolve`.
///
/// Group outline first, then one outline per element in selection order.
pub(crate) fn assemble<K, F>(selection: &[K], out: &mut Vec<OutlineEntry<K>>, mut resolve: F)
where
    K: Clone,
    F: FnMut(&[K], ColorRole) -> Option<DrawableOutline>,
{
    out.clear();
    if let Some(outline) = resolve(selection, ColorRole::MultiSelectBounds) {
        out.push(OutlineEntry {
            slot: OutlineSlot::Group,
            outline,
        });
    }
    for key in selection {
        if let Some(outline) = resolve(core::slice::from_ref(key), ColorRole::Primary) {
            out.push(OutlineEntry {
                slot: OutlineSlot::Element(key.clone()),
                outline,
            });
        }
    }
}
