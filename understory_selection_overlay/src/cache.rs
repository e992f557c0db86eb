// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Memoized outline resolution.
//!
//! Resolving an outline is cheap for most hosts, but frame and color lookups
//! can be expensive when they walk large metadata trees. [`OutlineCache`]
//! memoizes resolver results per `(targets, role)` for one snapshot of editor
//! state. The host identifies snapshots with a revision counter that it bumps
//! whenever selection, metadata, or focus changes. A changed revision, scale,
//! style, or theme drops every cached outline.

use alloc::vec::Vec;
use core::hash::{Hash, Hasher};

use hashbrown::{Equivalent, HashMap};

use crate::overlay::assemble;
use crate::{
    ColorResolver, ColorRole, DrawableOutline, GeometryProvider, OutlineEntry, OutlineResolver,
    OutlineStyle, OverlayTheme, ScaleFactor,
};

#[derive(Clone, Debug, PartialEq, Eq)]
struct CacheKey<K> {
    targets: Vec<K>,
    role: ColorRole,
}

impl<K: Hash> Hash for CacheKey<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Must hash exactly like `CacheKeyRef`.
        self.targets.as_slice().hash(state);
        self.role.hash(state);
    }
}

/// Borrowed form of [`CacheKey`] used for lookups without allocating.
struct CacheKeyRef<'a, K> {
    targets: &'a [K],
    role: ColorRole,
}

impl<K: Hash> Hash for CacheKeyRef<'_, K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.targets.hash(state);
        self.role.hash(state);
    }
}

impl<K: PartialEq> Equivalent<CacheKey<K>> for CacheKeyRef<'_, K> {
    fn equivalent(&self, key: &CacheKey<K>) -> bool {
        self.role == key.role && self.targets == key.targets.as_slice()
    }
}

/// Snapshot an [`OutlineCache`] is valid for.
#[derive(Copy, Clone, Debug, PartialEq)]
struct Validity {
    revision: u64,
    scale: ScaleFactor,
    style: OutlineStyle,
    theme: OverlayTheme,
}

/// Memoizes [`OutlineResolver`] results for one snapshot of editor state.
///
/// ```rust
/// use kurbo::Rect;
/// use understory_selection_overlay::{ColorRole, OutlineCache, OutlineResolver, OverlayTheme};
///
/// let geometry = |_: &u32| Some(Rect::new(0.0, 0.0, 10.0, 10.0));
/// let colors = |_: &u32, theme: &OverlayTheme| theme.primary;
/// let theme = OverlayTheme::default();
/// let resolver = OutlineResolver::new(&geometry, &colors, &theme, 1.0);
///
/// let mut cache = OutlineCache::new();
/// let a = cache.resolve(&resolver, 7, &[1_u32, 2], ColorRole::MultiSelectBounds);
/// let b = cache.resolve(&resolver, 7, &[1_u32, 2], ColorRole::MultiSelectBounds);
/// assert_eq!(a, b);
/// assert_eq!(cache.len(), 1);
///
/// // A new revision invalidates everything.
/// cache.resolve(&resolver, 8, &[1_u32], ColorRole::Primary);
/// assert_eq!(cache.len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct OutlineCache<K> {
    validity: Option<Validity>,
    entries: HashMap<CacheKey<K>, Option<DrawableOutline>>,
}

impl<K> Default for OutlineCache<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> OutlineCache<K> {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            validity: None,
            entries: HashMap::new(),
        }
    }

    /// Returns the number of memoized outlines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is memoized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every memoized outline.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.validity = None;
    }

    fn revalidate(&mut self, validity: Validity) {
        if self.validity != Some(validity) {
            self.entries.clear();
            self.validity = Some(validity);
        }
    }
}

impl<K: Hash + Eq + Clone> OutlineCache<K> {
    /// Memoized [`OutlineResolver::resolve`].
    ///
    /// `revision` identifies the editor snapshot `resolver` reads from. Results
    /// are reused only while the revision, scale, style, and theme stay the
    /// same.
    pub fn resolve<G, C>(
        &mut self,
        resolver: &OutlineResolver<'_, G, C>,
        revision: u64,
        targets: &[K],
        role: ColorRole,
    ) -> Option<DrawableOutline>
    where
        G: GeometryProvider<K> + ?Sized,
        C: ColorResolver<K> + ?Sized,
    {
        self.revalidate(Validity {
            revision,
            scale: resolver.scale(),
            style: resolver.style(),
            theme: *resolver.theme(),
        });

        let lookup = CacheKeyRef { targets, role };
        if let Some(hit) = self.entries.get(&lookup) {
            return *hit;
        }

        let outline = resolver.resolve(targets, role);
        self.entries.insert(
            CacheKey {
                targets: targets.to_vec(),
                role,
            },
            outline,
        );
        outline
    }

    /// Memoized [`OutlineResolver::render`].
    ///
    /// Produces the same list as the uncached renderer.
    pub fn render<G, C>(
        &mut self,
        resolver: &OutlineResolver<'_, G, C>,
        revision: u64,
        selection: &[K],
    ) -> Vec<OutlineEntry<K>>
    where
        G: GeometryProvider<K> + ?Sized,
        C: ColorResolver<K> + ?Sized,
    {
        let mut out = Vec::with_capacity(selection.len() + 1);
        assemble(selection, &mut out, |targets, role| {
            self.resolve(resolver, revision, targets, role)
        });
        out
    }
}
