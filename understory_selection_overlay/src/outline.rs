// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single outline resolution: bounding box, color, and zoom correction.

use kurbo::Rect;
use peniko::Color;

use crate::{ColorResolver, GeometryProvider, OverlayTheme, ScaleFactor};

/// Which color rule an outline follows.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorRole {
    /// Outline of one element; uses the resolved color of the first target.
    Primary,
    /// Outline around a whole multi-selection; uses
    /// [`OverlayTheme::multiselect_bounds`] and ignores per-element colors.
    MultiSelectBounds,
}

/// Device-pixel tunables for outline placement.
///
/// All lengths are in device pixels and are divided by the canvas scale when
/// applied, so outlines keep the same on-screen appearance at every zoom.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OutlineStyle {
    /// Offset of the outline origin from the bounding box origin.
    pub inset_px: f64,
    /// Total reduction of the outline width and height.
    pub shrink_px: f64,
    /// Stroke width.
    pub stroke_px: f64,
}

impl OutlineStyle {
    /// Half-pixel inset, three half-pixel shrink, one pixel stroke.
    pub const DEFAULT: Self = Self {
        inset_px: 0.5,
        shrink_px: 1.5,
        stroke_px: 1.0,
    };

    /// Sets the origin inset.
    #[must_use]
    pub const fn with_inset_px(mut self, inset_px: f64) -> Self {
        self.inset_px = inset_px;
        self
    }

    /// Sets the extent reduction.
    #[must_use]
    pub const fn with_shrink_px(mut self, shrink_px: f64) -> Self {
        self.shrink_px = shrink_px;
        self
    }

    /// Sets the stroke width.
    #[must_use]
    pub const fn with_stroke_px(mut self, stroke_px: f64) -> Self {
        self.stroke_px = stroke_px;
        self
    }
}

impl Default for OutlineStyle {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A stroked, non-interactive rectangle ready to hand to a drawing layer.
///
/// Coordinates are in canvas space unless the outline was produced by
/// [`CanvasTransform::outline_to_view`](crate::CanvasTransform::outline_to_view).
/// `width` and `height` are never negative.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DrawableOutline {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
    /// Stroke color.
    pub stroke_color: Color,
    /// Stroke width.
    pub stroke_width: f64,
}

impl DrawableOutline {
    /// Returns the outline geometry as a rectangle.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }
}

/// Returns the tightest axis-aligned rectangle enclosing all `rects`.
///
/// Returns `None` for an empty input. The result does not depend on input
/// order, and overlapping and disjoint inputs are treated the same way.
///
/// ```rust
/// use kurbo::Rect;
/// use understory_selection_overlay::bounding_rect;
///
/// let a = Rect::new(0.0, 0.0, 10.0, 10.0);
/// let b = Rect::new(20.0, 20.0, 30.0, 30.0);
/// assert_eq!(bounding_rect([a, b]), Some(Rect::new(0.0, 0.0, 30.0, 30.0)));
/// assert_eq!(bounding_rect([]), None);
/// ```
pub fn bounding_rect<I>(rects: I) -> Option<Rect>
where
    I: IntoIterator<Item = Rect>,
{
    // `Rect::union` normalizes via min/max, so flipped frames still enclose.
    rects
        .into_iter()
        .map(|r| r.abs())
        .reduce(|acc, r| acc.union(r))
}

/// Resolves outlines from a snapshot of editor state.
///
/// The resolver borrows its inputs and holds no mutable state; every call is a
/// pure function of the snapshot, so it can be rebuilt on each render pass.
///
/// ```rust
/// use kurbo::Rect;
/// use understory_selection_overlay::{ColorRole, OutlineResolver, OverlayTheme};
///
/// let geometry = |id: &u32| (*id == 1).then(|| Rect::new(10.0, 10.0, 30.0, 30.0));
/// let colors = |_: &u32, theme: &OverlayTheme| theme.primary;
/// let theme = OverlayTheme::default();
/// let resolver = OutlineResolver::new(&geometry, &colors, &theme, 1.0);
///
/// let outline = resolver.resolve(&[1_u32], ColorRole::Primary).unwrap();
/// assert_eq!((outline.x, outline.y), (10.5, 10.5));
/// assert_eq!((outline.width, outline.height), (18.5, 18.5));
/// assert_eq!(outline.stroke_width, 1.0);
///
/// assert!(resolver.resolve(&[2_u32], ColorRole::Primary).is_none());
/// ```
#[derive(Debug)]
pub struct OutlineResolver<'a, G: ?Sized, C: ?Sized> {
    geometry: &'a G,
    colors: &'a C,
    theme: &'a OverlayTheme,
    scale: ScaleFactor,
    style: OutlineStyle,
}

impl<G: ?Sized, C: ?Sized> Clone for OutlineResolver<'_, G, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G: ?Sized, C: ?Sized> Copy for OutlineResolver<'_, G, C> {}

impl<'a, G: ?Sized, C: ?Sized> OutlineResolver<'a, G, C> {
    /// Creates a resolver over the given lookups, theme and canvas scale.
    #[must_use]
    pub fn new(
        geometry: &'a G,
        colors: &'a C,
        theme: &'a OverlayTheme,
        scale: impl Into<ScaleFactor>,
    ) -> Self {
        Self {
            geometry,
            colors,
            theme,
            scale: scale.into(),
            style: OutlineStyle::DEFAULT,
        }
    }

    /// Replaces the placement tunables.
    #[must_use]
    pub fn with_style(mut self, style: OutlineStyle) -> Self {
        self.style = style;
        self
    }

    /// Returns the canvas scale outlines are computed for.
    #[must_use]
    pub fn scale(&self) -> ScaleFactor {
        self.scale
    }

    /// Returns the placement tunables.
    #[must_use]
    pub fn style(&self) -> OutlineStyle {
        self.style
    }

    /// Returns the theme.
    #[must_use]
    pub fn theme(&self) -> &'a OverlayTheme {
        self.theme
    }

    /// Computes the outline enclosing `targets`.
    ///
    /// Targets without a frame are skipped. Returns `None` when `targets` is
    /// empty or none of them has a frame.
    ///
    /// For [`ColorRole::Primary`] the stroke color is the resolved color of
    /// `targets[0]`, whether or not that target has a frame. For
    /// [`ColorRole::MultiSelectBounds`] it is the theme's bounds color.
    pub fn resolve<K>(&self, targets: &[K], role: ColorRole) -> Option<DrawableOutline>
    where
        G: GeometryProvider<K>,
        C: ColorResolver<K>,
    {
        let first = targets.first()?;

        let mut missing = 0_usize;
        let bounds = bounding_rect(targets.iter().filter_map(|target| {
            let frame = self.geometry.frame(target);
            if frame.is_none() {
                missing += 1;
            }
            frame
        }));
        if missing > 0 {
            log::trace!(
                "{missing} of {} outline targets have no frame",
                targets.len()
            );
        }
        let bounds = bounds?;

        let stroke_color = match role {
            ColorRole::Primary => self.colors.color(first, self.theme),
            ColorRole::MultiSelectBounds => self.theme.multiselect_bounds,
        };

        Some(self.place(bounds, stroke_color))
    }

    /// Builds the zoom-corrected outline for a canvas-space bounding box.
    fn place(&self, bounds: Rect, stroke_color: Color) -> DrawableOutline {
        let inset = self.scale.px_to_canvas(self.style.inset_px);
        let shrink = self.scale.px_to_canvas(self.style.shrink_px);
        DrawableOutline {
            x: bounds.x0 + inset,
            y: bounds.y0 + inset,
            width: (bounds.width() - shrink).max(0.0),
            height: (bounds.height() - shrink).max(0.0),
            stroke_color,
            stroke_width: self.scale.px_to_canvas(self.style.stroke_px),
        }
    }
}
