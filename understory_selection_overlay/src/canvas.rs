// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canvas zoom and offset context.

use kurbo::{Affine, Point, Rect, Vec2};

use crate::DrawableOutline;

/// Smallest scale factor used for outline computation.
///
/// Scales below this (including zero, negative values and NaN) are treated as
/// this value so that insets and stroke widths stay finite.
pub const MIN_SCALE: f64 = 1e-3;

/// Canvas zoom multiplier. `1.0` means no zoom.
///
/// A `ScaleFactor` is always finite and at least [`MIN_SCALE`].
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct ScaleFactor(f64);

impl ScaleFactor {
    /// No zoom.
    pub const IDENTITY: Self = Self(1.0);

    /// Creates a scale factor, flooring degenerate values to [`MIN_SCALE`].
    ///
    /// Positive infinity saturates to [`f64::MAX`].
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_nan() || value < MIN_SCALE {
            log::debug!("canvas scale {value} is below the floor, using {MIN_SCALE}");
            return Self(MIN_SCALE);
        }
        Self(value.min(f64::MAX))
    }

    /// Returns the scale as a plain number.
    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }

    /// Converts a length in device pixels into canvas units at this scale.
    ///
    /// This is how a constant on-screen thickness is kept under zoom: one
    /// device pixel is `1 / scale` canvas units.
    #[must_use]
    pub fn px_to_canvas(self, px: f64) -> f64 {
        px / self.0
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<f64> for ScaleFactor {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

/// Maps canvas-space geometry into viewport space.
///
/// Canvas content is first shifted by `offset` (the canvas pan, in canvas
/// units) and then zoomed by `scale`, so a canvas point `p` lands at
/// `(p + offset) * scale` in the viewport.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct CanvasTransform {
    /// Canvas zoom.
    pub scale: ScaleFactor,
    /// Canvas pan in canvas units, applied before zoom.
    pub offset: Vec2,
}

impl CanvasTransform {
    /// Creates a transform from a zoom and a pan offset.
    #[must_use]
    pub fn new(scale: impl Into<ScaleFactor>, offset: Vec2) -> Self {
        Self {
            scale: scale.into(),
            offset,
        }
    }

    /// Returns the canvas-to-view transform as an affine.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::scale(self.scale.get()) * Affine::translate(self.offset)
    }

    /// Converts a canvas point into view coordinates.
    #[must_use]
    pub fn canvas_to_view_point(&self, pt: Point) -> Point {
        self.to_affine() * pt
    }

    /// Converts a view point into canvas coordinates.
    #[must_use]
    pub fn view_to_canvas_point(&self, pt: Point) -> Point {
        self.to_affine().inverse() * pt
    }

    /// Converts a canvas rectangle into view coordinates.
    ///
    /// The transform is axis-aligned with uniform positive zoom, so mapping the
    /// two corners is enough.
    #[must_use]
    pub fn canvas_to_view_rect(&self, rect: Rect) -> Rect {
        let affine = self.to_affine();
        let p0 = affine * Point::new(rect.x0, rect.y0);
        let p1 = affine * Point::new(rect.x1, rect.y1);
        Rect::new(p0.x, p0.y, p1.x, p1.y)
    }

    /// Maps a canvas-space outline into view space.
    ///
    /// The stroke width is zoomed too, so an outline computed at this
    /// transform's scale ends up with a one device pixel stroke.
    #[must_use]
    pub fn outline_to_view(&self, outline: &DrawableOutline) -> DrawableOutline {
        let rect = self.canvas_to_view_rect(outline.rect());
        DrawableOutline {
            x: rect.x0,
            y: rect.y0,
            width: rect.width(),
            height: rect.height(),
            stroke_color: outline.stroke_color,
            stroke_width: outline.stroke_width * self.scale.get(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_scales_are_floored() {
        assert_eq!(ScaleFactor::new(0.0).get(), MIN_SCALE);
        assert_eq!(ScaleFactor::new(-2.0).get(), MIN_SCALE);
        assert_eq!(ScaleFactor::new(f64::NAN).get(), MIN_SCALE);
        assert_eq!(ScaleFactor::new(1e-9).get(), MIN_SCALE);
        assert_eq!(ScaleFactor::new(f64::INFINITY).get(), f64::MAX);
        assert_eq!(ScaleFactor::new(2.5).get(), 2.5);
    }

    #[test]
    fn px_to_canvas_is_inverse_in_scale() {
        assert_eq!(ScaleFactor::new(1.0).px_to_canvas(1.0), 1.0);
        assert_eq!(ScaleFactor::new(2.0).px_to_canvas(1.0), 0.5);
        assert_eq!(ScaleFactor::new(0.5).px_to_canvas(0.5), 1.0);
    }

    #[test]
    fn offset_applies_before_zoom() {
        let t = CanvasTransform::new(2.0, Vec2::new(10.0, -5.0));
        let p = t.canvas_to_view_point(Point::new(1.0, 1.0));
        assert!((p.x - 22.0).abs() < 1e-9);
        assert!((p.y + 8.0).abs() < 1e-9);

        let back = t.view_to_canvas_point(p);
        assert!((back.x - 1.0).abs() < 1e-9);
        assert!((back.y - 1.0).abs() < 1e-9);
    }

    #[test]
    fn rect_mapping_scales_extent() {
        let t = CanvasTransform::new(4.0, Vec2::ZERO);
        let r = t.canvas_to_view_rect(Rect::new(1.0, 2.0, 3.0, 5.0));
        assert_eq!(r, Rect::new(4.0, 8.0, 12.0, 20.0));
    }
}
