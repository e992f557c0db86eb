// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Handing outlines to a drawing layer.

use kurbo::Rect;
use peniko::Color;

use crate::{CanvasTransform, OutlineEntry};

/// A drawing layer that accepts stroked rectangles.
///
/// Overlays are purely visual. A sink draws them on top of the canvas and
/// must not make them take part in hit testing or pointer routing.
pub trait OverlaySink {
    /// Strokes `rect` (in view coordinates) with `color` at `width` device pixels.
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64);
}

impl<S: OverlaySink + ?Sized> OverlaySink for &mut S {
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64) {
        (**self).stroke_rect(rect, color, width);
    }
}

/// Draws `entries` into `sink`, in list order, mapped through `transform`.
///
/// The group outline comes first in a rendered list, so per-element outlines
/// are drawn on top of it.
pub fn paint<K, S>(entries: &[OutlineEntry<K>], transform: &CanvasTransform, sink: &mut S)
where
    S: OverlaySink + ?Sized,
{
    for entry in entries {
        let view = transform.outline_to_view(&entry.outline);
        sink.stroke_rect(view.rect(), view.stroke_color, view.stroke_width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DrawableOutline, OutlineSlot};
    use alloc::vec;
    use alloc::vec::Vec;
    use kurbo::Vec2;

    #[derive(Default)]
    struct Recorder {
        strokes: Vec<(Rect, Color, f64)>,
    }

    impl OverlaySink for Recorder {
        fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64) {
            self.strokes.push((rect, color, width));
        }
    }

    #[test]
    fn paint_maps_to_view_space_in_order() {
        let red = Color::from_rgba8(255, 0, 0, 255);
        let blue = Color::from_rgba8(0, 0, 255, 255);
        let entries = vec![
            OutlineEntry {
                slot: OutlineSlot::Group,
                outline: DrawableOutline {
                    x: 0.0,
                    y: 0.0,
                    width: 10.0,
                    height: 10.0,
                    stroke_color: red,
                    stroke_width: 0.5,
                },
            },
            OutlineEntry {
                slot: OutlineSlot::Element(1_u32),
                outline: DrawableOutline {
                    x: 1.0,
                    y: 1.0,
                    width: 2.0,
                    height: 2.0,
                    stroke_color: blue,
                    stroke_width: 0.5,
                },
            },
        ];

        let transform = CanvasTransform::new(2.0, Vec2::new(1.0, 0.0));
        let mut sink = Recorder::default();
        paint(&entries, &transform, &mut sink);

        assert_eq!(sink.strokes.len(), 2);
        assert_eq!(sink.strokes[0], (Rect::new(2.0, 0.0, 22.0, 20.0), red, 1.0));
        assert_eq!(sink.strokes[1], (Rect::new(4.0, 2.0, 8.0, 6.0), blue, 1.0));
    }
}
