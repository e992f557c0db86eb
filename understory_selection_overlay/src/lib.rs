// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_selection_overlay --heading-base-level=0

//! Understory Selection Overlay: selection outlines for canvas editors.
//!
//! Given the elements currently selected on a zoomable canvas, this crate
//! computes the highlighted rectangles drawn around them:
//!
//! - one **group outline** enclosing the whole selection, drawn in the
//!   theme's multi-selection color, and
//! - one **element outline** per selected element, drawn in a color chosen
//!   per element (for example depending on focus).
//!
//! The crate does not own the document, its metadata, or the drawing surface.
//! Frames and colors are read through [`GeometryProvider`] and
//! [`ColorResolver`], which the host implements over a read-only snapshot of
//! its editor state; outlines are handed to an [`OverlaySink`].
//!
//! ## Geometry
//!
//! An outline encloses the union of its targets' canvas-space frames. Targets
//! without a frame are skipped; when none has a frame, there is no outline.
//! Outline placement is corrected for zoom so the stroke looks the same at
//! every scale: the origin is inset by half a device pixel, the extent shrinks
//! by one and a half device pixels, and the stroke is one device pixel wide.
//! [`OutlineStyle`] holds these numbers.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use understory_selection_overlay::{
//!     ElementPath, FocusColors, OutlineResolver, OutlineSlot, OverlayTheme,
//! };
//!
//! let title = ElementPath::parse("app/card/title");
//! let button = ElementPath::parse("app/card/button");
//! let geometry = |path: &ElementPath| match path.last() {
//!     Some("title") => Some(Rect::new(10.0, 10.0, 110.0, 30.0)),
//!     Some("button") => Some(Rect::new(10.0, 40.0, 60.0, 60.0)),
//!     _ => None,
//! };
//! let focused = ElementPath::parse("app/card");
//! let colors = FocusColors::new(Some(&focused));
//! let theme = OverlayTheme::default();
//!
//! // Canvas zoomed to 200%.
//! let resolver = OutlineResolver::new(&geometry, &colors, &theme, 2.0);
//! let overlay = resolver.render(&[title.clone(), button]);
//!
//! assert_eq!(overlay.len(), 3);
//! assert_eq!(overlay[0].slot, OutlineSlot::Group);
//! assert_eq!(overlay[0].outline.stroke_color, theme.multiselect_bounds);
//! assert_eq!(overlay[0].outline.stroke_width, 0.5);
//! assert_eq!(overlay[1].slot, OutlineSlot::Element(title));
//! assert_eq!(overlay[1].outline.stroke_color, theme.focused_child);
//! ```
//!
//! ## Retained hosts
//!
//! Every render produces a fresh list. Hosts that keep overlay nodes alive
//! between frames can diff successive lists with [`OverlayList`], which
//! matches outlines by their [`OutlineSlot`] identity, and can skip repeated
//! lookups with [`OutlineCache`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod cache;
mod canvas;
mod outline;
mod overlay;
mod paint;
mod path;
mod provider;
mod reconcile;
mod theme;

pub use cache::OutlineCache;
pub use canvas::{CanvasTransform, MIN_SCALE, ScaleFactor};
pub use outline::{ColorRole, DrawableOutline, OutlineResolver, OutlineStyle, bounding_rect};
pub use overlay::{GROUP_KEY, OutlineEntry, OutlineSlot};
pub use paint::{OverlaySink, paint};
pub use path::{ElementPath, PATH_SEPARATOR};
pub use provider::{ColorResolver, FocusColors, GeometryProvider};
pub use reconcile::{OverlayChange, OverlayList, apply_changes, diff_overlays};
pub use theme::OverlayTheme;
