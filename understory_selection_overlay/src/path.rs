// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element paths: stable identifiers for elements in an edited document tree.

use alloc::string::{String, ToString};
use alloc::sync::Arc;
use core::convert::Infallible;
use core::fmt;
use core::str::FromStr;

use smallvec::SmallVec;

/// Separator used by the string form of an [`ElementPath`].
pub const PATH_SEPARATOR: char = '/';

/// An immutable path identifying one element in the edited document tree.
///
/// A path is a sequence of segments from the document root down to the
/// element. It is opaque to the overlay machinery, which only needs equality
/// and the stable string key produced by [`fmt::Display`].
///
/// Segments are reference counted, so cloning a path (for example when it is
/// stored as the identity of an overlay slot) does not copy string data.
///
/// ```rust
/// use understory_selection_overlay::ElementPath;
///
/// let card: ElementPath = "app/sidebar/card".parse().unwrap();
/// assert_eq!(card.to_string(), "app/sidebar/card");
/// assert_eq!(card.parent(), Some(ElementPath::parse("app/sidebar")));
/// assert!(ElementPath::parse("app").is_ancestor_of(&card));
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementPath {
    segments: SmallVec<[Arc<str>; 4]>,
}

impl ElementPath {
    /// Creates the empty (root) path.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates a path from a sequence of segments.
    ///
    /// Empty segments are skipped so that the string form round-trips.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            segments: segments
                .into_iter()
                .filter(|s| !s.as_ref().is_empty())
                .map(|s| Arc::from(s.as_ref()))
                .collect(),
        }
    }

    /// Parses the `/`-separated string form of a path.
    ///
    /// Leading, trailing, and repeated separators are ignored.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        Self::new(s.split(PATH_SEPARATOR))
    }

    /// Returns `true` for the root path.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Returns an iterator over the segments from the root down.
    pub fn segments(&self) -> impl Iterator<Item = &str> + '_ {
        self.segments.iter().map(|s| &**s)
    }

    /// Returns the last segment, if any.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(|s| &**s)
    }

    /// Returns a new path with `segment` appended.
    #[must_use]
    pub fn child(&self, segment: &str) -> Self {
        let mut segments = self.segments.clone();
        if !segment.is_empty() {
            segments.push(Arc::from(segment));
        }
        Self { segments }
    }

    /// Returns the parent path, or `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        let (_, rest) = self.segments.split_last()?;
        Some(Self {
            segments: rest.iter().cloned().collect(),
        })
    }

    /// Returns `true` if `self` is a strict ancestor of `other`.
    #[must_use]
    pub fn is_ancestor_of(&self, other: &Self) -> bool {
        self.segments.len() < other.segments.len() && other.segments.starts_with(&self.segments)
    }

    /// Returns `true` if `self` is a strict descendant of `other`.
    #[must_use]
    pub fn is_descendant_of(&self, other: &Self) -> bool {
        other.is_ancestor_of(self)
    }

    /// Returns the stable string key for this path.
    ///
    /// This is the same as the [`fmt::Display`] form.
    #[must_use]
    pub fn to_key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ElementPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for segment in &self.segments {
            if !first {
                f.write_str("/")?;
            }
            f.write_str(segment)?;
            first = false;
        }
        Ok(())
    }
}

impl fmt::Debug for ElementPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ElementPath({self})")
    }
}

impl FromStr for ElementPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for ElementPath {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn string_form_round_trips_and_normalizes_separators() {
        let path = ElementPath::parse("/app//sidebar/card/");
        assert_eq!(path.depth(), 3);
        assert_eq!(path.to_string(), "app/sidebar/card");
        assert_eq!(ElementPath::parse(&path.to_key()), path);
    }

    #[test]
    fn root_has_no_parent_and_empty_key() {
        let root = ElementPath::root();
        assert!(root.is_root());
        assert_eq!(root.parent(), None);
        assert_eq!(root.to_string(), "");
        assert_eq!(ElementPath::parse(""), root);
    }

    #[test]
    fn ancestry_is_strict() {
        let app = ElementPath::parse("app");
        let card = app.child("sidebar").child("card");
        assert!(app.is_ancestor_of(&card));
        assert!(card.is_descendant_of(&app));
        assert!(!card.is_ancestor_of(&card));
        assert!(!card.is_descendant_of(&card));

        // Shared prefix on the string level is not ancestry.
        let apple = ElementPath::parse("apple/x");
        assert!(!app.is_ancestor_of(&apple));
    }

    #[test]
    fn segments_iterate_from_root() {
        let path = ElementPath::new(["a", "", "b"]);
        let segments: Vec<&str> = path.segments().collect();
        assert_eq!(segments, ["a", "b"]);
        assert_eq!(path.last(), Some("b"));
    }
}
