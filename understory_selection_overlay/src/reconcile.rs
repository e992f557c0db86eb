// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyed reconciliation of successive overlay lists.
//!
//! Hosts that keep retained overlay nodes (DOM elements, scene nodes) can use
//! [`OverlayList`] to patch those nodes in place instead of rebuilding them on
//! every render. This is only an optimization: applying the reported changes
//! to the previous list always yields exactly the new list.

use alloc::vec::Vec;

use crate::{OutlineEntry, OutlineSlot};

/// One edit turning a previous overlay list into the next one.
///
/// Changes are meant to be applied in order; each index refers to the list as
/// it is after all earlier changes.
#[derive(Clone, Debug, PartialEq)]
pub enum OverlayChange<K> {
    /// Remove the entry at `index`.
    Removed {
        /// Position of the removed entry.
        index: usize,
        /// Identity of the removed entry.
        slot: OutlineSlot<K>,
    },
    /// Insert `entry` at `index`.
    Inserted {
        /// Position of the new entry.
        index: usize,
        /// The new entry.
        entry: OutlineEntry<K>,
    },
    /// Replace the entry at `index`, which keeps its slot but changed geometry or color.
    Restyled {
        /// Position of the entry.
        index: usize,
        /// The updated entry.
        entry: OutlineEntry<K>,
    },
}

/// Computes the changes turning `old` into `new`, matching entries by slot.
///
/// Entries whose slot disappears are removed; entries that keep their slot and
/// position but change outline are restyled; entries that are new or moved are
/// inserted (a moved entry is removed from its old position first). Unchanged
/// entries produce no change.
pub fn diff_overlays<K>(old: &[OutlineEntry<K>], new: &[OutlineEntry<K>]) -> Vec<OverlayChange<K>>
where
    K: Clone + PartialEq,
{
    let mut changes = Vec::new();
    let mut working: Vec<OutlineEntry<K>> = old.to_vec();

    // Vanished slots, back to front so earlier indices stay valid.
    for index in (0..working.len()).rev() {
        if !new.iter().any(|e| e.slot == working[index].slot) {
            let removed = working.remove(index);
            changes.push(OverlayChange::Removed {
                index,
                slot: removed.slot,
            });
        }
    }

    for (index, entry) in new.iter().enumerate() {
        match working.get(index) {
            Some(current) if current.slot == entry.slot => {
                if current.outline != entry.outline {
                    working[index] = entry.clone();
                    changes.push(OverlayChange::Restyled {
                        index,
                        entry: entry.clone(),
                    });
                }
            }
            _ => {
                if let Some(offset) = working[index.min(working.len())..]
                    .iter()
                    .position(|e| e.slot == entry.slot)
                {
                    let at = index + offset;
                    let moved = working.remove(at);
                    changes.push(OverlayChange::Removed {
                        index: at,
                        slot: moved.slot,
                    });
                }
                working.insert(index, entry.clone());
                changes.push(OverlayChange::Inserted {
                    index,
                    entry: entry.clone(),
                });
            }
        }
    }

    // Only reachable when `old` repeated a slot more often than `new` does.
    for index in (new.len()..working.len()).rev() {
        let removed = working.remove(index);
        changes.push(OverlayChange::Removed {
            index,
            slot: removed.slot,
        });
    }

    changes
}

/// Applies `changes` produced by [`diff_overlays`] to `list`.
///
/// Changes whose index is out of range for `list` are skipped. That cannot
/// happen for changes computed from the same list.
pub fn apply_changes<K: Clone>(list: &mut Vec<OutlineEntry<K>>, changes: &[OverlayChange<K>]) {
    for change in changes {
        match change {
            OverlayChange::Removed { index, .. } if *index < list.len() => {
                list.remove(*index);
            }
            OverlayChange::Inserted { index, entry } if *index <= list.len() => {
                list.insert(*index, entry.clone());
            }
            OverlayChange::Restyled { index, entry } => {
                if let Some(slot) = list.get_mut(*index) {
                    *slot = entry.clone();
                } else {
                    log::warn!("skipping restyle at {index}, list has {} entries", list.len());
                }
            }
            OverlayChange::Removed { index, .. } | OverlayChange::Inserted { index, .. } => {
                log::warn!("skipping change at {index}, list has {} entries", list.len());
            }
        }
    }
}

/// The overlay list a host currently shows.
///
/// ```rust
/// use kurbo::Rect;
/// use understory_selection_overlay::{OutlineResolver, OverlayChange, OverlayList, OverlayTheme};
///
/// let geometry = |_: &u32| Some(Rect::new(0.0, 0.0, 10.0, 10.0));
/// let colors = |_: &u32, theme: &OverlayTheme| theme.primary;
/// let theme = OverlayTheme::default();
/// let resolver = OutlineResolver::new(&geometry, &colors, &theme, 1.0);
///
/// let mut shown = OverlayList::new();
/// let first = shown.update(resolver.render(&[1_u32]));
/// assert_eq!(first.len(), 2);
///
/// // Same selection, same state: nothing to patch.
/// assert!(shown.update(resolver.render(&[1_u32])).is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct OverlayList<K> {
    entries: Vec<OutlineEntry<K>>,
}

impl<K> OverlayList<K> {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns the entries currently shown.
    #[must_use]
    pub fn entries(&self) -> &[OutlineEntry<K>] {
        &self.entries
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<K: Clone + PartialEq> OverlayList<K> {
    /// Replaces the shown entries with `next` and returns the changes.
    pub fn update(&mut self, next: Vec<OutlineEntry<K>>) -> Vec<OverlayChange<K>> {
        let changes = diff_overlays(&self.entries, &next);
        self.entries = next;
        changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DrawableOutline;
    use alloc::vec;
    use peniko::Color;

    fn entry(slot: OutlineSlot<u32>, x: f64) -> OutlineEntry<u32> {
        OutlineEntry {
            slot,
            outline: DrawableOutline {
                x,
                y: 0.0,
                width: 1.0,
                height: 1.0,
                stroke_color: Color::from_rgba8(0, 0, 0, 255),
                stroke_width: 1.0,
            },
        }
    }

    fn el(id: u32, x: f64) -> OutlineEntry<u32> {
        entry(OutlineSlot::Element(id), x)
    }

    fn round_trip(old: &[OutlineEntry<u32>], new: &[OutlineEntry<u32>]) -> Vec<OverlayChange<u32>> {
        let changes = diff_overlays(old, new);
        let mut patched = old.to_vec();
        apply_changes(&mut patched, &changes);
        assert_eq!(patched, new, "patched list must equal the new list");
        changes
    }

    #[test]
    fn identical_lists_produce_no_changes() {
        let list = vec![entry(OutlineSlot::Group, 0.0), el(1, 0.0), el(2, 0.0)];
        assert!(round_trip(&list, &list).is_empty());
    }

    #[test]
    fn moved_geometry_is_a_restyle() {
        let old = vec![entry(OutlineSlot::Group, 0.0), el(1, 0.0)];
        let new = vec![entry(OutlineSlot::Group, 5.0), el(1, 0.0)];
        let changes = round_trip(&old, &new);
        assert_eq!(changes.len(), 1);
        assert!(matches!(changes[0], OverlayChange::Restyled { index: 0, .. }));
    }

    #[test]
    fn deselected_elements_are_removed() {
        let old = vec![entry(OutlineSlot::Group, 0.0), el(1, 0.0), el(2, 0.0)];
        let new = vec![el(2, 0.0)];
        let changes = round_trip(&old, &new);
        assert_eq!(changes.len(), 2);
        assert!(
            changes
                .iter()
                .all(|c| matches!(c, OverlayChange::Removed { .. }))
        );
    }

    #[test]
    fn added_elements_are_inserted_in_order() {
        let old = vec![el(1, 0.0)];
        let new = vec![entry(OutlineSlot::Group, 0.0), el(1, 0.0), el(3, 0.0)];
        let changes = round_trip(&old, &new);
        assert_eq!(changes.len(), 2);
        assert!(matches!(changes[0], OverlayChange::Inserted { index: 0, .. }));
        assert!(matches!(changes[1], OverlayChange::Inserted { index: 2, .. }));
    }

    #[test]
    fn reordered_selection_round_trips() {
        let old = vec![entry(OutlineSlot::Group, 0.0), el(1, 0.0), el(2, 0.0), el(3, 0.0)];
        let new = vec![entry(OutlineSlot::Group, 0.0), el(3, 0.0), el(1, 1.0), el(2, 0.0)];
        round_trip(&old, &new);
    }

    #[test]
    fn out_of_range_changes_are_skipped() {
        let mut list = vec![entry(OutlineSlot::Group, 0.0), el(1, 1.0)];
        let before = list.clone();
        apply_changes(
            &mut list,
            &[
                OverlayChange::Removed {
                    index: 5,
                    slot: OutlineSlot::Element(9),
                },
                OverlayChange::Inserted {
                    index: 3,
                    entry: el(9, 9.0),
                },
                OverlayChange::Restyled {
                    index: 2,
                    entry: el(1, 4.0),
                },
            ],
        );
        assert_eq!(list, before);

        // In-range changes in the same batch still apply.
        apply_changes(
            &mut list,
            &[
                OverlayChange::Removed {
                    index: 7,
                    slot: OutlineSlot::Group,
                },
                OverlayChange::Inserted {
                    index: 2,
                    entry: el(2, 2.0),
                },
            ],
        );
        assert_eq!(list.len(), 3);
        assert_eq!(list[2], el(2, 2.0));
    }

    #[test]
    fn duplicate_slots_round_trip() {
        let old = vec![el(1, 0.0), el(1, 0.0), el(2, 0.0)];
        let new = vec![el(2, 0.0), el(1, 0.0)];
        round_trip(&old, &new);
    }
}
