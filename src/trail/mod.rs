// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trail-based backtracking for the face search.
//!
//! Every write to a constraint's [`Face`] goes through the trail, which keeps
//! the value it replaced. Rewinding to an earlier length pops entries newest
//! first and hands back the old values for the caller to restore, so a
//! rewind undoes exactly the writes made since that point, including faces
//! derived as a side effect of an assignment.
//!
//! The trail only stores positions; [`SearchContext::rewind_to`] applies
//! the restored values.
//!
//! [`SearchContext::rewind_to`]: crate::context::SearchContext::rewind_to

use crate::memo::ConstraintId;
use crate::state::Face;

/// A single entry in the trail, recording one face replacement.
#[derive(Debug, Clone)]
pub(crate) struct TrailEntry {
    /// Constraint whose face was replaced
    pub(crate) id: ConstraintId,
    /// The face before the change
    pub(crate) old_value: Face,
}

/// The undo log.
///
/// # Memory Model
///
/// - DYNAMIC: The trail is mutable state (Tier 2) that changes during search
/// - Each SearchContext owns its own trail
#[derive(Debug, Default)]
pub struct Trail {
    /// All trail entries recorded so far
    entries: Vec<TrailEntry>,
}

impl Trail {
    /// Initial capacity; the trail grows past it when needed.
    const INITIAL_CAPACITY: usize = 1024;

    /// Create a new empty trail.
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(Self::INITIAL_CAPACITY),
        }
    }

    /// Record that `id` held `old_value` before a write.
    pub(crate) fn record_change(&mut self, id: ConstraintId, old_value: Face) {
        self.entries.push(TrailEntry { id, old_value });
    }

    /// Remove every entry past `position`, newest first.
    ///
    /// Positions come from [`len`](Self::len).
    pub(crate) fn unwind_to(&mut self, position: usize) -> Vec<TrailEntry> {
        if position >= self.entries.len() {
            return Vec::new();
        }
        let mut undone = self.entries.split_off(position);
        undone.reverse();
        undone
    }

    /// Get the current number of entries in the trail.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the trail is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn face(min_dim: usize) -> Face {
        Face {
            min_dim,
            ..Face::default()
        }
    }

    #[test]
    fn test_trail_new() {
        let trail = Trail::new();
        assert_eq!(trail.len(), 0);
        assert!(trail.is_empty());
    }

    #[test]
    fn test_unwind_to_position() {
        let mut trail = Trail::new();

        trail.record_change(1, face(10));
        trail.record_change(2, face(20));
        let checkpoint = trail.len();
        assert_eq!(checkpoint, 2);

        trail.record_change(3, face(30));
        trail.record_change(3, face(31));
        assert_eq!(trail.len(), 4);

        let undone = trail.unwind_to(checkpoint);
        assert_eq!(trail.len(), 2);
        // Newest first, so replaying restores the oldest value last.
        assert_eq!(undone.len(), 2);
        assert_eq!(undone[0].old_value.min_dim, 31);
        assert_eq!(undone[1].old_value.min_dim, 30);
        assert_eq!(undone[1].id, 3);
    }

    #[test]
    fn test_nested_positions() {
        let mut trail = Trail::new();

        trail.record_change(1, face(1));
        let outer = trail.len();
        trail.record_change(2, face(2));
        let inner = trail.len();
        trail.record_change(3, face(3));

        assert_eq!(trail.unwind_to(inner).len(), 1);
        trail.record_change(4, face(4));
        let undone = trail.unwind_to(outer);
        assert_eq!(trail.len(), 1);
        assert_eq!(undone.iter().map(|e| e.id).collect::<Vec<_>>(), vec![4, 2]);
    }

    #[test]
    fn test_unwind_past_end_is_noop() {
        let mut trail = Trail::new();
        trail.record_change(1, face(1));
        assert!(trail.unwind_to(5).is_empty());
        assert_eq!(trail.len(), 1);
    }
}
