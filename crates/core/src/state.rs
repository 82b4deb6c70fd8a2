// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use tms_plan_audit::{AuditEvent, PlanSnapshot};
use tms_plan_domain::{DraftPhase, Segment, SegmentKey, Shipment, TransportMode};

/// Hands out draft keys for segments created while editing.
///
/// Keys are never reused within a draft, even after removals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeySequence {
    next: u64,
}

impl KeySequence {
    /// Creates a sequence starting at draft key 1.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 1 }
    }

    /// Creates a sequence that continues after any draft key already in use.
    #[must_use]
    pub fn after(segments: &[Segment]) -> Self {
        let highest: u64 = segments
            .iter()
            .filter_map(|segment| match segment.key {
                SegmentKey::Draft(id) => Some(id),
                SegmentKey::Persisted(_) => None,
            })
            .max()
            .unwrap_or(0);
        Self {
            next: Self::successor(highest),
        }
    }

    /// Returns the next draft key.
    ///
    /// Past `u64::MAX` the counter wraps to 1. Use
    /// [`KeySequence::next_unused_key`] when the result must not collide
    /// with a live segment.
    pub const fn next_key(&mut self) -> SegmentKey {
        let key: SegmentKey = SegmentKey::Draft(self.next);
        self.next = Self::successor(self.next);
        key
    }

    /// Returns the next draft key not held by any of `segments`.
    pub fn next_unused_key(&mut self, segments: &[Segment]) -> SegmentKey {
        loop {
            let key: SegmentKey = self.next_key();
            if segments.iter().all(|segment| segment.key != key) {
                return key;
            }
        }
    }

    const fn successor(id: u64) -> u64 {
        match id.checked_add(1) {
            Some(next) => next,
            None => 1,
        }
    }
}

impl Default for KeySequence {
    fn default() -> Self {
        Self::new()
    }
}

/// The complete editing state of one shipment draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftState {
    /// Where the draft is in its lifecycle.
    pub phase: DraftPhase,
    /// The shipment-level fields.
    pub shipment: Shipment,
    /// The ordered segment plan.
    pub segments: Vec<Segment>,
    /// Draft key allocation for new segments.
    pub(crate) keys: KeySequence,
}

impl DraftState {
    /// Creates an empty draft with the given transport mode and no segments.
    #[must_use]
    pub fn new(transport_mode: TransportMode) -> Self {
        Self {
            phase: DraftPhase::Empty,
            shipment: Shipment::new(transport_mode),
            segments: Vec::new(),
            keys: KeySequence::new(),
        }
    }

    /// Re-opens a previously saved shipment for editing.
    ///
    /// The segments are sorted by their stored sequence and renumbered.
    #[must_use]
    pub fn from_saved(shipment: Shipment, mut segments: Vec<Segment>) -> Self {
        segments.sort_by_key(|segment| segment.sequence);
        crate::plan::renumber(&mut segments);
        let keys: KeySequence = KeySequence::after(&segments);
        Self {
            phase: DraftPhase::Editing,
            shipment,
            segments,
            keys,
        }
    }

    /// Finds a segment by key.
    #[must_use]
    pub fn segment(&self, key: SegmentKey) -> Option<&Segment> {
        self.segments.iter().find(|segment| segment.key == key)
    }

    /// Summarises the draft for audit purposes.
    #[must_use]
    pub fn to_snapshot(&self) -> PlanSnapshot {
        PlanSnapshot::new(
            self.phase,
            self.shipment.transport_mode,
            self.segments.len(),
            self.shipment.linked_order_id,
        )
    }
}

impl Default for DraftState {
    fn default() -> Self {
        Self::new(TransportMode::default())
    }
}

/// The whole draft as handed to the persistence boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    /// The shipment-level fields.
    pub shipment: Shipment,
    /// The ordered segment plan.
    pub segments: Vec<Segment>,
}

/// The result of a successful draft transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionResult {
    /// The new draft state after the transition.
    pub new_state: DraftState,
    /// The audit event recording this transition.
    pub audit_event: AuditEvent,
    /// The validated payload, set only by `Submit`.
    pub submission: Option<SubmissionPayload>,
}
