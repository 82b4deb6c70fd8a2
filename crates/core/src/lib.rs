// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod command;
mod error;
pub mod plan;
mod policy;
mod state;

#[cfg(test)]
mod tests;

use tms_plan_domain::{DomainError, SegmentCandidate};

// Re-export public types and functions
pub use apply::apply;
pub use command::{Command, ShipmentEdit};
pub use error::CoreError;
pub use policy::PlanPolicy;
pub use state::{DraftState, KeySequence, SubmissionPayload, TransitionResult};

/// Checks whether a draft would pass submission right now.
///
/// This is a read-only validation that does not create audit events.
///
/// # Errors
///
/// Returns the first submission rule the draft violates.
pub fn validate_draft(policy: &PlanPolicy, state: &DraftState) -> Result<(), DomainError> {
    plan::validate_for_submission(policy, &state.shipment, &state.segments)
}

/// Suggests the next segment the user should be offered for this draft.
#[must_use]
pub fn suggest_next_segment(state: &DraftState) -> SegmentCandidate {
    plan::next_segment_candidate(&state.shipment, &state.segments)
}
