// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use tms_plan_domain::{DomainError, DraftPhase, TransportMode};

/// Errors that can occur during draft transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The draft was already submitted and accepts no further commands.
    DraftSubmitted,
    /// Switching to a single mode would drop segments and was not confirmed.
    TruncationRequiresConfirmation {
        /// Number of segments currently in the plan.
        segment_count: usize,
    },
    /// A single-mode plan already has its one segment.
    SingleLegPlan {
        /// The shipment's transport mode.
        mode: TransportMode,
    },
    /// The command cannot move the draft from its current phase.
    InvalidPhaseTransition {
        /// The current phase.
        from: DraftPhase,
        /// The phase the command would move to.
        to: DraftPhase,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::DraftSubmitted => write!(f, "The draft has already been submitted"),
            Self::TruncationRequiresConfirmation { segment_count } => {
                write!(
                    f,
                    "Switching to a single mode would collapse {segment_count} segments into one; confirmation required"
                )
            }
            Self::SingleLegPlan { mode } => {
                write!(
                    f,
                    "A {mode} shipment is carried by a single segment; switch to multimodal to add legs"
                )
            }
            Self::InvalidPhaseTransition { from, to } => {
                write!(f, "Cannot move draft from {from} to {to}")
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
