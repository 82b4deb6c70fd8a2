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
    clippy::all
)]

use serde::{Deserialize, Serialize};
use tms_plan_domain::{DraftPhase, OrderId, TransportMode};

/// Represents the entity editing a draft.
///
/// Usually the operator behind the editing session; `system` for
/// automated imports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The type of actor (e.g., "operator", "system").
    pub actor_type: String,
}

impl Actor {
    /// Creates a new Actor.
    #[must_use]
    pub const fn new(id: String, actor_type: String) -> Self {
        Self { id, actor_type }
    }

    /// Creates an operator actor.
    #[must_use]
    pub fn operator(id: &str) -> Self {
        Self::new(id.to_string(), String::from("operator"))
    }

    /// Creates the actor used for automated changes.
    #[must_use]
    pub fn system() -> Self {
        Self::new(String::from("system"), String::from("system"))
    }
}

/// The UI event or request that triggered a transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cause {
    /// A unique identifier for this cause (e.g., request ID, event ID).
    pub id: String,
    /// A description of the cause.
    pub description: String,
}

impl Cause {
    /// Creates a new Cause.
    #[must_use]
    pub const fn new(id: String, description: String) -> Self {
        Self { id, description }
    }
}

/// The plan operation that was performed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// The command name (e.g., "`AddSegment`", "`LinkOrder`").
    pub name: String,
    /// Optional human-readable details.
    pub details: Option<String>,
}

impl Action {
    /// Creates a new Action.
    #[must_use]
    pub const fn new(name: String, details: Option<String>) -> Self {
        Self { name, details }
    }
}

/// A compact summary of a draft's plan at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSnapshot {
    /// The editing phase.
    pub phase: DraftPhase,
    /// The shipment-level transport mode.
    pub transport_mode: TransportMode,
    /// Number of segments in the plan.
    pub segment_count: usize,
    /// The linked order, if any.
    pub linked_order: Option<OrderId>,
}

impl PlanSnapshot {
    /// Creates a new `PlanSnapshot`.
    #[must_use]
    pub const fn new(
        phase: DraftPhase,
        transport_mode: TransportMode,
        segment_count: usize,
        linked_order: Option<OrderId>,
    ) -> Self {
        Self {
            phase,
            transport_mode,
            segment_count,
            linked_order,
        }
    }
}

impl std::fmt::Display for PlanSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "phase={},mode={},segments={}",
            self.phase, self.transport_mode, self.segment_count
        )?;
        if let Some(order) = self.linked_order {
            write!(f, ",order={order}")?;
        }
        Ok(())
    }
}

/// An immutable record of one successful plan transition.
///
/// Every successful transition produces exactly one audit event capturing
/// who acted, why, what was done, and the plan before and after.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    /// The actor who initiated this change.
    pub actor: Actor,
    /// The cause or reason for this change.
    pub cause: Cause,
    /// The action that was performed.
    pub action: Action,
    /// The plan before the transition.
    pub before: PlanSnapshot,
    /// The plan after the transition.
    pub after: PlanSnapshot,
}

impl AuditEvent {
    /// Creates a new `AuditEvent`.
    #[must_use]
    pub const fn new(
        actor: Actor,
        cause: Cause,
        action: Action,
        before: PlanSnapshot,
        after: PlanSnapshot,
    ) -> Self {
        Self {
            actor,
            cause,
            action,
            before,
            after,
        }
    }

    /// Returns whether the transition changed the plan summary.
    #[must_use]
    pub fn changed_plan(&self) -> bool {
        self.before != self.after
    }
}

#[cfg(test)]
mod tests;
