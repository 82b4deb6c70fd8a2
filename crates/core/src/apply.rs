// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::plan;
use crate::policy::PlanPolicy;
use crate::state::{DraftState, SubmissionPayload, TransitionResult};
use tms_plan_audit::{Action, Actor, AuditEvent, Cause, PlanSnapshot};
use tms_plan_domain::{DraftPhase, Segment, TransportMode};
use tracing::{debug, info, warn};

/// Applies a command to the current draft, producing a new draft and audit event.
///
/// The input state is never modified. Every mutation moves the draft to
/// `Editing`, linking an order moves it to `Linked`, and a successful
/// `Submit` moves it to the terminal `Submitted` phase.
///
/// # Arguments
///
/// * `policy` - Optional rules to enforce at submission
/// * `state` - The current draft (immutable)
/// * `command` - The command to apply
/// * `actor` - The actor performing this action
/// * `cause` - The UI event or request behind this action
///
/// # Errors
///
/// Returns an error if:
/// - The draft was already submitted
/// - The command violates a domain rule
/// - A mode switch would drop segments without confirmation
/// - A segment is added to a single-mode plan that already has one
pub fn apply(
    policy: &PlanPolicy,
    state: &DraftState,
    command: Command,
    actor: Actor,
    cause: Cause,
) -> Result<TransitionResult, CoreError> {
    let command_name: &'static str = command.name();

    if state.phase.is_terminal() {
        warn!(command = command_name, "Rejected command on submitted draft");
        return Err(CoreError::DraftSubmitted);
    }

    let before: PlanSnapshot = state.to_snapshot();
    let mut new_state: DraftState = state.clone();
    let mut submission: Option<SubmissionPayload> = None;

    let (target, details): (DraftPhase, String) = match command {
        Command::LinkOrder { order } => {
            new_state.segments = plan::link_order(
                &mut new_state.shipment,
                order.as_ref(),
                &mut new_state.keys,
            );
            match order {
                Some(order) => (
                    DraftPhase::Linked,
                    format!(
                        "Linked order {} ({})",
                        order.order_number, order.transport_mode
                    ),
                ),
                None => (
                    editing_or_empty(state.phase),
                    String::from("Cleared order link"),
                ),
            }
        }
        Command::SetTransportMode {
            mode,
            confirm_truncation,
        } => {
            let previous: TransportMode = new_state.shipment.transport_mode;
            new_state.segments = plan::set_transport_mode(
                &mut new_state.shipment,
                &state.segments,
                mode,
                confirm_truncation,
                &mut new_state.keys,
            )
            .inspect_err(|err| warn!(%err, "Rejected transport mode change"))?;
            (
                DraftPhase::Editing,
                format!("Changed transport mode from {previous} to {mode}"),
            )
        }
        Command::AddSegment { mut candidate } => {
            if let Some(mode) = state.shipment.transport_mode.segment_mode() {
                if !state.segments.is_empty() {
                    return Err(CoreError::SingleLegPlan {
                        mode: state.shipment.transport_mode,
                    });
                }
                // A single-mode plan's only leg follows the shipment's route.
                candidate.origin.clone_from(&state.shipment.origin_address);
                candidate
                    .destination
                    .clone_from(&state.shipment.destination_address);
                candidate.transport_mode = mode;
            }
            let route: String = format!("{} -> {}", candidate.origin, candidate.destination);
            new_state.segments =
                plan::add_segment(&state.segments, candidate, &mut new_state.keys)?;
            (
                DraftPhase::Editing,
                format!("Added segment {} ({route})", new_state.segments.len()),
            )
        }
        Command::UpdateSegment { key, candidate } => {
            new_state.segments =
                plan::update_segment(&state.shipment, &state.segments, key, candidate)?;
            (DraftPhase::Editing, format!("Updated {key}"))
        }
        Command::RemoveSegment { key } => {
            new_state.segments = plan::remove_segment(&state.segments, key);
            let details: String = if new_state.segments.len() == state.segments.len() {
                format!("No {key} to remove")
            } else {
                format!("Removed {key}")
            };
            (DraftPhase::Editing, details)
        }
        Command::EditShipment { edit } => {
            new_state.segments =
                plan::edit_shipment(&mut new_state.shipment, &state.segments, edit)?;
            (DraftPhase::Editing, String::from("Edited shipment fields"))
        }
        Command::Submit => {
            plan::validate_for_submission(policy, &state.shipment, &state.segments)
                .inspect_err(|err| warn!(%err, "Draft failed submission checks"))?;
            submission = Some(SubmissionPayload {
                shipment: state.shipment.clone(),
                segments: state.segments.clone(),
            });
            (
                DraftPhase::Submitted,
                format!("Submitted with {} segment(s)", state.segments.len()),
            )
        }
    };

    if !state.phase.can_transition_to(target) {
        return Err(CoreError::InvalidPhaseTransition {
            from: state.phase,
            to: target,
        });
    }
    new_state.phase = target;

    debug_assert_contiguous(&new_state.segments);

    let after: PlanSnapshot = new_state.to_snapshot();
    if target == DraftPhase::Submitted {
        info!(%after, "Draft submitted");
    } else {
        debug!(command = command_name, %before, %after, "Applied draft command");
    }

    let action: Action = Action::new(String::from(command_name), Some(details));
    let audit_event: AuditEvent = AuditEvent::new(actor, cause, action, before, after);

    Ok(TransitionResult {
        new_state,
        audit_event,
        submission,
    })
}

/// Unlinking keeps an untouched draft `Empty`; anything else is an edit.
const fn editing_or_empty(phase: DraftPhase) -> DraftPhase {
    match phase {
        DraftPhase::Empty => DraftPhase::Empty,
        _ => DraftPhase::Editing,
    }
}

fn debug_assert_contiguous(segments: &[Segment]) {
    debug_assert!(
        (1_u32..)
            .zip(segments)
            .all(|(expected, segment)| segment.sequence == expected),
        "segment sequences must be 1..N"
    );
}
