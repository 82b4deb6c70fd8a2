// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Segment plan operations.
//!
//! Each function is a pure transformation of the current shipment and
//! segment list. `apply` sequences them and records the audit trail.

use crate::command::ShipmentEdit;
use crate::error::CoreError;
use crate::policy::PlanPolicy;
use crate::state::KeySequence;
use tms_plan_domain::{
    DomainError, OrderRecord, Segment, SegmentCandidate, SegmentKey, SegmentMode, Shipment,
    TransportMode, validate_cargo, validate_continuity, validate_segment_candidate,
};

/// Renumbers segments to `1..N` in their current order.
pub fn renumber(segments: &mut [Segment]) {
    for (sequence, segment) in (1_u32..).zip(segments.iter_mut()) {
        segment.sequence = sequence;
    }
}

/// Builds the single segment mirroring a shipment's own route.
///
/// The carrier is left empty for the user to fill in.
#[must_use]
pub fn synthetic_segment(shipment: &Shipment, mode: SegmentMode, key: SegmentKey) -> Segment {
    let details: SegmentCandidate = SegmentCandidate {
        origin: shipment.origin_address.clone(),
        destination: shipment.destination_address.clone(),
        transport_mode: mode,
        ..SegmentCandidate::default()
    };
    Segment::new(key, 1, details)
}

/// Copies an order's fields onto the shipment and regenerates the plan.
///
/// Derived fields are overwritten, not merged. A single-mode order yields
/// one synthetic segment; a multimodal order yields an empty plan awaiting
/// manual entry. `None` clears the link and empties the plan.
pub fn link_order(
    shipment: &mut Shipment,
    order: Option<&OrderRecord>,
    keys: &mut KeySequence,
) -> Vec<Segment> {
    let Some(order) = order else {
        shipment.linked_order_id = None;
        return Vec::new();
    };

    shipment.linked_order_id = Some(order.id);
    shipment.origin_address.clone_from(&order.origin_address);
    shipment.destination_address.clone_from(&order.destination_address);
    shipment.cargo = order.cargo;
    shipment.shipment_type = order.shipment_type;
    shipment.transport_mode = order.transport_mode;
    shipment.incoterm = order.incoterm;

    match order.transport_mode.segment_mode() {
        Some(mode) => vec![synthetic_segment(shipment, mode, keys.next_key())],
        None => Vec::new(),
    }
}

/// Changes the shipment's transport mode and reshapes the plan to match.
///
/// - To a single mode with at most one segment: exactly one segment on the
///   shipment's route with the new mode, keeping every other field of the
///   existing segment.
/// - To a single mode with several segments: the same collapse onto the first
///   segment, but only when `confirm_truncation` is set.
/// - To multimodal: existing segments are kept as the first legs.
///
/// # Errors
///
/// Returns `TruncationRequiresConfirmation` when collapsing several segments
/// without confirmation. The shipment is left untouched in that case.
pub fn set_transport_mode(
    shipment: &mut Shipment,
    segments: &[Segment],
    new_mode: TransportMode,
    confirm_truncation: bool,
    keys: &mut KeySequence,
) -> Result<Vec<Segment>, CoreError> {
    let Some(mode) = new_mode.segment_mode() else {
        shipment.transport_mode = new_mode;
        let mut kept: Vec<Segment> = segments.to_vec();
        renumber(&mut kept);
        return Ok(kept);
    };

    if segments.len() > 1 && !confirm_truncation {
        return Err(CoreError::TruncationRequiresConfirmation {
            segment_count: segments.len(),
        });
    }

    shipment.transport_mode = new_mode;
    let segment: Segment = match segments.first() {
        Some(first) => {
            let mut kept: Segment = first.clone();
            kept.sequence = 1;
            kept.details.origin.clone_from(&shipment.origin_address);
            kept.details
                .destination
                .clone_from(&shipment.destination_address);
            kept.details.transport_mode = mode;
            kept
        }
        None => synthetic_segment(shipment, mode, keys.next_key()),
    };
    Ok(vec![segment])
}

/// Appends a validated segment at the end of the plan.
///
/// # Errors
///
/// Returns `MissingRequiredField` (or `DepartureAfterArrival`) and leaves the
/// plan unchanged if the candidate is incomplete.
pub fn add_segment(
    segments: &[Segment],
    candidate: SegmentCandidate,
    keys: &mut KeySequence,
) -> Result<Vec<Segment>, DomainError> {
    validate_segment_candidate(&candidate)?;

    let sequence: u32 = u32::try_from(segments.len()).map_or(u32::MAX, |len| len + 1);
    let mut updated: Vec<Segment> = segments.to_vec();
    updated.push(Segment::new(keys.next_unused_key(segments), sequence, candidate));
    Ok(updated)
}

/// Replaces the descriptive fields of one segment.
///
/// On a single-mode shipment the segment stays pinned to the shipment's
/// route and mode, whatever the candidate says.
///
/// # Errors
///
/// Returns `SegmentNotFound` for an unknown key, or the candidate's
/// validation error.
pub fn update_segment(
    shipment: &Shipment,
    segments: &[Segment],
    key: SegmentKey,
    mut candidate: SegmentCandidate,
) -> Result<Vec<Segment>, DomainError> {
    let index: usize = segments
        .iter()
        .position(|segment| segment.key == key)
        .ok_or(DomainError::SegmentNotFound(key))?;

    if let Some(mode) = shipment.transport_mode.segment_mode() {
        candidate.origin.clone_from(&shipment.origin_address);
        candidate
            .destination
            .clone_from(&shipment.destination_address);
        candidate.transport_mode = mode;
    }

    validate_segment_candidate(&candidate)?;

    let mut updated: Vec<Segment> = segments.to_vec();
    updated[index].details = candidate;
    Ok(updated)
}

/// Removes a segment and renumbers the rest, preserving their order.
///
/// Removing an unknown key is a no-op.
#[must_use]
pub fn remove_segment(segments: &[Segment], key: SegmentKey) -> Vec<Segment> {
    let mut remaining: Vec<Segment> = segments
        .iter()
        .filter(|segment| segment.key != key)
        .cloned()
        .collect();
    renumber(&mut remaining);
    remaining
}

/// Applies a shipment edit and keeps a single-mode plan on the new route.
///
/// # Errors
///
/// Returns `InvalidCargo` and leaves the shipment untouched if the new cargo
/// has a negative or non-finite measurement.
pub fn edit_shipment(
    shipment: &mut Shipment,
    segments: &[Segment],
    edit: ShipmentEdit,
) -> Result<Vec<Segment>, DomainError> {
    if let Some(cargo) = &edit.cargo {
        validate_cargo(cargo)?;
    }
    let sync_route: bool = edit.touches_addresses();

    if let Some(origin) = edit.origin_address {
        shipment.origin_address = origin;
    }
    if let Some(destination) = edit.destination_address {
        shipment.destination_address = destination;
    }
    if let Some(shipment_type) = edit.shipment_type {
        shipment.shipment_type = shipment_type;
    }
    if let Some(carrier_id) = edit.carrier_id {
        shipment.carrier_id = carrier_id;
    }
    if let Some(incoterm) = edit.incoterm {
        shipment.incoterm = incoterm;
    }
    if let Some(cargo) = edit.cargo {
        shipment.cargo = cargo;
    }
    if let Some(pickup) = edit.planned_pickup_date {
        shipment.planned_pickup_date = pickup;
    }
    if let Some(delivery) = edit.planned_delivery_date {
        shipment.planned_delivery_date = delivery;
    }
    if let Some(reference) = edit.reference {
        shipment.reference = reference;
    }
    if let Some(notes) = edit.notes {
        shipment.notes = notes;
    }

    let mut updated: Vec<Segment> = segments.to_vec();
    if sync_route
        && !shipment.transport_mode.is_multimodal()
        && let [only] = updated.as_mut_slice()
    {
        only.details.origin.clone_from(&shipment.origin_address);
        only.details
            .destination
            .clone_from(&shipment.destination_address);
    }
    Ok(updated)
}

/// Suggests the next segment to offer the user.
///
/// The origin defaults to where the plan currently ends, so legs chain up
/// unless the user changes it.
#[must_use]
pub fn next_segment_candidate(shipment: &Shipment, segments: &[Segment]) -> SegmentCandidate {
    segments.last().map_or_else(
        || SegmentCandidate {
            origin: shipment.origin_address.clone(),
            transport_mode: shipment.transport_mode.segment_mode().unwrap_or_default(),
            ..SegmentCandidate::default()
        },
        |last| SegmentCandidate {
            origin: last.details.destination.clone(),
            transport_mode: last.details.transport_mode,
            ..SegmentCandidate::default()
        },
    )
}

/// Checks a draft against every submission rule in the policy.
///
/// # Errors
///
/// Returns the first rule violation; see
/// [`tms_plan_domain::validate_for_submission`] for the mandatory rules.
/// Continuity is checked last, and only when the policy enables it.
pub fn validate_for_submission(
    policy: &PlanPolicy,
    shipment: &Shipment,
    segments: &[Segment],
) -> Result<(), DomainError> {
    tms_plan_domain::validate_for_submission(shipment, segments)?;

    if policy.enforce_continuity {
        validate_continuity(segments)?;
    }
    Ok(())
}
