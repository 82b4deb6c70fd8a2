// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::shipment::{
    AddressField, CargoField, Segment, SegmentCandidate, SegmentField, Shipment,
};
use crate::types::{CargoTotals, TransportMode};
use time::Date;

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn check_dates(
    sequence: Option<u32>,
    departure: Option<Date>,
    arrival: Option<Date>,
) -> Result<(), DomainError> {
    if let (Some(departure), Some(arrival)) = (departure, arrival)
        && departure > arrival
    {
        return Err(DomainError::DepartureAfterArrival {
            sequence,
            departure,
            arrival,
        });
    }
    Ok(())
}

/// Validates that a candidate segment can be added to a plan.
///
/// Origin, destination, carrier name and both planned dates are required.
/// Whitespace-only text counts as empty.
///
/// # Errors
///
/// Returns an error if:
/// - Any required field is empty (`MissingRequiredField`, listing all of them)
/// - The planned departure is after the planned arrival
pub fn validate_segment_candidate(candidate: &SegmentCandidate) -> Result<(), DomainError> {
    let mut missing: Vec<SegmentField> = Vec::new();

    if is_blank(&candidate.origin) {
        missing.push(SegmentField::Origin);
    }
    if is_blank(&candidate.destination) {
        missing.push(SegmentField::Destination);
    }
    if is_blank(&candidate.carrier_name) {
        missing.push(SegmentField::CarrierName);
    }
    if candidate.planned_departure.is_none() {
        missing.push(SegmentField::PlannedDeparture);
    }
    if candidate.planned_arrival.is_none() {
        missing.push(SegmentField::PlannedArrival);
    }

    if !missing.is_empty() {
        return Err(DomainError::MissingRequiredField { fields: missing });
    }

    check_dates(None, candidate.planned_departure, candidate.planned_arrival)
}

/// Validates that cargo weight and volume, when given, are finite and non-negative.
///
/// # Errors
///
/// Returns `InvalidCargo` for the first measurement that is negative, infinite or NaN.
pub fn validate_cargo(cargo: &CargoTotals) -> Result<(), DomainError> {
    let measurements: [(CargoField, Option<f64>); 2] = [
        (CargoField::WeightKg, cargo.weight_kg),
        (CargoField::VolumeM3, cargo.volume_m3),
    ];
    for (field, value) in measurements {
        if let Some(value) = value
            && (!value.is_finite() || value < 0.0)
        {
            return Err(DomainError::InvalidCargo { field });
        }
    }
    Ok(())
}

/// Validates that segment sequences are exactly `1..N` in list order.
///
/// # Errors
///
/// Returns `NonContiguousSequence` at the first position that does not match.
pub fn validate_sequence_contiguous(segments: &[Segment]) -> Result<(), DomainError> {
    for (expected, segment) in (1_u32..).zip(segments) {
        if segment.sequence != expected {
            return Err(DomainError::NonContiguousSequence {
                expected,
                found: segment.sequence,
            });
        }
    }
    Ok(())
}

/// Validates that every segment starts where the previous one ended.
///
/// Comparison ignores surrounding whitespace and ASCII case.
///
/// # Errors
///
/// Returns `SegmentDiscontinuity` for the first segment that breaks the chain.
pub fn validate_continuity(segments: &[Segment]) -> Result<(), DomainError> {
    for pair in segments.windows(2) {
        let (previous, current) = (&pair[0], &pair[1]);
        if !previous
            .destination()
            .trim()
            .eq_ignore_ascii_case(current.origin().trim())
        {
            return Err(DomainError::SegmentDiscontinuity {
                sequence: current.sequence,
                expected: previous.destination().to_string(),
                found: current.origin().to_string(),
            });
        }
    }
    Ok(())
}

/// Validates a shipment draft and its segments before hand-off.
///
/// This is a pure check with no side effects. Rules are applied in order
/// and the first failure is returned.
///
/// # Errors
///
/// Returns an error if:
/// - No carrier is assigned (`MissingCarrier`)
/// - The origin or destination address is empty (`MissingAddress`)
/// - The shipment is multimodal with no segments (`MultimodalRequiresSegments`)
/// - A cargo weight or volume is negative or not finite (`InvalidCargo`)
/// - The planned pickup is after the planned delivery
/// - Any segment departs after it arrives
/// - Segment sequences are not `1..N`
pub fn validate_for_submission(
    shipment: &Shipment,
    segments: &[Segment],
) -> Result<(), DomainError> {
    if shipment.carrier_id.is_none() {
        return Err(DomainError::MissingCarrier);
    }

    if is_blank(&shipment.origin_address) {
        return Err(DomainError::MissingAddress {
            field: AddressField::Origin,
        });
    }
    if is_blank(&shipment.destination_address) {
        return Err(DomainError::MissingAddress {
            field: AddressField::Destination,
        });
    }

    if shipment.transport_mode == TransportMode::Multimodal && segments.is_empty() {
        return Err(DomainError::MultimodalRequiresSegments);
    }

    validate_cargo(&shipment.cargo)?;

    if let (Some(pickup), Some(delivery)) =
        (shipment.planned_pickup_date, shipment.planned_delivery_date)
        && pickup > delivery
    {
        return Err(DomainError::PickupAfterDelivery { pickup, delivery });
    }

    for segment in segments {
        check_dates(
            Some(segment.sequence),
            segment.details.planned_departure,
            segment.details.planned_arrival,
        )?;
    }

    validate_sequence_contiguous(segments)
}
