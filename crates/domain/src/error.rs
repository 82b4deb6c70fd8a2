// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::shipment::{AddressField, CargoField, SegmentField};
use crate::types::SegmentKey;
use time::Date;

/// Errors that can occur during domain validation.
///
/// Every variant is recoverable: it is returned to the caller so the
/// offending field can be corrected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A candidate segment is missing one or more required fields.
    MissingRequiredField {
        /// The missing fields, in declaration order.
        fields: Vec<SegmentField>,
    },
    /// The shipment has no carrier assigned.
    MissingCarrier,
    /// A shipment address is empty.
    MissingAddress {
        /// The empty address field.
        field: AddressField,
    },
    /// A multimodal shipment has no segments.
    MultimodalRequiresSegments,
    /// A cargo measurement is negative or not finite.
    InvalidCargo {
        /// The offending measurement.
        field: CargoField,
    },
    /// The planned pickup date is after the planned delivery date.
    PickupAfterDelivery {
        /// The planned pickup date.
        pickup: Date,
        /// The planned delivery date.
        delivery: Date,
    },
    /// A segment departs after it arrives.
    DepartureAfterArrival {
        /// The segment position, or `None` for a candidate not yet in the plan.
        sequence: Option<u32>,
        /// The planned departure date.
        departure: Date,
        /// The planned arrival date.
        arrival: Date,
    },
    /// Segment sequences are not exactly `1..N`.
    NonContiguousSequence {
        /// The sequence expected at this position.
        expected: u32,
        /// The sequence found.
        found: u32,
    },
    /// A segment does not start where the previous one ended.
    SegmentDiscontinuity {
        /// The sequence of the segment that breaks continuity.
        sequence: u32,
        /// The previous segment's destination.
        expected: String,
        /// This segment's origin.
        found: String,
    },
    /// No segment with the given key exists in the plan.
    SegmentNotFound(SegmentKey),
    /// Transport mode value is not recognised.
    InvalidTransportMode(String),
    /// Shipment type value is not recognised.
    InvalidShipmentType(String),
    /// Incoterm value is not recognised.
    InvalidIncoterm(String),
    /// Transfer type value is not recognised.
    InvalidTransferType(String),
    /// Draft phase value is not recognised.
    InvalidDraftPhase(String),
}

impl DomainError {
    /// Returns a stable rule identifier for this error.
    #[must_use]
    pub const fn rule(&self) -> &'static str {
        match self {
            Self::MissingRequiredField { .. } => "segment_required_fields",
            Self::MissingCarrier => "shipment_carrier_required",
            Self::MissingAddress { .. } => "shipment_addresses_required",
            Self::MultimodalRequiresSegments => "multimodal_requires_segments",
            Self::InvalidCargo { .. } => "cargo_non_negative",
            Self::PickupAfterDelivery { .. } => "pickup_not_after_delivery",
            Self::DepartureAfterArrival { .. } => "departure_not_after_arrival",
            Self::NonContiguousSequence { .. } => "contiguous_sequence",
            Self::SegmentDiscontinuity { .. } => "segment_continuity",
            Self::SegmentNotFound(_) => "segment_exists",
            Self::InvalidTransportMode(_) => "transport_mode",
            Self::InvalidShipmentType(_) => "shipment_type",
            Self::InvalidIncoterm(_) => "incoterm",
            Self::InvalidTransferType(_) => "transfer_type",
            Self::InvalidDraftPhase(_) => "draft_phase",
        }
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRequiredField { fields } => {
                let names: Vec<&str> = fields.iter().map(SegmentField::as_str).collect();
                write!(f, "Missing required segment field(s): {}", names.join(", "))
            }
            Self::MissingCarrier => write!(f, "A carrier must be assigned to the shipment"),
            Self::MissingAddress { field } => write!(f, "Shipment {field} cannot be empty"),
            Self::MultimodalRequiresSegments => {
                write!(f, "A multimodal shipment requires at least one segment")
            }
            Self::InvalidCargo { field } => {
                write!(f, "Cargo {field} must be a non-negative number")
            }
            Self::PickupAfterDelivery { pickup, delivery } => {
                write!(
                    f,
                    "Planned pickup {pickup} is after planned delivery {delivery}"
                )
            }
            Self::DepartureAfterArrival {
                sequence,
                departure,
                arrival,
            } => match sequence {
                Some(sequence) => write!(
                    f,
                    "Segment {sequence} departs on {departure} after arriving on {arrival}"
                ),
                None => write!(
                    f,
                    "Segment departs on {departure} after arriving on {arrival}"
                ),
            },
            Self::NonContiguousSequence { expected, found } => {
                write!(
                    f,
                    "Segment sequence {found} found where {expected} was expected"
                )
            }
            Self::SegmentDiscontinuity {
                sequence,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Segment {sequence} starts at '{found}' but the previous segment ends at '{expected}'"
                )
            }
            Self::SegmentNotFound(key) => write!(f, "No {key} in the plan"),
            Self::InvalidTransportMode(value) => write!(f, "Invalid transport mode: {value}"),
            Self::InvalidShipmentType(value) => write!(f, "Invalid shipment type: {value}"),
            Self::InvalidIncoterm(value) => write!(f, "Invalid incoterm: {value}"),
            Self::InvalidTransferType(value) => write!(f, "Invalid transfer type: {value}"),
            Self::InvalidDraftPhase(value) => write!(f, "Invalid draft phase: {value}"),
        }
    }
}

impl std::error::Error for DomainError {}
