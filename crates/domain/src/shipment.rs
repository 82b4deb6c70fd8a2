// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{
    CargoTotals, CarrierId, Incoterm, OrderId, SegmentKey, SegmentMode, ShipmentType,
    TransferType, TransportMode,
};
use serde::{Deserialize, Serialize};
use time::Date;

/// A shipment draft under construction.
///
/// The draft has no identity of its own until the persistence boundary
/// accepts it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Shipment {
    /// The order this draft was pre-populated from, if any.
    pub linked_order_id: Option<OrderId>,
    /// Single-leg mode, or `Multimodal` for an explicit segment plan.
    pub transport_mode: TransportMode,
    /// Domestic, international or cross-border.
    pub shipment_type: ShipmentType,
    /// Pickup location.
    pub origin_address: String,
    /// Delivery location.
    pub destination_address: String,
    /// The contracted carrier. Required for submission.
    pub carrier_id: Option<CarrierId>,
    /// Delivery terms. Only meaningful when customs apply.
    pub incoterm: Option<Incoterm>,
    /// Weight, volume and package count.
    pub cargo: CargoTotals,
    /// Planned pickup date.
    pub planned_pickup_date: Option<Date>,
    /// Planned delivery date.
    pub planned_delivery_date: Option<Date>,
    /// Free-text customer or internal reference.
    pub reference: Option<String>,
    /// Free-text notes.
    pub notes: Option<String>,
}

impl Shipment {
    /// Creates an empty draft with the given transport mode.
    #[must_use]
    pub fn new(transport_mode: TransportMode) -> Self {
        Self {
            transport_mode,
            ..Self::default()
        }
    }

    /// Returns the incoterm if the shipment type makes it applicable.
    #[must_use]
    pub const fn effective_incoterm(&self) -> Option<Incoterm> {
        if self.shipment_type.requires_customs() {
            self.incoterm
        } else {
            None
        }
    }
}

/// An order record supplied by the order-lookup boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// The order identifier.
    pub id: OrderId,
    /// Human-readable order number.
    pub order_number: String,
    /// Pickup location.
    pub origin_address: String,
    /// Delivery location.
    pub destination_address: String,
    /// Domestic, international or cross-border.
    pub shipment_type: ShipmentType,
    /// The requested transport mode.
    pub transport_mode: TransportMode,
    /// Delivery terms, if agreed.
    pub incoterm: Option<Incoterm>,
    /// Cargo totals of the order lines.
    pub cargo: CargoTotals,
}

/// The user-editable fields of a segment.
///
/// Used both for new segments and for edits of existing ones.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SegmentCandidate {
    /// Where this leg starts.
    pub origin: String,
    /// Where this leg ends.
    pub destination: String,
    /// The single mode carrying this leg.
    pub transport_mode: SegmentMode,
    /// The carrier operating this leg.
    pub carrier_name: String,
    /// The carrier's booking or tracking reference.
    pub carrier_reference: Option<String>,
    /// Truck, container, wagon, aircraft, ...
    pub vehicle_type: Option<String>,
    /// Plate, container number, flight number, ...
    pub vehicle_reference: Option<String>,
    /// Driver name, for road legs.
    pub driver_name: Option<String>,
    /// Driver phone or e-mail.
    pub driver_contact: Option<String>,
    /// Planned departure date.
    pub planned_departure: Option<Date>,
    /// Planned arrival date.
    pub planned_arrival: Option<Date>,
    /// The handoff at the end of this leg.
    pub transfer_type: Option<TransferType>,
    /// Where the handoff happens.
    pub transfer_location: Option<String>,
}

impl SegmentCandidate {
    /// Creates a candidate leg with only its route, mode and carrier set.
    #[must_use]
    pub fn new(
        origin: &str,
        destination: &str,
        transport_mode: SegmentMode,
        carrier_name: &str,
    ) -> Self {
        Self {
            origin: origin.to_string(),
            destination: destination.to_string(),
            transport_mode,
            carrier_name: carrier_name.to_string(),
            ..Self::default()
        }
    }

    /// Sets the planned departure and arrival dates.
    #[must_use]
    pub fn with_schedule(mut self, departure: Date, arrival: Date) -> Self {
        self.planned_departure = Some(departure);
        self.planned_arrival = Some(arrival);
        self
    }
}

/// One leg of a shipment's transport plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Identifies this segment within the draft.
    pub key: SegmentKey,
    /// 1-based position in the plan.
    pub sequence: u32,
    /// The descriptive fields of this leg.
    #[serde(flatten)]
    pub details: SegmentCandidate,
}

impl Segment {
    /// Creates a segment from a candidate at the given position.
    #[must_use]
    pub const fn new(key: SegmentKey, sequence: u32, details: SegmentCandidate) -> Self {
        Self {
            key,
            sequence,
            details,
        }
    }

    /// Where this leg starts.
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.details.origin
    }

    /// Where this leg ends.
    #[must_use]
    pub fn destination(&self) -> &str {
        &self.details.destination
    }

    /// The mode carrying this leg.
    #[must_use]
    pub const fn transport_mode(&self) -> SegmentMode {
        self.details.transport_mode
    }
}

/// A required segment field, as reported by `MissingRequiredField`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentField {
    /// Segment origin.
    Origin,
    /// Segment destination.
    Destination,
    /// Carrier name.
    CarrierName,
    /// Planned departure date.
    PlannedDeparture,
    /// Planned arrival date.
    PlannedArrival,
}

impl SegmentField {
    /// Returns the field name as exposed to callers.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Origin => "origin",
            Self::Destination => "destination",
            Self::CarrierName => "carrier_name",
            Self::PlannedDeparture => "planned_departure",
            Self::PlannedArrival => "planned_arrival",
        }
    }
}

impl std::fmt::Display for SegmentField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A shipment address field, as reported by `MissingAddress`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressField {
    /// The shipment origin address.
    Origin,
    /// The shipment destination address.
    Destination,
}

impl AddressField {
    /// Returns the field name as exposed to callers.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Origin => "origin_address",
            Self::Destination => "destination_address",
        }
    }
}

impl std::fmt::Display for AddressField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A cargo measurement, as reported by `InvalidCargo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CargoField {
    /// Gross weight.
    WeightKg,
    /// Volume.
    VolumeM3,
}

impl CargoField {
    /// Returns the field name as exposed to callers.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WeightKg => "weight_kg",
            Self::VolumeM3 => "volume_m3",
        }
    }
}

impl std::fmt::Display for CargoField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
