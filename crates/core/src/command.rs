// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use time::Date;
use tms_plan_domain::{
    CargoTotals, CarrierId, Incoterm, OrderRecord, SegmentCandidate, SegmentKey, ShipmentType,
    TransportMode,
};

/// A command represents user intent on a draft as data only.
///
/// Commands are the only way to request draft changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "command")]
pub enum Command {
    /// Copy an order's fields onto the draft and regenerate the plan.
    ///
    /// `None` clears the link and empties the plan.
    LinkOrder {
        /// The order to copy from.
        order: Option<OrderRecord>,
    },
    /// Change the shipment-level transport mode.
    SetTransportMode {
        /// The new mode.
        mode: TransportMode,
        /// Allow collapsing a multi-segment plan to a single leg.
        #[serde(default)]
        confirm_truncation: bool,
    },
    /// Append a segment to the plan.
    AddSegment {
        /// The new leg.
        candidate: SegmentCandidate,
    },
    /// Replace the descriptive fields of an existing segment.
    UpdateSegment {
        /// The segment to update.
        key: SegmentKey,
        /// The new field values.
        candidate: SegmentCandidate,
    },
    /// Remove a segment and renumber the rest.
    RemoveSegment {
        /// The segment to remove.
        key: SegmentKey,
    },
    /// Edit shipment-level fields.
    EditShipment {
        /// The fields to change.
        edit: ShipmentEdit,
    },
    /// Validate the draft and hand it off.
    Submit,
}

impl Command {
    /// Returns the command name used in audit actions and logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::LinkOrder { .. } => "LinkOrder",
            Self::SetTransportMode { .. } => "SetTransportMode",
            Self::AddSegment { .. } => "AddSegment",
            Self::UpdateSegment { .. } => "UpdateSegment",
            Self::RemoveSegment { .. } => "RemoveSegment",
            Self::EditShipment { .. } => "EditShipment",
            Self::Submit => "Submit",
        }
    }
}

/// A partial update of shipment-level fields.
///
/// `None` leaves a field untouched. For optional fields the inner `Option`
/// is the new value, so `Some(None)` clears it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipmentEdit {
    /// New origin address.
    pub origin_address: Option<String>,
    /// New destination address.
    pub destination_address: Option<String>,
    /// New shipment type.
    pub shipment_type: Option<ShipmentType>,
    /// New carrier assignment.
    pub carrier_id: Option<Option<CarrierId>>,
    /// New incoterm.
    pub incoterm: Option<Option<Incoterm>>,
    /// New cargo totals.
    pub cargo: Option<CargoTotals>,
    /// New planned pickup date.
    pub planned_pickup_date: Option<Option<Date>>,
    /// New planned delivery date.
    pub planned_delivery_date: Option<Option<Date>>,
    /// New reference.
    pub reference: Option<Option<String>>,
    /// New notes.
    pub notes: Option<Option<String>>,
}

impl ShipmentEdit {
    /// Returns whether this edit changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Returns whether this edit touches an address.
    #[must_use]
    pub const fn touches_addresses(&self) -> bool {
        self.origin_address.is_some() || self.destination_address.is_some()
    }
}
