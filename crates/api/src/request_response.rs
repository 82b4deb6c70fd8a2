// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response data transfer objects.
//!
//! Requests carry enumerations as their string names and dates as
//! `YYYY-MM-DD`, the way a form submits them. Conversion into domain types
//! happens here so the session only ever sees validated values.

use std::str::FromStr;

use crate::boundary::SubmissionReceipt;
use crate::error::{ApiError, translate_domain_error};
use serde::{Deserialize, Serialize};
use time::Date;
use tms_plan::{DraftState, ShipmentEdit, SubmissionPayload};
use tms_plan_domain::{
    CargoTotals, CarrierId, DomainError, DraftPhase, Incoterm, OrderId, Segment,
    SegmentCandidate, SegmentMode, ShipmentType, TransferType, TransportMode,
};

/// Parses a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns `InvalidInput` naming `field` if the value is not a valid date.
pub fn parse_date(field: &str, value: &str) -> Result<Date, ApiError> {
    Date::parse(
        value.trim(),
        time::macros::format_description!("[year]-[month]-[day]"),
    )
    .map_err(|e| ApiError::InvalidInput {
        field: field.to_string(),
        message: format!("Failed to parse date '{value}': {e}"),
    })
}

/// Parses an optional date, treating a blank value as absent.
fn parse_optional_date(field: &str, value: Option<&str>) -> Result<Option<Date>, ApiError> {
    match value {
        Some(value) if !value.trim().is_empty() => parse_date(field, value).map(Some),
        _ => Ok(None),
    }
}

/// Parses a field into a domain enumeration.
fn parse_enum<T>(value: &str) -> Result<T, ApiError>
where
    T: FromStr<Err = DomainError>,
{
    value.trim().parse().map_err(translate_domain_error)
}

/// Treats blank text as absent.
fn non_blank(value: Option<&String>) -> Option<String> {
    value
        .map(String::as_str)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

/// A segment as entered on the segment form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentRequest {
    /// Where the leg starts.
    pub origin: String,
    /// Where the leg ends.
    pub destination: String,
    /// `road`, `rail`, `sea` or `air`. Left out, the session picks a default.
    pub transport_mode: Option<String>,
    /// The carrier operating the leg.
    pub carrier_name: String,
    /// The carrier's booking or tracking reference.
    pub carrier_reference: Option<String>,
    /// Truck, container, wagon, aircraft, ...
    pub vehicle_type: Option<String>,
    /// Plate, container number or flight number.
    pub vehicle_reference: Option<String>,
    /// Driver name, for road legs.
    pub driver_name: Option<String>,
    /// Driver phone or e-mail.
    pub driver_contact: Option<String>,
    /// Planned departure (`YYYY-MM-DD`).
    pub planned_departure: Option<String>,
    /// Planned arrival (`YYYY-MM-DD`).
    pub planned_arrival: Option<String>,
    /// `port`, `warehouse`, `terminal`, `cross_dock`, `airport`, `rail_yard`
    /// or `other`.
    pub transfer_type: Option<String>,
    /// Where the handoff at the end of the leg happens.
    pub transfer_location: Option<String>,
}

impl SegmentRequest {
    /// Converts the form into a segment candidate.
    ///
    /// Required fields are not checked here; missing ones are reported
    /// together when the candidate is applied.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the mode, transfer type or a date cannot be
    /// parsed.
    pub fn to_candidate(&self, default_mode: SegmentMode) -> Result<SegmentCandidate, ApiError> {
        let transport_mode: SegmentMode = match non_blank(self.transport_mode.as_ref()) {
            Some(mode) => parse_enum(&mode)?,
            None => default_mode,
        };
        let transfer_type: Option<TransferType> = match non_blank(self.transfer_type.as_ref()) {
            Some(transfer) => Some(parse_enum(&transfer)?),
            None => None,
        };

        Ok(SegmentCandidate {
            origin: self.origin.trim().to_string(),
            destination: self.destination.trim().to_string(),
            transport_mode,
            carrier_name: self.carrier_name.trim().to_string(),
            carrier_reference: non_blank(self.carrier_reference.as_ref()),
            vehicle_type: non_blank(self.vehicle_type.as_ref()),
            vehicle_reference: non_blank(self.vehicle_reference.as_ref()),
            driver_name: non_blank(self.driver_name.as_ref()),
            driver_contact: non_blank(self.driver_contact.as_ref()),
            planned_departure: parse_optional_date(
                "planned_departure",
                self.planned_departure.as_deref(),
            )?,
            planned_arrival: parse_optional_date(
                "planned_arrival",
                self.planned_arrival.as_deref(),
            )?,
            transfer_type,
            transfer_location: non_blank(self.transfer_location.as_ref()),
        })
    }
}

/// Changes to shipment-level fields as entered on the shipment form.
///
/// Absent fields are left untouched. For the optional text and date fields
/// an empty string clears the value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipmentEditRequest {
    /// New pickup location.
    pub origin_address: Option<String>,
    /// New delivery location.
    pub destination_address: Option<String>,
    /// `domestic`, `international` or `cross_border`.
    pub shipment_type: Option<String>,
    /// Assigns a carrier.
    pub carrier_id: Option<i64>,
    /// Removes the carrier assignment. Ignored when `carrier_id` is set.
    pub unassign_carrier: bool,
    /// An incoterm code such as `FCA`; empty clears it.
    pub incoterm: Option<String>,
    /// Replacement cargo totals. Measurements must be non-negative.
    pub cargo: Option<CargoTotals>,
    /// Planned pickup (`YYYY-MM-DD`); empty clears it.
    pub planned_pickup_date: Option<String>,
    /// Planned delivery (`YYYY-MM-DD`); empty clears it.
    pub planned_delivery_date: Option<String>,
    /// Customer or internal reference; empty clears it.
    pub reference: Option<String>,
    /// Free-text notes; empty clears them.
    pub notes: Option<String>,
}

impl ShipmentEditRequest {
    /// Converts the form into a shipment edit.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the shipment type, incoterm or a date cannot
    /// be parsed.
    pub fn to_edit(&self) -> Result<ShipmentEdit, ApiError> {
        let shipment_type: Option<ShipmentType> = match &self.shipment_type {
            Some(value) => Some(parse_enum(value)?),
            None => None,
        };
        let incoterm: Option<Option<Incoterm>> = match &self.incoterm {
            Some(value) if value.trim().is_empty() => Some(None),
            Some(value) => Some(Some(parse_enum(value)?)),
            None => None,
        };
        let carrier_id: Option<Option<CarrierId>> = match self.carrier_id {
            Some(id) => Some(Some(CarrierId::new(id))),
            None if self.unassign_carrier => Some(None),
            None => None,
        };

        Ok(ShipmentEdit {
            origin_address: self.origin_address.as_ref().map(|v| v.trim().to_string()),
            destination_address: self
                .destination_address
                .as_ref()
                .map(|v| v.trim().to_string()),
            shipment_type,
            carrier_id,
            incoterm,
            cargo: self.cargo,
            planned_pickup_date: clearable_date(
                "planned_pickup_date",
                self.planned_pickup_date.as_deref(),
            )?,
            planned_delivery_date: clearable_date(
                "planned_delivery_date",
                self.planned_delivery_date.as_deref(),
            )?,
            reference: self.reference.as_ref().map(|v| non_blank(Some(v))),
            notes: self.notes.as_ref().map(|v| non_blank(Some(v))),
        })
    }
}

fn clearable_date(field: &str, value: Option<&str>) -> Result<Option<Option<Date>>, ApiError> {
    match value {
        Some(value) => parse_optional_date(field, Some(value)).map(Some),
        None => Ok(None),
    }
}

/// The plan as shown after each edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanResponse {
    /// The draft's lifecycle phase.
    pub phase: DraftPhase,
    /// The shipment-level transport mode.
    pub transport_mode: TransportMode,
    /// The linked order, if any.
    pub linked_order: Option<OrderId>,
    /// The ordered segment plan.
    pub segments: Vec<Segment>,
    /// A success message.
    pub message: String,
}

impl PlanResponse {
    pub(crate) fn from_state(state: &DraftState, message: String) -> Self {
        Self {
            phase: state.phase,
            transport_mode: state.shipment.transport_mode,
            linked_order: state.shipment.linked_order_id,
            segments: state.segments.clone(),
            message,
        }
    }
}

/// The outcome of an accepted submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitResponse {
    /// Identifiers assigned by the sink.
    pub receipt: SubmissionReceipt,
    /// What was handed to the sink.
    pub payload: SubmissionPayload,
    /// A success message.
    pub message: String,
}
