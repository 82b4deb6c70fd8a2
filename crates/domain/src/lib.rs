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

mod error;
mod shipment;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use shipment::{
    AddressField, CargoField, OrderRecord, Segment, SegmentCandidate, SegmentField, Shipment,
};
pub use types::{
    CargoTotals, CarrierId, DraftPhase, Incoterm, OrderId, SegmentKey, SegmentMode, ShipmentType,
    TransferType, TransportMode,
};
pub use validation::{
    validate_cargo, validate_continuity, validate_for_submission, validate_segment_candidate,
    validate_sequence_contiguous,
};
