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

mod boundary;
mod error;
mod memory;
mod request_response;
mod session;

#[cfg(test)]
mod tests;

pub use boundary::{OrderLookup, ShipmentSink, SubmissionReceipt};
pub use error::{ApiError, BoundaryError, translate_core_error, translate_domain_error};
pub use memory::{InMemoryOrderBook, RecordingSink};
pub use request_response::{
    PlanResponse, SegmentRequest, ShipmentEditRequest, SubmitResponse, parse_date,
};
pub use session::DraftSession;
