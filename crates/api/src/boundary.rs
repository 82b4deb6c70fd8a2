// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Collaborators the session talks to.

use crate::error::BoundaryError;
use serde::{Deserialize, Serialize};
use tms_plan::SubmissionPayload;
use tms_plan_domain::{OrderId, OrderRecord};

/// Resolves order identifiers to order records.
pub trait OrderLookup {
    /// Looks up an order.
    ///
    /// # Errors
    ///
    /// Returns an error if the order source cannot be queried. An unknown
    /// order is `Ok(None)`, not an error.
    fn find_order(&self, id: &OrderId) -> Result<Option<OrderRecord>, BoundaryError>;
}

/// Persists a validated shipment draft.
pub trait ShipmentSink {
    /// Stores the payload as a shipment with its segments.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload could not be stored. Nothing is
    /// considered persisted in that case.
    fn submit(&mut self, payload: &SubmissionPayload) -> Result<SubmissionReceipt, BoundaryError>;
}

/// Identifiers assigned by the sink to a stored shipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    /// The stored shipment.
    pub shipment_id: i64,
    /// The stored segments, in plan order.
    pub segment_ids: Vec<i64>,
}
