// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-memory collaborators for replays and tests.

use std::collections::HashMap;

use crate::boundary::{OrderLookup, ShipmentSink, SubmissionReceipt};
use crate::error::BoundaryError;
use tms_plan::SubmissionPayload;
use tms_plan_domain::{OrderId, OrderRecord};
use tracing::debug;

/// An order source backed by a map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderBook {
    orders: HashMap<OrderId, OrderRecord>,
    outage: Option<String>,
}

impl InMemoryOrderBook {
    /// Creates an empty order book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an order book holding the given orders.
    ///
    /// Later records replace earlier ones with the same id.
    #[must_use]
    pub fn from_records(records: Vec<OrderRecord>) -> Self {
        let orders: HashMap<OrderId, OrderRecord> = records
            .into_iter()
            .map(|record| (record.id, record))
            .collect();
        Self {
            orders,
            outage: None,
        }
    }

    /// Adds or replaces an order.
    pub fn insert(&mut self, record: OrderRecord) {
        self.orders.insert(record.id, record);
    }

    /// Makes every lookup fail with the given message until cleared.
    pub fn set_outage(&mut self, message: Option<String>) {
        self.outage = message;
    }

    /// Returns the number of orders held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Returns whether the book holds no orders.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

impl OrderLookup for InMemoryOrderBook {
    fn find_order(&self, id: &OrderId) -> Result<Option<OrderRecord>, BoundaryError> {
        if let Some(message) = &self.outage {
            return Err(BoundaryError::Unavailable {
                service: String::from("order book"),
                message: message.clone(),
            });
        }
        Ok(self.orders.get(id).cloned())
    }
}

/// A shipment sink that keeps every accepted payload.
#[derive(Debug, Clone)]
pub struct RecordingSink {
    accepted: Vec<SubmissionPayload>,
    next_id: i64,
    rejection: Option<String>,
}

impl RecordingSink {
    /// Creates a sink that accepts everything.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            accepted: Vec::new(),
            next_id: 1,
            rejection: None,
        }
    }

    /// Makes every submission fail with the given reason until cleared.
    pub fn set_rejection(&mut self, reason: Option<String>) {
        self.rejection = reason;
    }

    /// Returns the payloads accepted so far.
    #[must_use]
    pub fn accepted(&self) -> &[SubmissionPayload] {
        &self.accepted
    }

    const fn allocate_id(&mut self) -> i64 {
        let id: i64 = self.next_id;
        self.next_id += 1;
        id
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ShipmentSink for RecordingSink {
    fn submit(&mut self, payload: &SubmissionPayload) -> Result<SubmissionReceipt, BoundaryError> {
        if let Some(reason) = &self.rejection {
            return Err(BoundaryError::Rejected {
                service: String::from("shipment store"),
                reason: reason.clone(),
            });
        }

        let shipment_id: i64 = self.allocate_id();
        let segment_ids: Vec<i64> = payload
            .segments
            .iter()
            .map(|_| self.allocate_id())
            .collect();
        self.accepted.push(payload.clone());

        debug!(
            shipment_id,
            segments = segment_ids.len(),
            "Recorded shipment submission"
        );
        Ok(SubmissionReceipt {
            shipment_id,
            segment_ids,
        })
    }
}
