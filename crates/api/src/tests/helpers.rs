// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use tms_plan::PlanPolicy;
use tms_plan_audit::{Actor, Cause};
use tms_plan_domain::{CargoTotals, Incoterm, OrderId, OrderRecord, ShipmentType, TransportMode};

use crate::{DraftSession, InMemoryOrderBook, SegmentRequest, ShipmentEditRequest};

pub fn create_test_actor() -> Actor {
    Actor::operator("dispatcher-1")
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("ui-evt-1"), String::from("Form change"))
}

pub fn create_test_order(id: i64, mode: TransportMode) -> OrderRecord {
    OrderRecord {
        id: OrderId::new(id),
        order_number: format!("ORD-{id:04}"),
        origin_address: String::from("Rotterdam"),
        destination_address: String::from("Milan"),
        shipment_type: ShipmentType::CrossBorder,
        transport_mode: mode,
        incoterm: Some(Incoterm::Dap),
        cargo: CargoTotals::new(Some(9800.0), Some(42.0), Some(20)),
    }
}

pub fn create_test_order_book() -> InMemoryOrderBook {
    InMemoryOrderBook::from_records(vec![
        create_test_order(1, TransportMode::Road),
        create_test_order(2, TransportMode::Multimodal),
    ])
}

pub fn create_test_session() -> DraftSession {
    DraftSession::new(
        TransportMode::Road,
        PlanPolicy::default(),
        create_test_actor(),
    )
}

pub fn create_segment_request(origin: &str, destination: &str) -> SegmentRequest {
    SegmentRequest {
        origin: origin.to_string(),
        destination: destination.to_string(),
        carrier_name: String::from("Alpine Haulage"),
        planned_departure: Some(String::from("2026-05-04")),
        planned_arrival: Some(String::from("2026-05-05")),
        ..SegmentRequest::default()
    }
}

pub fn assign_carrier(id: i64) -> ShipmentEditRequest {
    ShipmentEditRequest {
        carrier_id: Some(id),
        ..ShipmentEditRequest::default()
    }
}

/// A session linked to multimodal order 2 with two chained legs.
pub fn create_multimodal_session() -> DraftSession {
    let mut session: DraftSession = create_test_session();
    session
        .link_order(
            Some(OrderId::new(2)),
            &create_test_order_book(),
            create_test_cause(),
        )
        .unwrap();
    session
        .add_segment(
            SegmentRequest {
                transport_mode: Some(String::from("sea")),
                ..create_segment_request("Rotterdam", "Genoa")
            },
            create_test_cause(),
        )
        .unwrap();
    session
        .add_segment(
            SegmentRequest {
                transport_mode: Some(String::from("rail")),
                ..create_segment_request("Genoa", "Milan")
            },
            create_test_cause(),
        )
        .unwrap();
    session
}
