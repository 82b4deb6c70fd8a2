// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use tms_plan::PlanPolicy;
use tms_plan_domain::{
    CargoTotals, CarrierId, DraftPhase, OrderId, SegmentKey, SegmentMode, Shipment,
    TransportMode,
};

use super::helpers::{
    assign_carrier, create_multimodal_session, create_segment_request, create_test_actor,
    create_test_cause, create_test_order_book, create_test_session,
};
use crate::{
    ApiError, BoundaryError, DraftSession, InMemoryOrderBook, PlanResponse, RecordingSink,
    SegmentRequest, ShipmentEditRequest, SubmitResponse,
};

// ============================================================================
// Order linking
// ============================================================================

#[test]
fn test_link_road_order_creates_synthetic_segment() {
    let mut session: DraftSession = create_test_session();

    let response: PlanResponse = session
        .link_order(
            Some(OrderId::new(1)),
            &create_test_order_book(),
            create_test_cause(),
        )
        .unwrap();

    assert_eq!(response.phase, DraftPhase::Linked);
    assert_eq!(response.linked_order, Some(OrderId::new(1)));
    assert_eq!(response.segments.len(), 1);
    assert_eq!(response.segments[0].origin(), "Rotterdam");
    assert_eq!(response.segments[0].destination(), "Milan");
    assert_eq!(response.message, "Linked order ORD-0001 (road)");
    assert_eq!(session.audit_log().len(), 1);
}

#[test]
fn test_unknown_order_clears_link() {
    let mut session: DraftSession = create_multimodal_session();

    let response: PlanResponse = session
        .link_order(
            Some(OrderId::new(999)),
            &create_test_order_book(),
            create_test_cause(),
        )
        .unwrap();

    assert_eq!(response.linked_order, None);
    assert!(response.segments.is_empty());
    assert_eq!(response.phase, DraftPhase::Editing);
}

#[test]
fn test_order_lookup_failure_passes_through() {
    let mut session: DraftSession = create_test_session();
    let mut orders: InMemoryOrderBook = create_test_order_book();
    orders.set_outage(Some(String::from("connection refused")));

    let result: Result<PlanResponse, ApiError> =
        session.link_order(Some(OrderId::new(1)), &orders, create_test_cause());

    assert_eq!(
        result,
        Err(ApiError::Boundary(BoundaryError::Unavailable {
            service: String::from("order book"),
            message: String::from("connection refused"),
        }))
    );
    assert_eq!(session.state().phase, DraftPhase::Empty);
    assert!(session.audit_log().is_empty());
}

// ============================================================================
// Segment editing
// ============================================================================

#[test]
fn test_add_segment_defaults_mode_from_plan_end() {
    let mut session: DraftSession = create_multimodal_session();

    let response: PlanResponse = session
        .add_segment(create_segment_request("Milan", "Turin"), create_test_cause())
        .unwrap();

    assert_eq!(response.segments.len(), 3);
    assert_eq!(response.segments[2].sequence, 3);
    assert_eq!(response.segments[2].transport_mode(), SegmentMode::Rail);
}

#[test]
fn test_add_segment_reports_every_missing_field() {
    let mut session: DraftSession = create_multimodal_session();
    let request: SegmentRequest = SegmentRequest {
        origin: String::from("Milan"),
        destination: String::from("  "),
        ..SegmentRequest::default()
    };

    let result: Result<PlanResponse, ApiError> = session.add_segment(request, create_test_cause());

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. })
            if field == "destination,carrier_name,planned_departure,planned_arrival"
    ));
    assert_eq!(session.state().segments.len(), 2);
    assert_eq!(session.audit_log().len(), 3);
}

#[test]
fn test_add_multimodal_mode_to_segment_is_invalid() {
    let mut session: DraftSession = create_multimodal_session();
    let request: SegmentRequest = SegmentRequest {
        transport_mode: Some(String::from("multimodal")),
        ..create_segment_request("Milan", "Turin")
    };

    let result: Result<PlanResponse, ApiError> = session.add_segment(request, create_test_cause());

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "transport_mode"
    ));
}

#[test]
fn test_update_segment_keeps_mode_when_not_given() {
    let mut session: DraftSession = create_multimodal_session();
    let key: SegmentKey = session.state().segments[0].key;
    let request: SegmentRequest = SegmentRequest {
        carrier_name: String::from("North Sea Lines"),
        ..create_segment_request("Rotterdam", "Genoa")
    };

    let response: PlanResponse = session
        .update_segment(key, request, create_test_cause())
        .unwrap();

    assert_eq!(response.segments[0].transport_mode(), SegmentMode::Sea);
    assert_eq!(response.segments[0].details.carrier_name, "North Sea Lines");
}

#[test]
fn test_update_unknown_segment_is_not_found() {
    let mut session: DraftSession = create_multimodal_session();

    let result: Result<PlanResponse, ApiError> = session.update_segment(
        SegmentKey::Draft(77),
        create_segment_request("A", "B"),
        create_test_cause(),
    );

    assert!(matches!(
        result,
        Err(ApiError::ResourceNotFound { ref resource_type, .. }) if resource_type == "Segment"
    ));
}

#[test]
fn test_remove_segment_renumbers() {
    let mut session: DraftSession = create_multimodal_session();
    let first: SegmentKey = session.state().segments[0].key;

    let response: PlanResponse = session
        .remove_segment(first, create_test_cause())
        .unwrap();

    assert_eq!(response.segments.len(), 1);
    assert_eq!(response.segments[0].sequence, 1);
    assert_eq!(response.segments[0].origin(), "Genoa");
}

#[test]
fn test_collapsing_requires_confirmation() {
    let mut session: DraftSession = create_multimodal_session();

    let result: Result<PlanResponse, ApiError> =
        session.set_transport_mode("road", false, create_test_cause());
    assert!(matches!(
        result,
        Err(ApiError::DomainRuleViolation { ref rule, .. })
            if rule == "truncation_requires_confirmation"
    ));
    assert_eq!(session.state().segments.len(), 2);

    let response: PlanResponse = session
        .set_transport_mode("road", true, create_test_cause())
        .unwrap();
    assert_eq!(response.segments.len(), 1);
    assert_eq!(response.segments[0].details.carrier_name, "Alpine Haulage");
    assert_eq!(response.segments[0].transport_mode(), SegmentMode::Road);
}

#[test]
fn test_unknown_transport_mode_is_invalid_input() {
    let mut session: DraftSession = create_test_session();

    let result: Result<PlanResponse, ApiError> =
        session.set_transport_mode("hovercraft", false, create_test_cause());

    assert_eq!(
        result,
        Err(ApiError::InvalidInput {
            field: String::from("transport_mode"),
            message: String::from("Invalid transport mode: hovercraft"),
        })
    );
}

#[test]
fn test_negative_cargo_edit_is_invalid_input() {
    let mut session: DraftSession = create_multimodal_session();
    let before: CargoTotals = session.state().shipment.cargo;
    let request: ShipmentEditRequest = ShipmentEditRequest {
        cargo: Some(CargoTotals::new(Some(-5.0), None, Some(2))),
        ..ShipmentEditRequest::default()
    };

    let result: Result<PlanResponse, ApiError> =
        session.edit_shipment(&request, create_test_cause());

    assert_eq!(
        result,
        Err(ApiError::InvalidInput {
            field: String::from("cargo.weight_kg"),
            message: String::from("Cargo weight_kg must be a non-negative number"),
        })
    );
    assert_eq!(session.state().shipment.cargo, before);
}

// ============================================================================
// Submission
// ============================================================================

#[test]
fn test_submit_without_carrier_is_rule_violation() {
    let mut session: DraftSession = create_multimodal_session();
    let mut sink: RecordingSink = RecordingSink::new();

    let result: Result<SubmitResponse, ApiError> = session.submit(&mut sink, create_test_cause());

    assert!(matches!(
        result,
        Err(ApiError::DomainRuleViolation { ref rule, .. }) if rule == "shipment_carrier_required"
    ));
    assert!(sink.accepted().is_empty());
}

#[test]
fn test_submit_hands_payload_to_sink() {
    let mut session: DraftSession = create_multimodal_session();
    session
        .edit_shipment(&assign_carrier(12), create_test_cause())
        .unwrap();
    let mut sink: RecordingSink = RecordingSink::new();

    let response: SubmitResponse = session.submit(&mut sink, create_test_cause()).unwrap();

    assert_eq!(response.receipt.shipment_id, 1);
    assert_eq!(response.receipt.segment_ids, vec![2, 3]);
    assert_eq!(response.payload.shipment.carrier_id, Some(CarrierId::new(12)));
    assert_eq!(response.payload.segments.len(), 2);
    assert_eq!(sink.accepted().len(), 1);
    assert_eq!(session.state().phase, DraftPhase::Submitted);
    assert_eq!(
        session.audit_log().last().map(|event| event.action.name.as_str()),
        Some("Submit")
    );
}

#[test]
fn test_sink_failure_leaves_draft_editable() {
    let mut session: DraftSession = create_multimodal_session();
    session
        .edit_shipment(&assign_carrier(12), create_test_cause())
        .unwrap();
    let events_before: usize = session.audit_log().len();
    let mut sink: RecordingSink = RecordingSink::new();
    sink.set_rejection(Some(String::from("duplicate reference")));

    let result: Result<SubmitResponse, ApiError> = session.submit(&mut sink, create_test_cause());

    assert_eq!(
        result,
        Err(ApiError::Boundary(BoundaryError::Rejected {
            service: String::from("shipment store"),
            reason: String::from("duplicate reference"),
        }))
    );
    assert_eq!(session.state().phase, DraftPhase::Editing);
    assert_eq!(session.audit_log().len(), events_before);

    sink.set_rejection(None);
    let response: SubmitResponse = session.submit(&mut sink, create_test_cause()).unwrap();
    assert_eq!(response.payload.segments.len(), 2);
}

#[test]
fn test_submitted_session_rejects_edits() {
    let mut session: DraftSession = create_test_session();
    session
        .link_order(
            Some(OrderId::new(1)),
            &create_test_order_book(),
            create_test_cause(),
        )
        .unwrap();
    session
        .edit_shipment(&assign_carrier(3), create_test_cause())
        .unwrap();
    session
        .submit(&mut RecordingSink::new(), create_test_cause())
        .unwrap();

    let result: Result<PlanResponse, ApiError> =
        session.set_transport_mode("air", false, create_test_cause());

    assert!(matches!(result, Err(ApiError::Conflict { .. })));
}

#[test]
fn test_continuity_policy_blocks_gapped_plan() {
    let mut shipment: Shipment = Shipment::new(TransportMode::Multimodal);
    shipment.origin_address = String::from("Rotterdam");
    shipment.destination_address = String::from("Milan");
    shipment.carrier_id = Some(CarrierId::new(4));
    let mut session: DraftSession = DraftSession::resume(
        shipment,
        Vec::new(),
        PlanPolicy::new(true),
        create_test_actor(),
    );
    session
        .add_segment(
            create_segment_request("Rotterdam", "Basel"),
            create_test_cause(),
        )
        .unwrap();
    session
        .add_segment(create_segment_request("Zurich", "Milan"), create_test_cause())
        .unwrap();

    let result: Result<(), ApiError> = session.validate();

    assert!(matches!(
        result,
        Err(ApiError::DomainRuleViolation { ref rule, .. }) if rule == "segment_continuity"
    ));
    assert_eq!(session.suggest_next_segment().origin, "Milan");
}
