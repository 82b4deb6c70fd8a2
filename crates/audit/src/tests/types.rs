// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Action, Actor, AuditEvent, Cause, PlanSnapshot};
use tms_plan_domain::{DraftPhase, OrderId, TransportMode};

fn create_snapshot(segment_count: usize) -> PlanSnapshot {
    PlanSnapshot::new(
        DraftPhase::Editing,
        TransportMode::Multimodal,
        segment_count,
        Some(OrderId::new(42)),
    )
}

#[test]
fn test_actor_constructors() {
    let operator: Actor = Actor::operator("op-7");
    assert_eq!(operator.id, "op-7");
    assert_eq!(operator.actor_type, "operator");

    let system: Actor = Actor::system();
    assert_eq!(system.actor_type, "system");
}

#[test]
fn test_cause_keeps_id_and_description() {
    let cause: Cause = Cause::new(String::from("evt-9"), String::from("Segment removed"));

    assert_eq!(cause.id, "evt-9");
    assert_eq!(cause.description, "Segment removed");
}

#[test]
fn test_snapshot_display() {
    assert_eq!(
        create_snapshot(2).to_string(),
        "phase=editing,mode=multimodal,segments=2,order=42"
    );

    let unlinked: PlanSnapshot = PlanSnapshot::new(DraftPhase::Empty, TransportMode::Road, 0, None);
    assert_eq!(unlinked.to_string(), "phase=empty,mode=road,segments=0");
}

#[test]
fn test_audit_event_detects_plan_change() {
    let event: AuditEvent = AuditEvent::new(
        Actor::operator("op-7"),
        Cause::new(String::from("evt-1"), String::from("Add segment clicked")),
        Action::new(String::from("AddSegment"), None),
        create_snapshot(1),
        create_snapshot(2),
    );
    assert!(event.changed_plan());

    let unchanged: AuditEvent = AuditEvent::new(
        Actor::system(),
        Cause::new(String::from("evt-2"), String::from("No-op removal")),
        Action::new(String::from("RemoveSegment"), None),
        create_snapshot(2),
        create_snapshot(2),
    );
    assert!(!unchanged.changed_plan());
}

#[test]
fn test_audit_event_serializes_to_json() {
    let event: AuditEvent = AuditEvent::new(
        Actor::operator("op-7"),
        Cause::new(String::from("evt-1"), String::from("Order linked")),
        Action::new(String::from("LinkOrder"), Some(String::from("order 42"))),
        PlanSnapshot::new(DraftPhase::Empty, TransportMode::Road, 0, None),
        create_snapshot(0),
    );

    let json: serde_json::Value = serde_json::to_value(&event).unwrap();

    assert_eq!(json["action"]["name"], "LinkOrder");
    assert_eq!(json["before"]["phase"], "empty");
    assert_eq!(json["after"]["transport_mode"], "multimodal");
    assert_eq!(json["after"]["linked_order"], 42);
}
