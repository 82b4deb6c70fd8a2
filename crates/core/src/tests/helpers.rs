// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, CoreError, DraftState, PlanPolicy, TransitionResult, apply};
use time::macros::date;
use tms_plan_audit::{Actor, Cause};
use tms_plan_domain::{
    CargoTotals, Incoterm, OrderId, OrderRecord, Segment, SegmentCandidate, SegmentKey,
    SegmentMode, ShipmentType, TransportMode,
};

pub fn create_test_actor() -> Actor {
    Actor::operator("op-123")
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("evt-456"), String::from("Form event"))
}

pub fn create_test_order(mode: TransportMode) -> OrderRecord {
    OrderRecord {
        id: OrderId::new(77),
        order_number: String::from("ORD-2026-0077"),
        origin_address: String::from("Paris"),
        destination_address: String::from("Madrid"),
        shipment_type: ShipmentType::International,
        transport_mode: mode,
        incoterm: Some(Incoterm::Fca),
        cargo: CargoTotals::new(Some(1250.5), Some(8.2), Some(14)),
    }
}

pub fn create_test_candidate(origin: &str, destination: &str) -> SegmentCandidate {
    SegmentCandidate::new(origin, destination, SegmentMode::Road, "TransEuropa")
        .with_schedule(date!(2026 - 03 - 01), date!(2026 - 03 - 02))
}

pub fn run(state: &DraftState, command: Command) -> Result<TransitionResult, CoreError> {
    apply(
        &PlanPolicy::default(),
        state,
        command,
        create_test_actor(),
        create_test_cause(),
    )
}

pub fn run_ok(state: &DraftState, command: Command) -> DraftState {
    run(state, command).unwrap().new_state
}

/// A multimodal draft with one leg per `(origin, destination)` pair.
pub fn create_multimodal_state(legs: &[(&str, &str)]) -> DraftState {
    let mut state: DraftState = run_ok(
        &DraftState::new(TransportMode::Road),
        Command::SetTransportMode {
            mode: TransportMode::Multimodal,
            confirm_truncation: false,
        },
    );
    for (origin, destination) in legs {
        state = run_ok(
            &state,
            Command::AddSegment {
                candidate: create_test_candidate(origin, destination),
            },
        );
    }
    state
}

pub fn sequences(segments: &[Segment]) -> Vec<u32> {
    segments.iter().map(|segment| segment.sequence).collect()
}

pub fn keys(segments: &[Segment]) -> Vec<SegmentKey> {
    segments.iter().map(|segment| segment.key).collect()
}
