// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Scripted editing sessions.

use color_eyre::{
    Result,
    eyre::{WrapErr, eyre},
};
use serde::{Deserialize, Serialize};
use tms_plan_api::{
    DraftSession, InMemoryOrderBook, PlanResponse, RecordingSink, SegmentRequest,
    ShipmentEditRequest, SubmitResponse,
};
use tms_plan_audit::Cause;
use tms_plan_domain::{OrderId, SegmentKey};
use tracing::{debug, info};

/// One scripted user action.
///
/// Segments are addressed by their current sequence number.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum Step {
    LinkOrder {
        order_id: Option<i64>,
    },
    SetTransportMode {
        mode: String,
        #[serde(default)]
        confirm_truncation: bool,
    },
    AddSegment {
        segment: SegmentRequest,
    },
    UpdateSegment {
        sequence: u32,
        segment: SegmentRequest,
    },
    RemoveSegment {
        sequence: u32,
    },
    EditShipment {
        edit: ShipmentEditRequest,
    },
    Submit,
}

impl Step {
    const fn name(&self) -> &'static str {
        match self {
            Self::LinkOrder { .. } => "link_order",
            Self::SetTransportMode { .. } => "set_transport_mode",
            Self::AddSegment { .. } => "add_segment",
            Self::UpdateSegment { .. } => "update_segment",
            Self::RemoveSegment { .. } => "remove_segment",
            Self::EditShipment { .. } => "edit_shipment",
            Self::Submit => "submit",
        }
    }
}

/// What a replay ends with.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    /// The script submitted the draft and the sink accepted it.
    Submitted(SubmitResponse),
    /// The script ended with the draft still open.
    Draft(PlanResponse),
}

/// Runs every step in order, stopping at the first failure.
///
/// # Errors
///
/// Returns the first rejected step, annotated with its position and name.
pub fn replay(
    session: &mut DraftSession,
    steps: Vec<Step>,
    orders: &InMemoryOrderBook,
    sink: &mut RecordingSink,
) -> Result<Outcome> {
    let mut outcome: Option<Outcome> = None;

    for (index, step) in (1_usize..).zip(steps) {
        let name: &'static str = step.name();
        let cause: Cause = Cause::new(format!("step-{index}"), format!("Scripted {name}"));
        debug!(step = index, name, "Replaying step");

        let result: Result<Outcome> = run_step(session, step, orders, sink, cause);
        outcome = Some(result.wrap_err_with(|| format!("Step {index} ({name}) failed"))?);
    }

    match outcome {
        Some(outcome) => {
            info!(events = session.audit_log().len(), "Replay finished");
            Ok(outcome)
        }
        None => Err(eyre!("The script contains no steps")),
    }
}

fn run_step(
    session: &mut DraftSession,
    step: Step,
    orders: &InMemoryOrderBook,
    sink: &mut RecordingSink,
    cause: Cause,
) -> Result<Outcome> {
    let response: PlanResponse = match step {
        Step::LinkOrder { order_id } => {
            session.link_order(order_id.map(OrderId::new), orders, cause)?
        }
        Step::SetTransportMode {
            mode,
            confirm_truncation,
        } => session.set_transport_mode(&mode, confirm_truncation, cause)?,
        Step::AddSegment { segment } => session.add_segment(segment, cause)?,
        Step::UpdateSegment { sequence, segment } => {
            let key: SegmentKey = key_at(session, sequence)?;
            session.update_segment(key, segment, cause)?
        }
        Step::RemoveSegment { sequence } => {
            let key: SegmentKey = key_at(session, sequence)?;
            session.remove_segment(key, cause)?
        }
        Step::EditShipment { edit } => session.edit_shipment(&edit, cause)?,
        Step::Submit => return Ok(Outcome::Submitted(session.submit(sink, cause)?)),
    };

    info!(
        phase = %response.phase,
        segments = response.segments.len(),
        "{}",
        response.message
    );
    Ok(Outcome::Draft(response))
}

fn key_at(session: &DraftSession, sequence: u32) -> Result<SegmentKey> {
    session
        .state()
        .segments
        .iter()
        .find(|segment| segment.sequence == sequence)
        .map(|segment| segment.key)
        .ok_or_else(|| eyre!("No segment at sequence {sequence}"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tms_plan::PlanPolicy;
    use tms_plan_audit::Actor;
    use tms_plan_domain::{
        CargoTotals, DraftPhase, OrderRecord, ShipmentType, TransportMode,
    };

    fn create_test_session() -> DraftSession {
        DraftSession::new(
            TransportMode::Road,
            PlanPolicy::default(),
            Actor::operator("cli-test"),
        )
    }

    fn create_test_orders() -> InMemoryOrderBook {
        InMemoryOrderBook::from_records(vec![OrderRecord {
            id: OrderId::new(5),
            order_number: String::from("ORD-5"),
            origin_address: String::from("Hamburg"),
            destination_address: String::from("Vienna"),
            shipment_type: ShipmentType::International,
            transport_mode: TransportMode::Multimodal,
            incoterm: None,
            cargo: CargoTotals::default(),
        }])
    }

    fn parse_steps(json: &str) -> Vec<Step> {
        serde_json::from_str(json).unwrap()
    }

    const MULTIMODAL_SCRIPT: &str = r#"[
        {"step": "link_order", "order_id": 5},
        {"step": "add_segment", "segment": {
            "origin": "Hamburg", "destination": "Prague", "transport_mode": "rail",
            "carrier_name": "Elbe Rail", "planned_departure": "2026-06-01",
            "planned_arrival": "2026-06-02"}},
        {"step": "add_segment", "segment": {
            "origin": "Prague", "destination": "Vienna",
            "carrier_name": "Danube Trucking", "planned_departure": "2026-06-02",
            "planned_arrival": "2026-06-03"}},
        {"step": "edit_shipment", "edit": {"carrier_id": 8}}
    ]"#;

    #[test]
    fn test_steps_deserialize() {
        let steps: Vec<Step> = parse_steps(
            r#"[{"step": "set_transport_mode", "mode": "sea"}, {"step": "remove_segment", "sequence": 2}, {"step": "submit"}]"#,
        );

        assert_eq!(
            steps,
            vec![
                Step::SetTransportMode {
                    mode: String::from("sea"),
                    confirm_truncation: false,
                },
                Step::RemoveSegment { sequence: 2 },
                Step::Submit,
            ]
        );
    }

    #[test]
    fn test_replay_without_submit_returns_open_draft() {
        let mut session: DraftSession = create_test_session();
        let mut sink: RecordingSink = RecordingSink::new();

        let outcome: Outcome = replay(
            &mut session,
            parse_steps(MULTIMODAL_SCRIPT),
            &create_test_orders(),
            &mut sink,
        )
        .unwrap();

        let Outcome::Draft(plan) = outcome else {
            panic!("expected an open draft");
        };
        assert_eq!(plan.phase, DraftPhase::Editing);
        assert_eq!(plan.segments.len(), 2);
        assert_eq!(session.audit_log().len(), 4);
        assert!(sink.accepted().is_empty());
    }

    #[test]
    fn test_replay_with_submit_returns_receipt() {
        let mut session: DraftSession = create_test_session();
        let mut sink: RecordingSink = RecordingSink::new();
        let mut steps: Vec<Step> = parse_steps(MULTIMODAL_SCRIPT);
        steps.push(Step::Submit);

        let outcome: Outcome =
            replay(&mut session, steps, &create_test_orders(), &mut sink).unwrap();

        let Outcome::Submitted(response) = outcome else {
            panic!("expected a submission");
        };
        assert_eq!(response.payload.segments.len(), 2);
        assert_eq!(sink.accepted().len(), 1);
        let json: serde_json::Value = serde_json::to_value(&response).unwrap();
        assert_eq!(json["payload"]["segments"][1]["transport_mode"], "rail");
        assert_eq!(json["payload"]["segments"][0]["planned_departure"], "2026-06-01");
    }

    #[test]
    fn test_replay_reports_failing_step() {
        let mut session: DraftSession = create_test_session();
        let mut sink: RecordingSink = RecordingSink::new();
        let steps: Vec<Step> = parse_steps(
            r#"[{"step": "link_order", "order_id": 5}, {"step": "remove_segment", "sequence": 1}]"#,
        );

        let err = replay(&mut session, steps, &create_test_orders(), &mut sink).unwrap_err();

        assert_eq!(err.to_string(), "Step 2 (remove_segment) failed");
        assert_eq!(session.audit_log().len(), 1);
    }

    #[test]
    fn test_empty_script_is_an_error() {
        let mut session: DraftSession = create_test_session();

        let result: Result<Outcome> = replay(
            &mut session,
            Vec::new(),
            &create_test_orders(),
            &mut RecordingSink::new(),
        );

        assert!(result.is_err());
    }
}
