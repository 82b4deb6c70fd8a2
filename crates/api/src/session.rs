// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::boundary::{OrderLookup, ShipmentSink, SubmissionReceipt};
use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    PlanResponse, SegmentRequest, ShipmentEditRequest, SubmitResponse,
};
use tms_plan::{
    Command, DraftState, PlanPolicy, ShipmentEdit, SubmissionPayload, TransitionResult, apply,
    suggest_next_segment, validate_draft,
};
use tms_plan_audit::{Actor, AuditEvent, Cause};
use tms_plan_domain::{
    OrderId, OrderRecord, Segment, SegmentCandidate, SegmentKey, SegmentMode, Shipment,
    TransportMode,
};
use tracing::{info, warn};

/// One operator's editing session over a single shipment draft.
///
/// The session owns the draft exclusively. Every accepted command replaces
/// the draft and appends one audit event; a rejected command changes
/// nothing.
#[derive(Debug, Clone)]
pub struct DraftSession {
    state: DraftState,
    policy: PlanPolicy,
    actor: Actor,
    audit_log: Vec<AuditEvent>,
}

impl DraftSession {
    /// Starts a session on a new, empty draft.
    #[must_use]
    pub fn new(transport_mode: TransportMode, policy: PlanPolicy, actor: Actor) -> Self {
        Self {
            state: DraftState::new(transport_mode),
            policy,
            actor,
            audit_log: Vec::new(),
        }
    }

    /// Starts a session on a previously saved shipment.
    #[must_use]
    pub fn resume(
        shipment: Shipment,
        segments: Vec<Segment>,
        policy: PlanPolicy,
        actor: Actor,
    ) -> Self {
        Self {
            state: DraftState::from_saved(shipment, segments),
            policy,
            actor,
            audit_log: Vec::new(),
        }
    }

    /// Returns the current draft.
    #[must_use]
    pub const fn state(&self) -> &DraftState {
        &self.state
    }

    /// Returns the audit events recorded so far, oldest first.
    #[must_use]
    pub fn audit_log(&self) -> &[AuditEvent] {
        &self.audit_log
    }

    /// Returns the submission policy in force.
    #[must_use]
    pub const fn policy(&self) -> &PlanPolicy {
        &self.policy
    }

    /// Links the draft to an order, or clears the link.
    ///
    /// An order the lookup does not know is treated like `None`: the link is
    /// cleared and the plan emptied.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup fails or the draft was already submitted.
    pub fn link_order(
        &mut self,
        order_id: Option<OrderId>,
        lookup: &dyn OrderLookup,
        cause: Cause,
    ) -> Result<PlanResponse, ApiError> {
        let order: Option<OrderRecord> = match order_id {
            Some(id) => {
                let found: Option<OrderRecord> = lookup.find_order(&id)?;
                if found.is_none() {
                    warn!(order_id = %id, "Order not found, clearing link");
                }
                found
            }
            None => None,
        };
        self.execute(Command::LinkOrder { order }, cause)
    }

    /// Changes the shipment's transport mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the mode is unknown, or if several segments would
    /// be collapsed and `confirm_truncation` is not set.
    pub fn set_transport_mode(
        &mut self,
        mode: &str,
        confirm_truncation: bool,
        cause: Cause,
    ) -> Result<PlanResponse, ApiError> {
        let mode: TransportMode = mode.trim().parse().map_err(translate_domain_error)?;
        self.execute(
            Command::SetTransportMode {
                mode,
                confirm_truncation,
            },
            cause,
        )
    }

    /// Appends a segment to the plan.
    ///
    /// Without an explicit mode the segment takes the mode the plan
    /// currently ends with.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be parsed, a required field is
    /// missing, or the plan cannot take another segment.
    pub fn add_segment(
        &mut self,
        request: SegmentRequest,
        cause: Cause,
    ) -> Result<PlanResponse, ApiError> {
        let default_mode: SegmentMode = suggest_next_segment(&self.state).transport_mode;
        let candidate: SegmentCandidate = request.to_candidate(default_mode)?;
        self.execute(Command::AddSegment { candidate }, cause)
    }

    /// Replaces the fields of an existing segment.
    ///
    /// Without an explicit mode the segment keeps its current one.
    ///
    /// # Errors
    ///
    /// Returns an error if the segment does not exist, the request cannot be
    /// parsed, or a required field is missing.
    pub fn update_segment(
        &mut self,
        key: SegmentKey,
        request: SegmentRequest,
        cause: Cause,
    ) -> Result<PlanResponse, ApiError> {
        let default_mode: SegmentMode = self
            .state
            .segment(key)
            .map(Segment::transport_mode)
            .unwrap_or_default();
        let candidate: SegmentCandidate = request.to_candidate(default_mode)?;
        self.execute(Command::UpdateSegment { key, candidate }, cause)
    }

    /// Removes a segment. Removing an unknown segment changes nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the draft was already submitted.
    pub fn remove_segment(
        &mut self,
        key: SegmentKey,
        cause: Cause,
    ) -> Result<PlanResponse, ApiError> {
        self.execute(Command::RemoveSegment { key }, cause)
    }

    /// Edits shipment-level fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be parsed or the draft was
    /// already submitted.
    pub fn edit_shipment(
        &mut self,
        request: &ShipmentEditRequest,
        cause: Cause,
    ) -> Result<PlanResponse, ApiError> {
        let edit: ShipmentEdit = request.to_edit()?;
        self.execute(Command::EditShipment { edit }, cause)
    }

    /// Suggests the next segment to offer, chained from the end of the plan.
    #[must_use]
    pub fn suggest_next_segment(&self) -> SegmentCandidate {
        suggest_next_segment(&self.state)
    }

    /// Checks the draft against the submission rules without submitting.
    ///
    /// # Errors
    ///
    /// Returns the first rule the draft violates.
    pub fn validate(&self) -> Result<(), ApiError> {
        validate_draft(&self.policy, &self.state).map_err(translate_domain_error)
    }

    /// Validates the draft and hands it to the sink.
    ///
    /// The draft is marked submitted only once the sink accepts it. If the
    /// sink fails, its error is returned as `ApiError::Boundary` and the
    /// draft stays editable.
    ///
    /// # Errors
    ///
    /// Returns an error if the draft fails validation, was already submitted,
    /// or the sink rejects it.
    pub fn submit(
        &mut self,
        sink: &mut dyn ShipmentSink,
        cause: Cause,
    ) -> Result<SubmitResponse, ApiError> {
        let result: TransitionResult = apply(
            &self.policy,
            &self.state,
            Command::Submit,
            self.actor.clone(),
            cause,
        )
        .map_err(translate_core_error)?;

        let payload: SubmissionPayload =
            result.submission.ok_or_else(|| ApiError::Conflict {
                message: String::from("Submission produced no payload"),
            })?;

        let receipt: SubmissionReceipt = sink.submit(&payload).map_err(|err| {
            warn!(%err, "Shipment sink refused the draft");
            ApiError::Boundary(err)
        })?;

        info!(
            shipment_id = receipt.shipment_id,
            segments = receipt.segment_ids.len(),
            "Shipment stored"
        );

        self.state = result.new_state;
        self.audit_log.push(result.audit_event);

        Ok(SubmitResponse {
            message: format!("Stored shipment {}", receipt.shipment_id),
            receipt,
            payload,
        })
    }

    fn execute(&mut self, command: Command, cause: Cause) -> Result<PlanResponse, ApiError> {
        let result: TransitionResult = apply(
            &self.policy,
            &self.state,
            command,
            self.actor.clone(),
            cause,
        )
        .map_err(translate_core_error)?;

        let message: String = result
            .audit_event
            .action
            .details
            .clone()
            .unwrap_or_default();
        self.state = result.new_state;
        self.audit_log.push(result.audit_event);

        Ok(PlanResponse::from_state(&self.state, message))
    }
}
