// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the session boundary.

use thiserror::Error;
use tms_plan::CoreError;
use tms_plan_domain::{DomainError, SegmentField};

/// Failures reported by an order source or shipment sink.
///
/// These are passed through to the caller unchanged.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoundaryError {
    /// The collaborator could not be reached.
    #[error("{service} is unavailable: {message}")]
    Unavailable { service: String, message: String },

    /// The collaborator refused the request.
    #[error("{service} rejected the request: {reason}")]
    Rejected { service: String, reason: String },
}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the session contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The draft is not in a state that allows the request.
    Conflict {
        /// A human-readable description of the conflict.
        message: String,
    },
    /// An order source or shipment sink failed.
    Boundary(BoundaryError),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Conflict { message } => write!(f, "Conflict: {message}"),
            Self::Boundary(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Boundary(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BoundaryError> for ApiError {
    fn from(err: BoundaryError) -> Self {
        Self::Boundary(err)
    }
}

/// Translates a domain error into an API error.
///
/// Parse failures and incomplete segments are input errors; everything a
/// complete draft can still get wrong is a rule violation.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let rule: &'static str = err.rule();
    let message: String = err.to_string();
    match err {
        DomainError::MissingRequiredField { fields } => {
            let names: Vec<&str> = fields.iter().map(SegmentField::as_str).collect();
            ApiError::InvalidInput {
                field: names.join(","),
                message,
            }
        }
        DomainError::SegmentNotFound(_) => ApiError::ResourceNotFound {
            resource_type: String::from("Segment"),
            message,
        },
        DomainError::InvalidTransportMode(_) => ApiError::InvalidInput {
            field: String::from("transport_mode"),
            message,
        },
        DomainError::InvalidShipmentType(_) => ApiError::InvalidInput {
            field: String::from("shipment_type"),
            message,
        },
        DomainError::InvalidIncoterm(_) => ApiError::InvalidInput {
            field: String::from("incoterm"),
            message,
        },
        DomainError::InvalidTransferType(_) => ApiError::InvalidInput {
            field: String::from("transfer_type"),
            message,
        },
        DomainError::InvalidDraftPhase(_) => ApiError::InvalidInput {
            field: String::from("phase"),
            message,
        },
        DomainError::InvalidCargo { field } => ApiError::InvalidInput {
            field: format!("cargo.{field}"),
            message,
        },
        DomainError::MissingCarrier
        | DomainError::MissingAddress { .. }
        | DomainError::MultimodalRequiresSegments
        | DomainError::PickupAfterDelivery { .. }
        | DomainError::DepartureAfterArrival { .. }
        | DomainError::NonContiguousSequence { .. }
        | DomainError::SegmentDiscontinuity { .. } => ApiError::DomainRuleViolation {
            rule: String::from(rule),
            message,
        },
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::DraftSubmitted | CoreError::InvalidPhaseTransition { .. } => {
            ApiError::Conflict {
                message: err.to_string(),
            }
        }
        CoreError::TruncationRequiresConfirmation { .. } => ApiError::DomainRuleViolation {
            rule: String::from("truncation_requires_confirmation"),
            message: err.to_string(),
        },
        CoreError::SingleLegPlan { .. } => ApiError::DomainRuleViolation {
            rule: String::from("single_leg_plan"),
            message: err.to_string(),
        },
    }
}
