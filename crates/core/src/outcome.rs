//! Operation result envelope.
//!
//! Every command and query resolves to an [`OperationOutcome`]: a payload
//! plus a [`ResultType`] classifying what happened. Expected business
//! outcomes (not found, invalid input, denied access) travel here rather
//! than as transport errors, so callers branch on one closed enumeration.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::validation::rules::FieldViolation;

/// Outcome classification for any operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultType {
    Ok,
    Created,
    /// The operation succeeded but returned a truncated view; more
    /// matching records exist beyond the returned page.
    PartialOk,
    Invalid,
    NotFound,
    Unauthorized,
    PermissionDenied,
    Unexpected,
}

/// A payload paired with its outcome classification.
///
/// Validation failures carry the offending fields in `errors`; successful
/// outcomes carry `data`. Constructors exist per outcome kind so call
/// sites never assemble the struct by hand.
#[derive(Debug, Clone, Serialize)]
pub struct OperationOutcome<T> {
    pub result: ResultType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldViolation>,
}

impl<T> OperationOutcome<T> {
    fn empty(result: ResultType) -> Self {
        Self {
            result,
            data: None,
            errors: Vec::new(),
        }
    }

    fn with_data(result: ResultType, data: T) -> Self {
        Self {
            result,
            data: Some(data),
            errors: Vec::new(),
        }
    }

    pub fn ok(data: T) -> Self {
        Self::with_data(ResultType::Ok, data)
    }

    /// Success with nothing to return (deletes).
    pub fn ok_empty() -> Self {
        Self::empty(ResultType::Ok)
    }

    pub fn created(data: T) -> Self {
        Self::with_data(ResultType::Created, data)
    }

    pub fn partial(data: T) -> Self {
        Self::with_data(ResultType::PartialOk, data)
    }

    pub fn invalid(errors: Vec<FieldViolation>) -> Self {
        Self {
            result: ResultType::Invalid,
            data: None,
            errors,
        }
    }

    pub fn not_found() -> Self {
        Self::empty(ResultType::NotFound)
    }

    pub fn unauthorized() -> Self {
        Self::empty(ResultType::Unauthorized)
    }

    pub fn permission_denied() -> Self {
        Self::empty(ResultType::PermissionDenied)
    }

    pub fn unexpected() -> Self {
        Self::empty(ResultType::Unexpected)
    }

    pub fn is_success(&self) -> bool {
        matches!(
            self.result,
            ResultType::Ok | ResultType::Created | ResultType::PartialOk
        )
    }
}

impl<T> From<CoreError> for OperationOutcome<T> {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotFound { .. } => Self::not_found(),
            CoreError::Validation(message) => Self::invalid(vec![FieldViolation {
                field: "request".to_string(),
                rule_type: "invalid".to_string(),
                message,
                value: None,
            }]),
            CoreError::Conflict { field, message } => Self::invalid(vec![FieldViolation {
                field: field.to_string(),
                rule_type: "unique".to_string(),
                message,
                value: None,
            }]),
            CoreError::Unauthorized(_) => Self::unauthorized(),
            CoreError::Forbidden(_) => Self::permission_denied(),
            CoreError::Internal(_) => Self::unexpected(),
        }
    }
}
