// src/task.rs
// =============================================================================
// Shared contract for all tasks in this crate.
//
// Every task is a plain function: typed options in, typed result envelope
// out. This file defines the pieces common to all of them:
// - TaskError: the two ways a task can fail (bad argument, HTTP failure)
// - FailureEnvelope: the {msg, ...partial report} shape reported to
//   callers on failure
//
// Conventions carried by every result envelope:
// - 'changed' is true only after the task really ran
// - check mode returns the seeded default envelope with changed=false
// =============================================================================

use serde::Serialize;
use thiserror::Error;

// The error type returned by every task function.
//
// Two kinds only:
// - InvalidArgument: the caller passed something unusable (negative radius,
//   empty site list, malformed URL). The message is human-readable and is
//   what ends up in the failure envelope.
// - Http: a request failed at the transport level (DNS failure, connection
//   refused, timeout). Only the sites task produces this, and only under
//   the strict error policy.
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
}

// Shorthand so task functions can write TaskResult<AreaReport> etc.
pub type TaskResult<T> = Result<T, TaskError>;

// The envelope reported to callers when a task fails.
//
// Serializes as {"msg": "...", ...} - the human-readable message plus the
// partially-built report the task had seeded before it failed, flattened
// alongside. A failed area run still shows {changed: false, area: 0}, a
// failed sites run still shows {changed: false, status: []}, so the
// envelope keeps its shape no matter how the task ended.
#[derive(Debug, Clone, Serialize)]
pub struct FailureEnvelope<T> {
    pub msg: String,
    /// The seeded report the task was building when it failed
    #[serde(flatten)]
    pub partial: T,
}

impl<T> FailureEnvelope<T> {
    pub fn from_error(err: &TaskError, partial: T) -> Self {
        FailureEnvelope {
            msg: err.to_string(),
            partial,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message_passes_through() {
        let err = TaskError::InvalidArgument("radius cannot be less than 0".to_string());
        assert_eq!(err.to_string(), "radius cannot be less than 0");
    }

    #[test]
    fn test_area_failure_envelope_carries_partial_report() {
        let err = TaskError::InvalidArgument("radius cannot be less than 0".to_string());
        let envelope = FailureEnvelope::from_error(&err, crate::area::AreaReport::default());
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "msg": "radius cannot be less than 0",
                "changed": false,
                "area": 0.0
            })
        );
    }

    #[test]
    fn test_sites_failure_envelope_carries_partial_report() {
        let err = TaskError::InvalidArgument("please pass at least 1 site".to_string());
        let envelope = FailureEnvelope::from_error(&err, crate::sites::SitesReport::default());
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "msg": "please pass at least 1 site",
                "changed": false,
                "status": []
            })
        );
    }
}
