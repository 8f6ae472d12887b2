// src/area/mod.rs
// =============================================================================
// The area task: compute the area of a circle from its radius.
//
// Contract:
// - Input: AreaArgs { radius, check_mode }
// - Output: AreaReport { changed, area } or TaskError::InvalidArgument
//
// Rules:
// - check mode returns the seeded default (changed=false, area=0) without
//   computing anything
// - radius must be >= 0; a negative (or NaN) radius fails with a
//   human-readable message and no result
// - on success: area = PI * radius^2, changed=true, no side effects
// =============================================================================

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::task::{TaskError, TaskResult};

// Options for the area task
#[derive(Debug, Clone)]
pub struct AreaArgs {
    /// Radius of the circle, must be >= 0
    pub radius: f64,
    /// When true, skip the computation and return the default report
    pub check_mode: bool,
}

// Result envelope for the area task
//
// Serializes as {"changed": bool, "area": f64}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaReport {
    pub changed: bool,
    pub area: f64,
}

// The seeded default: what a check-mode run hands back untouched
impl Default for AreaReport {
    fn default() -> Self {
        AreaReport {
            changed: false,
            area: 0.0,
        }
    }
}

// Runs the area task.
//
// This is synchronous on purpose: there is no I/O here, just one
// floating-point multiply-and-multiply.
pub fn run_area(args: &AreaArgs) -> TaskResult<AreaReport> {
    // Seed the default report first, like every task does.
    // In check mode we return it as-is, with no computation performed.
    let report = AreaReport::default();
    if args.check_mode {
        return Ok(report);
    }

    let radius = args.radius;

    // Argument pre-check. Written as !(radius >= 0.0) rather than
    // radius < 0.0 so a NaN radius is rejected too (NaN fails every
    // comparison, so it would otherwise sail through).
    if !(radius >= 0.0) {
        return Err(TaskError::InvalidArgument(
            "radius cannot be less than 0".to_string(),
        ));
    }

    Ok(AreaReport {
        changed: true,
        area: PI * radius * radius,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_of_zero_radius_is_zero() {
        let report = run_area(&AreaArgs {
            radius: 0.0,
            check_mode: false,
        })
        .unwrap();
        assert_eq!(report.area, 0.0);
        assert!(report.changed);
    }

    #[test]
    fn test_area_matches_pi_r_squared() {
        let report = run_area(&AreaArgs {
            radius: 2.5,
            check_mode: false,
        })
        .unwrap();
        assert!((report.area - PI * 2.5 * 2.5).abs() < 1e-12);
        assert!(report.changed);
    }

    #[test]
    fn test_negative_radius_is_rejected() {
        let err = run_area(&AreaArgs {
            radius: -1.0,
            check_mode: false,
        })
        .unwrap_err();
        assert!(matches!(err, TaskError::InvalidArgument(_)));
        assert_eq!(err.to_string(), "radius cannot be less than 0");
    }

    #[test]
    fn test_nan_radius_is_rejected() {
        let result = run_area(&AreaArgs {
            radius: f64::NAN,
            check_mode: false,
        });
        assert!(matches!(result, Err(TaskError::InvalidArgument(_))));
    }

    #[test]
    fn test_check_mode_skips_computation() {
        // Even with a radius that would normally fail validation,
        // check mode short-circuits before the pre-check runs.
        let report = run_area(&AreaArgs {
            radius: -5.0,
            check_mode: true,
        })
        .unwrap();
        assert!(!report.changed);
        assert_eq!(report.area, 0.0);
    }

    #[test]
    fn test_report_json_shape() {
        let report = run_area(&AreaArgs {
            radius: 1.0,
            check_mode: false,
        })
        .unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json, serde_json::json!({"changed": true, "area": PI}));
    }
}
