//! Task scoring.
//!
//! Points are a bounded priority score derived from two user-assigned
//! attributes: importance (how much the task matters) and complexity (how
//! much work it takes). High-importance, low-complexity tasks score highest.
//!
//! The derivation clamps its inputs and always succeeds; the strict
//! `validate_*` predicates guard the write path and reject instead.

use crate::error::ValidationError;

/// Minimum user-assignable importance.
pub const IMPORTANCE_MIN: i64 = 0;
/// Maximum user-assignable importance.
pub const IMPORTANCE_MAX: i64 = 50;
/// Minimum user-assignable complexity.
pub const COMPLEXITY_MIN: i64 = 1;
/// Maximum user-assignable complexity.
pub const COMPLEXITY_MAX: i64 = 9;
/// Upper bound of the derived score.
pub const POINTS_MAX: i64 = 500;

// The importance/complexity pairing every inbox task is born with. A task
// still carrying it has never been triaged.
const COLLECTED_IMPORTANCE: i64 = 0;
const COLLECTED_COMPLEXITY: i64 = 3;

/// Scoring fields stored on a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskValues {
    pub importance: i64,
    pub complexity: i64,
    pub points: i64,
}

/// Defaults for an explicitly created task: fully prioritized.
pub fn default_task_values() -> TaskValues {
    TaskValues {
        importance: IMPORTANCE_MAX,
        complexity: COMPLEXITY_MIN,
        points: POINTS_MAX,
    }
}

/// Derive the bounded priority score from importance and complexity.
///
/// Out-of-range inputs are clamped, not rejected: this is an internal
/// derivation and must always succeed. The raw score is
/// `10 * importance / complexity`, rounded half away from zero (operands are
/// non-negative, so plain round-half-up) and capped at [`POINTS_MAX`].
pub fn compute_points(importance: i64, complexity: i64) -> i64 {
    let importance = importance.clamp(IMPORTANCE_MIN, IMPORTANCE_MAX);
    let complexity = complexity.clamp(COMPLEXITY_MIN, COMPLEXITY_MAX);
    let raw = (10.0 * importance as f64 / complexity as f64).round() as i64;
    raw.clamp(0, POINTS_MAX)
}

/// Strict boundary predicate: true only for a finite integer in 0..=50.
pub fn validate_importance(value: f64) -> bool {
    value.is_finite()
        && value.fract() == 0.0
        && (IMPORTANCE_MIN as f64..=IMPORTANCE_MAX as f64).contains(&value)
}

/// Strict boundary predicate: true only for a finite integer in 1..=9.
pub fn validate_complexity(value: f64) -> bool {
    value.is_finite()
        && value.fract() == 0.0
        && (COMPLEXITY_MIN as f64..=COMPLEXITY_MAX as f64).contains(&value)
}

/// Validate write-path input and derive the scoring fields to store.
///
/// Rejects before anything is computed, so an invalid request never yields a
/// partial write.
pub fn validated_task_values(importance: f64, complexity: f64) -> Result<TaskValues, ValidationError> {
    if !validate_importance(importance) {
        return Err(ValidationError::OutOfRange {
            field: "importance",
            value: importance,
            min: IMPORTANCE_MIN,
            max: IMPORTANCE_MAX,
        });
    }
    if !validate_complexity(complexity) {
        return Err(ValidationError::OutOfRange {
            field: "complexity",
            value: complexity,
            min: COMPLEXITY_MIN,
            max: COMPLEXITY_MAX,
        });
    }

    let importance = importance as i64;
    let complexity = complexity as i64;
    Ok(TaskValues {
        importance,
        complexity,
        points: compute_points(importance, complexity),
    })
}

/// True for the untriaged-inbox sentinel pairing (importance 0, complexity 3).
pub fn is_collected_defaults(importance: i64, complexity: i64) -> bool {
    importance == COLLECTED_IMPORTANCE && complexity == COLLECTED_COMPLEXITY
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_score_values() {
        assert_eq!(compute_points(50, 1), 500);
        assert_eq!(compute_points(25, 5), 50);
        assert_eq!(compute_points(30, 3), 100);
        for complexity in COMPLEXITY_MIN..=COMPLEXITY_MAX {
            assert_eq!(compute_points(0, complexity), 0);
        }
    }

    #[test]
    fn test_rounding_is_half_up() {
        // 10 * 1 / 4 = 2.5 rounds up to 3
        assert_eq!(compute_points(1, 4), 3);
        // 10 * 3 / 4 = 7.5 rounds up to 8
        assert_eq!(compute_points(3, 4), 8);
        // 10 * 1 / 3 = 3.33.. rounds down to 3
        assert_eq!(compute_points(1, 3), 3);
    }

    #[test]
    fn test_out_of_range_inputs_are_clamped() {
        assert_eq!(compute_points(999, 1), 500);
        assert_eq!(compute_points(-10, 5), 0);
        // Complexity 0 clamps to 1 rather than dividing by zero
        assert_eq!(compute_points(50, 0), 500);
        assert_eq!(compute_points(50, 99), compute_points(50, 9));
    }

    #[test]
    fn test_default_task_values() {
        let defaults = default_task_values();
        assert_eq!(defaults.importance, 50);
        assert_eq!(defaults.complexity, 1);
        assert_eq!(defaults.points, 500);
        assert_eq!(
            compute_points(defaults.importance, defaults.complexity),
            defaults.points
        );
    }

    #[test]
    fn test_validators_accept_closed_integer_ranges() {
        assert!(validate_importance(0.0));
        assert!(validate_importance(50.0));
        assert!(validate_complexity(1.0));
        assert!(validate_complexity(9.0));
    }

    #[test]
    fn test_validators_reject_malformed_input() {
        assert!(!validate_importance(-1.0));
        assert!(!validate_importance(51.0));
        assert!(!validate_importance(12.5));
        assert!(!validate_importance(f64::NAN));
        assert!(!validate_importance(f64::INFINITY));
        assert!(!validate_importance(f64::NEG_INFINITY));

        assert!(!validate_complexity(0.0));
        assert!(!validate_complexity(10.0));
        assert!(!validate_complexity(2.5));
        assert!(!validate_complexity(f64::NAN));
    }

    #[test]
    fn test_validated_task_values_rejects_before_computing() {
        let err = validated_task_values(60.0, 3.0).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::OutOfRange { field: "importance", .. }
        ));

        let err = validated_task_values(10.0, 0.0).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::OutOfRange { field: "complexity", .. }
        ));

        let values = validated_task_values(30.0, 3.0).unwrap();
        assert_eq!(values.points, 100);
    }

    #[test]
    fn test_collected_sentinel_detection() {
        assert!(is_collected_defaults(0, 3));
        assert!(!is_collected_defaults(0, 1));
        assert!(!is_collected_defaults(1, 3));
        assert!(!is_collected_defaults(50, 1));
        // The sentinel pairing scores zero
        assert_eq!(compute_points(0, 3), 0);
    }

    proptest! {
        #[test]
        fn prop_score_stays_in_bounds(importance in -100i64..200, complexity in -10i64..50) {
            let points = compute_points(importance, complexity);
            prop_assert!((0..=POINTS_MAX).contains(&points));
        }

        #[test]
        fn prop_score_monotonic_in_importance(
            importance in IMPORTANCE_MIN..IMPORTANCE_MAX,
            complexity in COMPLEXITY_MIN..=COMPLEXITY_MAX,
        ) {
            prop_assert!(
                compute_points(importance, complexity)
                    <= compute_points(importance + 1, complexity)
            );
        }

        #[test]
        fn prop_score_antitonic_in_complexity(
            importance in IMPORTANCE_MIN..=IMPORTANCE_MAX,
            complexity in COMPLEXITY_MIN..COMPLEXITY_MAX,
        ) {
            prop_assert!(
                compute_points(importance, complexity)
                    >= compute_points(importance, complexity + 1)
            );
        }
    }
}
