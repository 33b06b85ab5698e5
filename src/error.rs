use thiserror::Error;

/// Errors raised while turning a sensor package into a workout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkoutError {
    /// The package code is not one of the registered workout types.
    #[error("Неизвестный тип тренировки {0}")]
    InvalidWorkoutType(String),

    /// The payload does not fit the workout's fields. `workout_type` is the
    /// package code.
    #[error("Некорректные данные тренировки {workout_type}: {reason}")]
    MalformedPayload {
        workout_type: String,
        reason: String,
    },
}

impl WorkoutError {
    pub fn malformed(workout_type: &str, reason: impl Into<String>) -> Self {
        Self::MalformedPayload {
            workout_type: workout_type.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_in_russian() {
        assert_eq!(
            WorkoutError::InvalidWorkoutType("XYZ".into()).to_string(),
            "Неизвестный тип тренировки XYZ"
        );
        assert_eq!(
            WorkoutError::malformed("RUN", "ожидалось значений: 3, получено: 0").to_string(),
            "Некорректные данные тренировки RUN: ожидалось значений: 3, получено: 0"
        );
    }
}
