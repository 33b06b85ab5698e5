use crate::dlog;
use crate::error::WorkoutError;
use crate::training::{Running, SportsWalking, Swimming, Training};
use once_cell::sync::Lazy;
use std::collections::HashMap;

type Constructor = fn(&[f64]) -> Result<Box<dyn Training>, WorkoutError>;

static WORKOUT_TYPES: Lazy<HashMap<&'static str, Constructor>> = Lazy::new(|| {
    let mut m: HashMap<&'static str, Constructor> = HashMap::with_capacity(3);
    m.insert(Swimming::CODE, swimming);
    m.insert(Running::CODE, running);
    m.insert(SportsWalking::CODE, walking);
    m
});

fn swimming(data: &[f64]) -> Result<Box<dyn Training>, WorkoutError> {
    Ok(Box::new(Swimming::from_payload(data)?))
}

fn running(data: &[f64]) -> Result<Box<dyn Training>, WorkoutError> {
    Ok(Box::new(Running::from_payload(data)?))
}

fn walking(data: &[f64]) -> Result<Box<dyn Training>, WorkoutError> {
    Ok(Box::new(SportsWalking::from_payload(data)?))
}

/// Build the workout for a sensor package.
///
/// `workout_type` is case-sensitive. The payload is applied positionally
/// to the workout's fields and must match their number exactly.
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Box<dyn Training>, WorkoutError> {
    let Some(build) = WORKOUT_TYPES.get(workout_type) else {
        return Err(WorkoutError::InvalidWorkoutType(workout_type.to_string()));
    };
    let training = build(data)?;
    dlog!(
        "package code={workout_type} values={} -> {}",
        data.len(),
        training.name()
    );
    Ok(training)
}

/// Registered workout codes, sorted.
pub fn known_codes() -> Vec<&'static str> {
    let mut codes: Vec<_> = WORKOUT_TYPES.keys().copied().collect();
    codes.sort_unstable();
    codes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_map_to_variants() {
        let s = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        assert_eq!(s.name(), "Swimming");
        let r = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
        assert_eq!(r.name(), "Running");
        let w = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
        assert_eq!(w.name(), "SportsWalking");
    }

    #[test]
    fn unknown_codes_are_rejected() {
        for code in ["XYZ", "", "run", "Swm", "RUN ", "WALK"] {
            let err = read_package(code, &[1.0, 1.0, 1.0]).unwrap_err();
            assert_eq!(err, WorkoutError::InvalidWorkoutType(code.to_string()));
        }
    }

    #[test]
    fn wrong_arity_is_malformed() {
        let err = read_package("RUN", &[15000.0, 1.0, 75.0, 180.0]).unwrap_err();
        assert_eq!(
            err,
            WorkoutError::malformed("RUN", "ожидалось значений: 3, получено: 4")
        );
    }

    #[test]
    fn known_codes_sorted() {
        assert_eq!(known_codes(), vec!["RUN", "SWM", "WLK"]);
    }
}
