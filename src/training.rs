use crate::error::WorkoutError;
use crate::summary::InfoMessage;
use std::fmt;

/// Step length in meters for running and walking.
pub const LEN_STEP: f64 = 0.65;
/// Stroke length in meters for swimming.
pub const SWIM_LEN_STEP: f64 = 1.38;
pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_HOUR: f64 = 60.0;

const RUN_CALORIE_SPEED_MULTIPLIER: f64 = 18.0;
const RUN_CALORIE_SPEED_SHIFT: f64 = 1.79;

const WALK_CALORIE_WEIGHT_MULTIPLIER: f64 = 0.035;
const WALK_CALORIE_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
/// km/h -> m/s.
const KMH_IN_MSEC: f64 = 0.278;
const CM_IN_M: f64 = 100.0;

const SWIM_CALORIE_SPEED_SHIFT: f64 = 1.1;
const SWIM_CALORIE_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Fields every sensor package carries, in payload order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorData {
    /// Steps or strokes.
    pub action: u32,
    /// Hours.
    pub duration: f64,
    /// Kilograms.
    pub weight: f64,
}

/// A workout that knows how to compute its own statistics.
///
/// Running and walking share the step-based distance and speed; swimming
/// overrides both.
pub trait Training: fmt::Debug {
    /// Type name shown in the summary line.
    fn name(&self) -> &'static str;

    fn sensor_data(&self) -> &SensorData;

    fn step_length(&self) -> f64 {
        LEN_STEP
    }

    fn duration(&self) -> f64 {
        self.sensor_data().duration
    }

    /// Distance in km.
    fn get_distance(&self) -> f64 {
        f64::from(self.sensor_data().action) * self.step_length() / M_IN_KM
    }

    /// Mean speed in km/h.
    fn get_mean_speed(&self) -> f64 {
        self.get_distance() / self.duration()
    }

    /// Spent energy in kcal.
    fn get_spent_calories(&self) -> f64;

    fn show_training_info(&self) -> InfoMessage {
        InfoMessage {
            training_type: self.name().to_string(),
            duration: self.duration(),
            distance: self.get_distance(),
            speed: self.get_mean_speed(),
            calories: self.get_spent_calories(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    data: SensorData,
}

impl Running {
    pub const NAME: &'static str = "Running";
    /// Package code reported by the tracker.
    pub const CODE: &'static str = "RUN";

    pub const fn new(action: u32, duration: f64, weight: f64) -> Self {
        Self {
            data: SensorData {
                action,
                duration,
                weight,
            },
        }
    }

    /// Payload: `[action, duration, weight]`.
    pub fn from_payload(data: &[f64]) -> Result<Self, WorkoutError> {
        let p = Payload::new(Self::CODE, data, 3)?;
        Ok(Self::new(
            p.count(0, "action")?,
            p.real(1, "duration")?,
            p.real(2, "weight")?,
        ))
    }
}

impl Training for Running {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn sensor_data(&self) -> &SensorData {
        &self.data
    }

    fn get_spent_calories(&self) -> f64 {
        (RUN_CALORIE_SPEED_MULTIPLIER * self.get_mean_speed() + RUN_CALORIE_SPEED_SHIFT)
            * self.data.weight
            / M_IN_KM
            * self.data.duration
            * MIN_IN_HOUR
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    data: SensorData,
    /// Centimeters.
    height: f64,
}

impl SportsWalking {
    pub const NAME: &'static str = "SportsWalking";
    /// Package code reported by the tracker.
    pub const CODE: &'static str = "WLK";

    pub const fn new(action: u32, duration: f64, weight: f64, height: f64) -> Self {
        Self {
            data: SensorData {
                action,
                duration,
                weight,
            },
            height,
        }
    }

    /// Payload: `[action, duration, weight, height]`.
    pub fn from_payload(data: &[f64]) -> Result<Self, WorkoutError> {
        let p = Payload::new(Self::CODE, data, 4)?;
        Ok(Self::new(
            p.count(0, "action")?,
            p.real(1, "duration")?,
            p.real(2, "weight")?,
            p.real(3, "height")?,
        ))
    }
}

impl Training for SportsWalking {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn sensor_data(&self) -> &SensorData {
        &self.data
    }

    fn get_spent_calories(&self) -> f64 {
        let speed_msec = self.get_mean_speed() * KMH_IN_MSEC;
        let height_m = self.height / CM_IN_M;
        (WALK_CALORIE_WEIGHT_MULTIPLIER * self.data.weight
            + speed_msec.powi(2) / height_m
                * WALK_CALORIE_SPEED_HEIGHT_MULTIPLIER
                * self.data.weight)
            * self.data.duration
            * MIN_IN_HOUR
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    data: SensorData,
    /// Meters.
    length_pool: f64,
    count_pool: u32,
}

impl Swimming {
    pub const NAME: &'static str = "Swimming";
    /// Package code reported by the tracker.
    pub const CODE: &'static str = "SWM";

    pub const fn new(
        action: u32,
        duration: f64,
        weight: f64,
        length_pool: f64,
        count_pool: u32,
    ) -> Self {
        Self {
            data: SensorData {
                action,
                duration,
                weight,
            },
            length_pool,
            count_pool,
        }
    }

    /// Payload: `[action, duration, weight, length_pool, count_pool]`.
    pub fn from_payload(data: &[f64]) -> Result<Self, WorkoutError> {
        let p = Payload::new(Self::CODE, data, 5)?;
        Ok(Self::new(
            p.count(0, "action")?,
            p.real(1, "duration")?,
            p.real(2, "weight")?,
            p.real(3, "length_pool")?,
            p.count(4, "count_pool")?,
        ))
    }
}

impl Training for Swimming {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn sensor_data(&self) -> &SensorData {
        &self.data
    }

    fn step_length(&self) -> f64 {
        SWIM_LEN_STEP
    }

    /// Pool-based, independent of the stroke count.
    fn get_mean_speed(&self) -> f64 {
        self.length_pool * f64::from(self.count_pool) / M_IN_KM / self.data.duration
    }

    fn get_spent_calories(&self) -> f64 {
        (self.get_mean_speed() + SWIM_CALORIE_SPEED_SHIFT)
            * SWIM_CALORIE_WEIGHT_MULTIPLIER
            * self.data.weight
            * self.data.duration
    }
}

/// Positional view over a raw payload, checked for arity up front.
struct Payload<'a> {
    workout_type: &'static str,
    values: &'a [f64],
}

impl<'a> Payload<'a> {
    fn new(
        workout_type: &'static str,
        values: &'a [f64],
        arity: usize,
    ) -> Result<Self, WorkoutError> {
        if values.len() != arity {
            return Err(WorkoutError::malformed(
                workout_type,
                format!("ожидалось значений: {arity}, получено: {}", values.len()),
            ));
        }
        Ok(Self {
            workout_type,
            values,
        })
    }

    fn real(&self, idx: usize, field: &str) -> Result<f64, WorkoutError> {
        let v = self.values[idx];
        if !v.is_finite() {
            return Err(WorkoutError::malformed(
                self.workout_type,
                format!("{field} должно быть конечным числом, получено {v}"),
            ));
        }
        Ok(v)
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn count(&self, idx: usize, field: &str) -> Result<u32, WorkoutError> {
        let v = self.real(idx, field)?;
        if v < 0.0 || v.fract() != 0.0 || v > f64::from(u32::MAX) {
            return Err(WorkoutError::malformed(
                self.workout_type,
                format!("{field} должно быть целым неотрицательным числом, получено {v}"),
            ));
        }
        Ok(v as u32)
    }
}
