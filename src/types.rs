/// One reading as reported by the tracker: a workout code and its payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(workout_type: impl Into<String>, data: impl Into<Vec<f64>>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data: data.into(),
        }
    }
}
