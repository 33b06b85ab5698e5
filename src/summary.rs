use crate::training::Training;
use std::fmt;

/// Statistics of one finished workout, ready to be printed.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoMessage {
    pub training_type: String,
    pub duration: f64,
    pub distance: f64,
    pub speed: f64,
    pub calories: f64,
}

impl InfoMessage {
    pub fn get_message(&self) -> String {
        format!(
            "Тип тренировки: {}; \
             Длительность: {:.3} ч.; \
             Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; \
             Потрачено ккал: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.get_message())
    }
}

/// Render `record` under an explicit label.
pub fn render_summary(kind_label: &str, record: &dyn Training) -> String {
    let mut info = record.show_training_info();
    kind_label.clone_into(&mut info.training_type);
    info.get_message()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::training::{Running, SportsWalking, Swimming};

    #[test]
    fn message_uses_three_decimals() {
        let info = InfoMessage {
            training_type: "Running".into(),
            duration: 2.0,
            distance: 10.0,
            speed: 5.0,
            calories: 0.12345,
        };
        assert_eq!(
            info.get_message(),
            "Тип тренировки: Running; Длительность: 2.000 ч.; Дистанция: 10.000 км; \
             Ср. скорость: 5.000 км/ч; Потрачено ккал: 0.123."
        );
        assert_eq!(info.to_string(), info.get_message());
    }

    #[test]
    fn render_summary_uses_given_label() {
        let r = Running::new(15000, 1.0, 75.0);
        let line = render_summary("Running", &r);
        assert_eq!(
            line,
            "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
             Ср. скорость: 9.750 км/ч; Потрачено ккал: 797.805."
        );
    }

    #[test]
    fn render_summary_matches_training_info() {
        let s = Swimming::new(720, 1.0, 80.0, 25.0, 40);
        assert_eq!(
            render_summary(Swimming::NAME, &s),
            s.show_training_info().get_message()
        );
    }

    #[test]
    fn unguarded_arithmetic_shows_in_summary() {
        let r = Running::new(100, 0.0, 70.0);
        assert_eq!(
            render_summary(Running::NAME, &r),
            "Тип тренировки: Running; Длительность: 0.000 ч.; Дистанция: 0.065 км; \
             Ср. скорость: inf км/ч; Потрачено ккал: NaN."
        );

        let w = SportsWalking::new(9000, 1.0, 75.0, 0.0);
        assert_eq!(
            render_summary(SportsWalking::NAME, &w),
            "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; \
             Ср. скорость: 5.850 км/ч; Потрачено ккал: inf."
        );
    }
}
