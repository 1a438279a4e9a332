use std::fmt;

/// One of the tracked metrics, each kept in its own log file.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, strum::EnumIter)]
pub enum Metric {
    Weight,
    Bmi,
    Calories,
    Exercise,
}

impl Metric {
    pub fn file_name(&self) -> &'static str {
        match self {
            Metric::Weight => "weight_log.txt",
            Metric::Bmi => "bmi_log.txt",
            Metric::Calories => "calorie_log.txt",
            Metric::Exercise => "exercise_log.txt",
        }
    }

    /// Short name used in file names of rendered charts.
    pub fn slug(&self) -> &'static str {
        match self {
            Metric::Weight => "weight",
            Metric::Bmi => "bmi",
            Metric::Calories => "calories",
            Metric::Exercise => "exercise",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Metric::Weight => "Weight",
            Metric::Bmi => "BMI",
            Metric::Calories => "Calories Intake",
            Metric::Exercise => "Exercise",
        }
    }

    /// Value axis label, `None` for metrics logged as free text.
    pub fn axis_label(&self) -> Option<&'static str> {
        match self {
            Metric::Weight => Some("Weight (kg)"),
            Metric::Bmi => Some("BMI"),
            Metric::Calories => Some("Calories (kcal)"),
            Metric::Exercise => None,
        }
    }

    pub fn is_plottable(&self) -> bool {
        self.axis_label().is_some()
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn every_metric_has_its_own_file() {
        let files: HashSet<_> = Metric::iter().map(|m| m.file_name()).collect();
        assert_eq!(files.len(), 4);
    }

    #[test]
    fn only_numeric_metrics_are_plottable() {
        let plottable: Vec<_> = Metric::iter().filter(Metric::is_plottable).collect();
        assert_eq!(plottable, vec![Metric::Weight, Metric::Bmi, Metric::Calories]);
    }
}
