use std::fmt;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    #[error("weight must be a positive number of kilograms, got {0}")]
    InvalidWeight(f64),
    #[error("height must be a positive number of meters, got {0}")]
    InvalidHeight(f64),
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum FitnessStatus {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl FitnessStatus {
    /// Classify a body mass index using the 18.5 / 25 / 30 thresholds.
    /// Each threshold belongs to the band above it.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            FitnessStatus::Underweight
        } else if bmi < 25.0 {
            FitnessStatus::Normal
        } else if bmi < 30.0 {
            FitnessStatus::Overweight
        } else {
            FitnessStatus::Obese
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FitnessStatus::Underweight => "Underweight",
            FitnessStatus::Normal => "Normal",
            FitnessStatus::Overweight => "Overweight",
            FitnessStatus::Obese => "Obese",
        }
    }
}

impl fmt::Display for FitnessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Body mass index rounded to two decimal places, exact halves to even.
pub fn body_mass_index(weight_kg: f64, height_m: f64) -> f64 {
    let bmi = weight_kg / height_m.powi(2);
    format!("{:.2}", bmi).parse().unwrap_or(bmi)
}

#[derive(Clone, Debug, PartialEq)]
pub struct User {
    weight: f64,
    height: f64,
    bmi: f64,
    status: FitnessStatus,
}

impl User {
    pub fn new(weight: f64, height: f64) -> Result<Self> {
        check_weight(weight)?;
        if !(height.is_finite() && height > 0.0) {
            return Err(Error::InvalidHeight(height));
        }

        let bmi = body_mass_index(weight, height);
        Ok(Self {
            weight,
            height,
            bmi,
            status: FitnessStatus::from_bmi(bmi),
        })
    }

    /// Replace the current weight, recomputing BMI and status.
    pub fn set_weight(&mut self, weight: f64) -> Result<()> {
        check_weight(weight)?;
        self.weight = weight;
        self.bmi = body_mass_index(weight, self.height);
        self.status = FitnessStatus::from_bmi(self.bmi);
        Ok(())
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
    pub fn bmi(&self) -> f64 {
        self.bmi
    }
    pub fn status(&self) -> FitnessStatus {
        self.status
    }
}

fn check_weight(weight: f64) -> Result<()> {
    if weight.is_finite() && weight > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidWeight(weight))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computes_bmi_and_status() {
        let test_data = [
            (70.0, 1.75, 22.86, FitnessStatus::Normal),
            (100.0, 1.60, 39.06, FitnessStatus::Obese),
            (50.0, 1.80, 15.43, FitnessStatus::Underweight),
            (85.0, 1.80, 26.23, FitnessStatus::Overweight),
            (88.5, 2.0, 22.12, FitnessStatus::Normal),
            (30.0, 2.0, 7.5, FitnessStatus::Underweight),
        ];

        for (i, (weight, height, bmi, status)) in test_data.into_iter().enumerate() {
            let user = User::new(weight, height).unwrap();
            assert_eq!(user.bmi(), bmi, "Test case #{}", i);
            assert_eq!(user.status(), status, "Test case #{}", i);
        }
    }

    #[test]
    fn exact_halves_round_to_even() {
        // 22.125 and 0.125 are exact in binary, so these are true ties
        assert_eq!(body_mass_index(88.5, 2.0), 22.12);
        assert_eq!(body_mass_index(0.5, 2.0), 0.12);
        assert_eq!(body_mass_index(90.5, 2.0), 22.62);
    }

    #[test]
    fn thresholds_belong_to_upper_band() {
        let test_data = [
            (18.49, FitnessStatus::Underweight),
            (18.5, FitnessStatus::Normal),
            (24.99, FitnessStatus::Normal),
            (25.0, FitnessStatus::Overweight),
            (29.99, FitnessStatus::Overweight),
            (30.0, FitnessStatus::Obese),
        ];

        for (bmi, status) in test_data {
            assert_eq!(FitnessStatus::from_bmi(bmi), status, "BMI {}", bmi);
        }
    }

    #[test]
    fn boundary_weights_classify_on_rounded_bmi() {
        // 2m tall: BMI is exactly weight / 4
        assert_eq!(User::new(74.0, 2.0).unwrap().status(), FitnessStatus::Normal);
        assert_eq!(User::new(100.0, 2.0).unwrap().status(), FitnessStatus::Overweight);
        assert_eq!(User::new(120.0, 2.0).unwrap().status(), FitnessStatus::Obese);
    }

    #[test]
    fn set_weight_recomputes_bmi_and_status() {
        let mut user = User::new(70.0, 1.75).unwrap();
        user.set_weight(95.0).unwrap();

        assert_eq!(user.weight(), 95.0);
        assert_eq!(user.bmi(), 31.02);
        assert_eq!(user.status(), FitnessStatus::Obese);
    }

    #[test]
    fn rejects_non_positive_input() {
        assert_eq!(User::new(0.0, 1.75), Err(Error::InvalidWeight(0.0)));
        assert_eq!(User::new(70.0, -1.0), Err(Error::InvalidHeight(-1.0)));
        assert!(User::new(f64::NAN, 1.75).is_err());

        let mut user = User::new(70.0, 1.75).unwrap();
        assert_eq!(user.set_weight(-3.0), Err(Error::InvalidWeight(-3.0)));
        assert_eq!(user.weight(), 70.0);
    }

    #[test]
    fn status_labels() {
        assert_eq!(FitnessStatus::Underweight.to_string(), "Underweight");
        assert_eq!(FitnessStatus::Obese.to_string(), "Obese");
    }
}
