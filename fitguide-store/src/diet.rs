use std::{collections::HashMap, fs::File, io::BufReader, path::Path};

use fitguide_model::{plan::PlanType, user::FitnessStatus};
use log::{debug, info};
use serde::Deserialize;
use strum::IntoEnumIterator;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot read diet plans: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed diet plans: {0}")]
    Format(#[from] serde_json::Error),
    #[error("diet plans have no entry for {0}")]
    MissingStatus(FitnessStatus),
    #[error("no {1} plan for {0}")]
    NotFound(FitnessStatus, PlanType),
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PlanSet {
    weight_loss: String,
    weight_gain: String,
    healthy: String,
}

impl PlanSet {
    fn get(&self, plan_type: PlanType) -> &str {
        match plan_type {
            PlanType::WeightLoss => &self.weight_loss,
            PlanType::WeightGain => &self.weight_gain,
            PlanType::Healthy => &self.healthy,
        }
    }
}

/// Recommendation texts keyed by fitness status and plan type. Immutable
/// once loaded.
#[derive(Debug)]
pub struct DietPlans {
    plans: HashMap<FitnessStatus, PlanSet>,
}

impl DietPlans {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading diet plans from {}", path.display());
        let file = File::open(path)?;
        let plans: HashMap<FitnessStatus, PlanSet> =
            serde_json::from_reader(BufReader::new(file))?;
        let diet_plans = Self::validated(plans)?;
        info!("Loaded diet plans from {}", path.display());
        Ok(diet_plans)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Self::validated(serde_json::from_str(json)?)
    }

    fn validated(plans: HashMap<FitnessStatus, PlanSet>) -> Result<Self> {
        if let Some(missing) = FitnessStatus::iter().find(|s| !plans.contains_key(s)) {
            return Err(Error::MissingStatus(missing));
        }
        Ok(Self { plans })
    }

    pub fn get_plan(&self, status: FitnessStatus, plan_type: PlanType) -> Result<&str> {
        self.plans
            .get(&status)
            .map(|set| set.get(plan_type))
            .ok_or(Error::NotFound(status, plan_type))
    }
}
