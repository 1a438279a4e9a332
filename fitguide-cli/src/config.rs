use std::{env, path::PathBuf};

use dotenv::dotenv;
use fitguide_chart::ChartFormat;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    #[error("FITGUIDE_CHART_FORMAT: {0}")]
    InvalidChartFormat(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub diet_plans: PathBuf,
    pub chart_dir: PathBuf,
    pub chart_format: ChartFormat,
}

impl Config {
    /// Read settings from the environment, after loading `.env` if present.
    pub fn from_env() -> Result<Self, Error> {
        dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let path = |key: &str, default: &str| {
            PathBuf::from(var(key).unwrap_or_else(|| default.to_owned()))
        };

        let chart_format = match var("FITGUIDE_CHART_FORMAT") {
            Some(format) => format.parse().map_err(Error::InvalidChartFormat)?,
            None => ChartFormat::default(),
        };

        Ok(Self {
            data_dir: path("FITGUIDE_DATA_DIR", "."),
            diet_plans: path("FITGUIDE_DIET_PLANS", "diet_plans.json"),
            chart_dir: path("FITGUIDE_CHART_DIR", "."),
            chart_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_to_working_directory() {
        let config = Config::from_vars(vars(&[])).unwrap();

        assert_eq!(
            config,
            Config {
                data_dir: PathBuf::from("."),
                diet_plans: PathBuf::from("diet_plans.json"),
                chart_dir: PathBuf::from("."),
                chart_format: ChartFormat::Png,
            }
        );
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_vars(vars(&[
            ("FITGUIDE_DATA_DIR", "/var/lib/fitguide"),
            ("FITGUIDE_CHART_DIR", "charts"),
            ("FITGUIDE_CHART_FORMAT", "svg"),
        ]))
        .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/var/lib/fitguide"));
        assert_eq!(config.chart_dir, PathBuf::from("charts"));
        assert_eq!(config.chart_format, ChartFormat::Svg);
    }

    #[test]
    fn rejects_unknown_chart_format() {
        assert!(matches!(
            Config::from_vars(vars(&[("FITGUIDE_CHART_FORMAT", "gif")])),
            Err(Error::InvalidChartFormat(_))
        ));
    }
}
