use std::{
    fs::{self, OpenOptions},
    io::{self, Write},
    path::PathBuf,
};

use fitguide_model::{
    entry::{LogEntry, Series},
    metric::Metric,
};
use log::{debug, warn};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no {0} data recorded yet")]
    NoData(Metric),
    #[error("log storage failure: {0}")]
    Io(#[from] io::Error),
}

type Result<T> = std::result::Result<T, Error>;

/// Append-only store of dated entries, one log per metric.
#[mockall::automock]
pub trait Logbook: Send + Sync {
    fn append(&self, metric: Metric, entry: &LogEntry) -> Result<()>;
    fn read_text(&self, metric: Metric) -> Result<String>;
    fn read_series(&self, metric: Metric) -> Result<Series>;
}

pub struct LogbookImpl {
    directory: PathBuf,
}

impl LogbookImpl {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn path(&self, metric: Metric) -> PathBuf {
        self.directory.join(metric.file_name())
    }
}

impl Logbook for LogbookImpl {
    fn append(&self, metric: Metric, entry: &LogEntry) -> Result<()> {
        fs::create_dir_all(&self.directory)?;
        let path = self.path(metric);
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        writeln!(file, "{}", entry)?;
        debug!("Appended \"{}\" to {}", entry, path.display());
        Ok(())
    }

    fn read_text(&self, metric: Metric) -> Result<String> {
        fs::read_to_string(self.path(metric)).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::NoData(metric),
            _ => Error::Io(e),
        })
    }

    fn read_series(&self, metric: Metric) -> Result<Series> {
        let series = Series::parse(&self.read_text(metric)?);
        for rejected in series.rejected.iter() {
            warn!(
                "Skipping malformed {} entry at {}: {:?}",
                metric, rejected, rejected.content
            );
        }
        debug!(
            "Read {} {} readings from {}",
            series.readings.len(),
            metric,
            self.path(metric).display()
        );
        Ok(series)
    }
}
