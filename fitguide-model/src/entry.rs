use std::{fmt, str::FromStr};

use chrono::NaiveDate;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
const SEPARATOR: &str = ": ";

#[derive(Clone, Debug, thiserror::Error, PartialEq)]
pub enum Error {
    #[error("missing \": \" separator")]
    MissingSeparator,
    #[error("invalid date \"{0}\"")]
    InvalidDate(String),
    #[error("missing value")]
    MissingValue,
    #[error("invalid value \"{0}\"")]
    InvalidValue(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    date: NaiveDate,
    text: String,
}

impl LogEntry {
    /// Line breaks in `text` are folded into spaces so the entry stays
    /// on a single line.
    pub fn new(date: NaiveDate, text: impl AsRef<str>) -> Self {
        let text = text
            .as_ref()
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        Self { date, text }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.date.format(DATE_FORMAT),
            SEPARATOR,
            self.text
        )
    }
}

/// A numeric log line: the date and the leading number of the value part,
/// any unit after it is ignored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reading {
    pub date: NaiveDate,
    pub value: f64,
}

impl FromStr for Reading {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (date, value) = line
            .trim_end_matches(['\r', '\n'])
            .split_once(SEPARATOR)
            .ok_or(Error::MissingSeparator)?;

        let date = NaiveDate::parse_from_str(date.trim(), DATE_FORMAT)
            .map_err(|_| Error::InvalidDate(date.to_owned()))?;
        let token = value.split_whitespace().next().ok_or(Error::MissingValue)?;
        let value = token
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| Error::InvalidValue(token.to_owned()))?;

        Ok(Self { date, value })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RejectedLine {
    /// 1-based position in the log file.
    pub line_number: usize,
    pub content: String,
    pub reason: Error,
}

impl fmt::Display for RejectedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line_number, self.reason)
    }
}

/// Readings of a log in file order, together with the lines that could
/// not be read.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    pub readings: Vec<Reading>,
    pub rejected: Vec<RejectedLine>,
}

impl Series {
    pub fn parse(text: &str) -> Self {
        let mut series = Series::default();
        for (i, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<Reading>() {
                Ok(reading) => series.readings.push(reading),
                Err(reason) => series.rejected.push(RejectedLine {
                    line_number: i + 1,
                    content: line.to_owned(),
                    reason,
                }),
            }
        }
        series
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.readings.iter().map(|r| (r.date, r.value))
    }
}
