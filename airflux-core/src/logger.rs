use crate::error::AirfluxError;
use crate::simulation::state::{LinkStatus, SamplePair};
use csv::Writer;
use serde::{Deserialize, Serialize};
use std::fs;

/// One CSV row per display tick. The two sample columns are
/// JSON-encoded so the row stays flat for `csv` without losing any
/// sensor field; chart generation parses them back out.
#[derive(Debug, Serialize, Deserialize)]
pub struct LogRow {
    pub tick: u64,
    pub link: LinkStatus,
    pub intake_json: String,
    pub exhaust_json: String,
}

pub struct TimeSeriesLogger {
    path: String,
    writer: Writer<fs::File>,
}

impl TimeSeriesLogger {
    pub fn new(path: &str) -> Result<Self, AirfluxError> {
        let writer =
            Writer::from_path(path).map_err(|e| AirfluxError::Csv(path.to_string(), e))?;
        Ok(Self {
            path: path.to_string(),
            writer,
        })
    }

    /// Appends one row and flushes it, so a partial run still leaves a
    /// readable log behind.
    pub fn log_pair(&mut self, pair: &SamplePair) -> Result<(), AirfluxError> {
        let row = LogRow {
            tick: pair.tick,
            link: pair.link,
            intake_json: serde_json::to_string(&pair.intake)?,
            exhaust_json: serde_json::to_string(&pair.exhaust)?,
        };

        self.writer
            .serialize(row)
            .map_err(|e| AirfluxError::Csv(self.path.clone(), e))?;
        self.writer
            .flush()
            .map_err(|e| AirfluxError::FileIo(self.path.clone(), e))?;
        Ok(())
    }
}
