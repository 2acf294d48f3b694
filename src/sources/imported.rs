use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::core::{SamplingResult, SignalSource, TimeSeries};

#[derive(Debug, Deserialize)]
struct Row {
    time: f64,
    values: f64,
}

/// Signal read from a two-column `time,values` CSV table
#[derive(Debug, Clone)]
pub struct ImportedSignal {
    name: String,
    series: TimeSeries,
}

impl ImportedSignal {
    pub fn new(name: impl Into<String>, series: TimeSeries) -> Self {
        Self {
            name: name.into(),
            series,
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .context(format!("Failed to open signal file {:?}", path))?;
        let name = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("signal")
            .to_string();
        Self::from_reader(name, file)
    }

    pub fn from_reader<R: Read>(name: impl Into<String>, reader: R) -> Result<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut time = Vec::new();
        let mut values = Vec::new();

        for (line, record) in csv_reader.deserialize::<Row>().enumerate() {
            let row = record.context(format!("Malformed row {} in signal table", line + 1))?;
            time.push(row.time);
            values.push(row.values);
        }

        let series = TimeSeries::new(time, values)?;
        Ok(Self::new(name, series))
    }
}

impl SignalSource for ImportedSignal {
    fn name(&self) -> &str {
        &self.name
    }

    fn series(&self) -> SamplingResult<TimeSeries> {
        Ok(self.series.clone())
    }
}
