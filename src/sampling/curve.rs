use crate::sampling::MemorySample;
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Error, Write};
use std::path::Path;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum CurveFormat {
    Csv,
    Tsv,
    Json,
}

impl CurveFormat {
    /// Guesses the format from a file extension, defaulting to CSV.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        path.as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .and_then(|e| e.to_ascii_lowercase().parse().ok())
            .unwrap_or(CurveFormat::Csv)
    }
}

/// Readings in the order they were taken.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemoryCurve {
    entries: Vec<MemorySample>,
}

impl MemoryCurve {
    pub fn push(&mut self, sample: MemorySample) {
        self.entries.push(sample)
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn latest(&self) -> Option<MemorySample> {
        self.entries.last().copied()
    }
    pub fn iter(&self) -> impl Iterator<Item = &MemorySample> {
        self.entries.iter()
    }

    /// Number of readings where the query failed.
    pub fn failures(&self) -> usize {
        self.entries.iter().filter(|s| s.is_failure()).count()
    }

    /// Largest successful reading, if any.
    pub fn peak_megabytes(&self) -> Option<f64> {
        self.entries
            .iter()
            .filter(|s| !s.is_failure())
            .map(|s| s.megabytes)
            .fold(None, |acc, x| Some(acc.map_or(x, |m: f64| m.max(x))))
    }

    pub fn export<P: AsRef<Path>>(&self, path: P, fmt: CurveFormat) -> Result<(), Error> {
        match fmt {
            CurveFormat::Csv => self.export_with_delimiter(path, ','),
            CurveFormat::Tsv => self.export_with_delimiter(path, '\t'),
            CurveFormat::Json => self.export_json(path),
        }
    }

    fn export_with_delimiter<P: AsRef<Path>>(&self, path: P, delimiter: char) -> Result<(), Error> {
        let mut w = BufWriter::new(File::create(path)?);
        writeln!(w, "taken_at{delimiter}megabytes")?;
        for s in &self.entries {
            writeln!(
                w,
                "{}{delimiter}{:.6}",
                s.taken_at.to_rfc3339_opts(SecondsFormat::Millis, true),
                s.megabytes
            )?;
        }
        w.flush()
    }

    fn export_json<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let mut w = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut w, self)?;
        writeln!(w)?;
        w.flush()
    }
}
