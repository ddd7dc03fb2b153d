use crate::memory::{FootprintSource, memory_usage_mb};
use crate::sampling::{MemoryCurve, MemorySample, SamplerError, SamplerParams};
use chrono::Utc;
use log::{info, warn};
use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;

/// Takes a fixed number of footprint readings at a fixed interval.
pub struct MemorySampler<S> {
    source: S,
    samples: u64,
    interval: Duration,

    curve: MemoryCurve,
    progress_tx: Option<Sender<MemorySample>>,
}

impl<S: FootprintSource> MemorySampler<S> {
    pub fn new(source: S, params: SamplerParams) -> Result<Self, SamplerError> {
        if params.samples == 0 {
            return Err(SamplerError::InvalidParameter(
                "samples must be > 0".into(),
            ));
        }

        Ok(Self {
            source,
            samples: params.samples,
            interval: Duration::from_millis(params.interval_millis),
            curve: MemoryCurve::default(),
            progress_tx: None,
        })
    }

    pub fn with_progress(mut self, tx: Sender<MemorySample>) -> Self {
        self.progress_tx = Some(tx);
        self
    }

    /// Takes a fresh set of readings, replacing any earlier curve.
    ///
    /// Stops early once a progress receiver has hung up.
    pub fn run(&mut self) -> &MemoryCurve {
        self.curve = MemoryCurve::default();
        info!(
            "sampling memory footprint {} times every {:?}",
            self.samples, self.interval
        );

        for i in 0..self.samples {
            if i > 0 && !self.interval.is_zero() {
                thread::sleep(self.interval);
            }

            let sample = MemorySample::new(Utc::now(), memory_usage_mb(&self.source));
            if sample.is_failure() {
                warn!("footprint query failed on reading {}", i + 1);
            }

            self.curve.push(sample);
            if let Some(tx) = &self.progress_tx {
                if tx.send(sample).is_err() {
                    info!("progress receiver gone, stopping after {} readings", i + 1);
                    break;
                }
            }
        }

        info!(
            "sampling finished: {} readings, {} failed",
            self.curve.len(),
            self.curve.failures()
        );
        &self.curve
    }

    pub fn curve(&self) -> &MemoryCurve {
        &self.curve
    }

    pub fn into_curve(self) -> MemoryCurve {
        self.curve
    }
}
