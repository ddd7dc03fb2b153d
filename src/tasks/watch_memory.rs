use crate::memory::FootprintSource;
use crate::sampling::{CurveFormat, MemoryCurve, MemorySampler, SamplerParams};
use crate::tasks::{Task, TaskStatus};
use anyhow::{Context, Result, anyhow};
use log::info;
use std::io::Write;
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

/// Samples the footprint on a worker thread and prints each reading as it lands.
pub struct WatchMemoryTask<S> {
    source: S,
    params: SamplerParams,
    output: Option<PathBuf>,
    curve: MemoryCurve,
}

impl<S: FootprintSource + Sync> WatchMemoryTask<S> {
    pub fn new(source: S, params: SamplerParams, output: Option<PathBuf>) -> Self {
        Self {
            source,
            params,
            output,
            curve: MemoryCurve::default(),
        }
    }

    pub fn curve(&self) -> &MemoryCurve {
        &self.curve
    }
}

impl<S: FootprintSource + Sync> Task for WatchMemoryTask<S> {
    fn run(&mut self, out: &mut dyn Write) -> Result<TaskStatus> {
        let (tx, rx) = mpsc::channel();
        let sampler = MemorySampler::new(&self.source, self.params.clone())?.with_progress(tx);

        let curve = thread::scope(|scope| -> Result<MemoryCurve> {
            let worker = scope.spawn(move || {
                let mut sampler = sampler;
                sampler.run();
                sampler.into_curve()
            });

            for sample in rx {
                writeln!(out, "{sample}")?;
            }

            worker
                .join()
                .map_err(|_| anyhow!("sampling thread panicked"))
        })?;

        match curve.peak_megabytes() {
            Some(peak) => writeln!(
                out,
                "{} readings, {} failed, peak {peak:.3} MB",
                curve.len(),
                curve.failures()
            )?,
            None => writeln!(out, "{} readings, all failed", curve.len())?,
        }

        if let Some(path) = &self.output {
            curve
                .export(path, CurveFormat::from_path(path))
                .with_context(|| format!("writing {}", path.display()))?;
            info!("wrote {} readings to {}", curve.len(), path.display());
        }

        self.curve = curve;
        Ok(TaskStatus::Completed)
    }
}
