use crate::bridge::{MemoryUsagePlugin, MethodCall};
use crate::sampling::SamplerParams;
use crate::tasks::{InvokeMethodTask, Task, WatchMemoryTask};
use crate::ui::types::build::BuildError;
use crate::ui::types::choices::{InvokeParams, TaskChoice, WatchParams};
use crate::utils::system::SystemFootprint;
use std::path::PathBuf;

pub fn build_task(choice: TaskChoice) -> Result<Box<dyn Task>, BuildError> {
    match choice {
        TaskChoice::InvokeMethod(p) => {
            let t = InvokeMethodTask::try_from(p)?;
            Ok(Box::new(t))
        }
        TaskChoice::WatchMemory(p) => {
            let t = WatchMemoryTask::try_from(p)?;
            Ok(Box::new(t))
        }
    }
}

impl TryFrom<InvokeParams> for InvokeMethodTask<MemoryUsagePlugin> {
    type Error = BuildError;

    fn try_from(p: InvokeParams) -> Result<Self, Self::Error> {
        let method = p.method.trim();
        if method.is_empty() {
            return Err(BuildError::InvalidParameter(
                "method name must not be empty".into(),
            ));
        }
        Ok(InvokeMethodTask::new(
            MemoryUsagePlugin::new(),
            MethodCall::new(method),
        ))
    }
}

impl TryFrom<WatchParams> for WatchMemoryTask<SystemFootprint> {
    type Error = BuildError;

    fn try_from(p: WatchParams) -> Result<Self, Self::Error> {
        if p.samples == 0 {
            return Err(BuildError::InvalidParameter("samples must be > 0".into()));
        }
        let output = p
            .output
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Ok(WatchMemoryTask::new(
            SystemFootprint,
            SamplerParams::from(&p),
            output,
        ))
    }
}
