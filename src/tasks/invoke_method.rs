use crate::bridge::{MethodCall, MethodCallHandler, MethodResult};
use crate::tasks::{Task, TaskStatus};
use anyhow::Result;
use std::io::Write;

/// Sends one call through a handler and prints the JSON answer.
pub struct InvokeMethodTask<H> {
    handler: H,
    call: MethodCall,
}

impl<H: MethodCallHandler> InvokeMethodTask<H> {
    pub fn new(handler: H, call: MethodCall) -> Self {
        Self { handler, call }
    }
}

impl<H: MethodCallHandler> Task for InvokeMethodTask<H> {
    fn run(&mut self, out: &mut dyn Write) -> Result<TaskStatus> {
        let result = self.handler.handle(&self.call);
        writeln!(out, "{}", serde_json::to_string(&result)?)?;

        Ok(match result {
            MethodResult::Success(_) => TaskStatus::Completed,
            MethodResult::NotImplemented => TaskStatus::NotImplemented,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::MemoryUsagePlugin;
    use crate::testing::{FailingFootprint, FixedFootprint};

    fn run_with<H: MethodCallHandler>(handler: H, method: &str) -> (TaskStatus, String) {
        let mut task = InvokeMethodTask::new(handler, MethodCall::new(method));
        let mut buf = Vec::new();
        let status = task.run(&mut buf).unwrap();
        (status, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn prints_megabytes() {
        let plugin = MemoryUsagePlugin::with_source(FixedFootprint::new(104_857_600));
        let (status, out) = run_with(plugin, "getMemoryUsage");
        assert_eq!(status, TaskStatus::Completed);
        assert_eq!(out, "{\"status\":\"success\",\"value\":100.0}\n");
    }

    #[test]
    fn prints_sentinel_on_failure() {
        let plugin = MemoryUsagePlugin::with_source(FailingFootprint::new(5));
        let (status, out) = run_with(plugin, "getMemoryUsage");
        assert_eq!(status, TaskStatus::Completed);
        assert_eq!(out, "{\"status\":\"success\",\"value\":-1.0}\n");
    }

    #[test]
    fn unknown_method_exits_with_two() {
        let plugin = MemoryUsagePlugin::with_source(FixedFootprint::new(1));
        let (status, out) = run_with(plugin, "unknownMethod");
        assert_eq!(status, TaskStatus::NotImplemented);
        assert_eq!(status.exit_code(), 2);
        assert_eq!(out, "{\"status\":\"not-implemented\"}\n");
    }
}
