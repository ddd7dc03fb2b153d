use crate::bridge::{MethodCall, MethodResult, Request};
use crate::memory::{FootprintSource, memory_usage_mb};
use crate::utils::system::SystemFootprint;
use log::debug;
use serde_json::Value;

pub const CHANNEL_NAME: &str = "com.example/memory_usage";

/// Native side of a method channel.
pub trait MethodCallHandler {
    fn channel(&self) -> &'static str;
    fn handle(&self, call: &MethodCall) -> MethodResult;
}

/// Answers `getMemoryUsage` with the process footprint in megabytes.
pub struct MemoryUsagePlugin<S = SystemFootprint> {
    source: S,
}

impl MemoryUsagePlugin {
    pub fn new() -> Self {
        Self::with_source(SystemFootprint)
    }
}

impl Default for MemoryUsagePlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: FootprintSource> MemoryUsagePlugin<S> {
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    pub fn dispatch(&self, request: Request) -> Value {
        match request {
            Request::GetMemoryUsage => Value::from(memory_usage_mb(&self.source)),
        }
    }
}

impl<S: FootprintSource> MethodCallHandler for MemoryUsagePlugin<S> {
    fn channel(&self) -> &'static str {
        CHANNEL_NAME
    }

    fn handle(&self, call: &MethodCall) -> MethodResult {
        match Request::try_from(call) {
            Ok(request) => {
                debug!("{}: dispatching {request}", self.channel());
                MethodResult::Success(self.dispatch(request))
            }
            Err(e) => {
                debug!("{}: {e}", self.channel());
                MethodResult::NotImplemented
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FailingFootprint, FixedFootprint};
    use serde_json::json;

    #[test]
    fn reports_megabytes_on_success() {
        let plugin = MemoryUsagePlugin::with_source(FixedFootprint::new(104_857_600));
        let res = plugin.handle(&MethodCall::new("getMemoryUsage"));
        assert_eq!(res, MethodResult::Success(json!(100.0)));
        assert_eq!(res.as_f64(), Some(100.0));
    }

    #[test]
    fn reports_sentinel_on_failure() {
        let plugin = MemoryUsagePlugin::with_source(FailingFootprint::new(5));
        let res = plugin.handle(&MethodCall::new("getMemoryUsage"));
        assert_eq!(res.as_f64(), Some(-1.0));
    }

    #[test]
    fn unknown_method_is_not_implemented() {
        let plugin = MemoryUsagePlugin::with_source(FixedFootprint::new(1));
        for name in ["unknownMethod", "getMemoryUsageMB", "", "GETMEMORYUSAGE"] {
            let res = plugin.handle(&MethodCall::new(name));
            assert_eq!(res, MethodResult::NotImplemented, "method={name:?}");
            assert!(res.as_f64().is_none());
        }
    }

    #[test]
    fn arguments_are_ignored() {
        let plugin = MemoryUsagePlugin::with_source(FixedFootprint::new(3 * 1_048_576));
        let call = MethodCall::new("getMemoryUsage").with_arguments(json!({ "unit": "GB" }));
        assert_eq!(plugin.handle(&call).as_f64(), Some(3.0));
    }

    #[test]
    fn channel_name() {
        assert_eq!(MemoryUsagePlugin::new().channel(), "com.example/memory_usage");
    }

    #[test]
    fn handler_is_object_safe() {
        let plugin: Box<dyn MethodCallHandler> =
            Box::new(MemoryUsagePlugin::with_source(FixedFootprint::new(0)));
        assert_eq!(
            plugin.handle(&MethodCall::new("getMemoryUsage")).as_f64(),
            Some(0.0)
        );
    }
}
