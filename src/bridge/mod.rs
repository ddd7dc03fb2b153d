mod method_call;
mod method_result;
mod plugin;
mod request;

pub use method_call::MethodCall;
pub use method_result::MethodResult;
pub use plugin::{CHANNEL_NAME, MemoryUsagePlugin, MethodCallHandler};
pub use request::{Request, UnknownMethod};
