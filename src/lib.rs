pub mod bridge;
pub mod memory;
pub mod sampling;
pub mod tasks;
pub mod ui;
pub mod utils;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use bridge::{CHANNEL_NAME, MemoryUsagePlugin, MethodCall, MethodCallHandler, MethodResult};
pub use memory::query_memory_usage_mb;
