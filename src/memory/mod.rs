mod error;
mod query;

pub use error::MemoryQueryError;
pub use query::{
    BYTES_PER_MEGABYTE, FAILURE_SENTINEL, FootprintSource, bytes_to_megabytes, memory_usage_mb,
    query_memory_usage_mb,
};
