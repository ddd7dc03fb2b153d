use thiserror::Error;

/// Why a footprint reading could not be produced.
///
/// Callers of [`query_memory_usage_mb`](crate::memory::query_memory_usage_mb)
/// never see this type; every variant collapses to the `-1` sentinel there.
#[derive(Debug, Error)]
pub enum MemoryQueryError {
    #[error("task_info returned status {status}")]
    OsQueryFailed { status: i32 },

    #[error("process status unreadable: {0}")]
    Unreadable(#[from] std::io::Error),

    #[error("malformed process status: {0}")]
    Malformed(String),

    #[error("memory footprint is not available on this platform")]
    Unsupported,
}
