use crate::memory::{FootprintSource, MemoryQueryError};

/// Always reports the same footprint.
#[derive(Debug, Clone, Copy)]
pub struct FixedFootprint {
    pub bytes: u64,
}

impl FixedFootprint {
    pub fn new(bytes: u64) -> Self {
        Self { bytes }
    }
}

impl FootprintSource for FixedFootprint {
    fn physical_footprint_bytes(&self) -> Result<u64, MemoryQueryError> {
        Ok(self.bytes)
    }
}
