use crate::memory::{FootprintSource, MemoryQueryError};
use std::cell::Cell;

/// Replays a fixed script of readings, `None` meaning a failed query.
/// Repeats the last entry once the script runs out.
pub struct ScriptedFootprint {
    script: Vec<Option<u64>>,
    idx: Cell<usize>,
}

impl ScriptedFootprint {
    pub fn new(script: Vec<Option<u64>>) -> Self {
        Self {
            script,
            idx: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.idx.get()
    }
}

impl FootprintSource for ScriptedFootprint {
    fn physical_footprint_bytes(&self) -> Result<u64, MemoryQueryError> {
        let i = self.idx.get();
        self.idx.set(i + 1);

        let entry = self
            .script
            .get(i)
            .or_else(|| self.script.last())
            .copied()
            .flatten();

        entry.ok_or(MemoryQueryError::OsQueryFailed { status: 5 })
    }
}
