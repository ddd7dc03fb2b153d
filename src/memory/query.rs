use crate::memory::MemoryQueryError;
use crate::utils::system::SystemFootprint;

pub const BYTES_PER_MEGABYTE: f64 = 1024.0 * 1024.0;

/// Returned in place of a reading when the footprint query fails.
pub const FAILURE_SENTINEL: f64 = -1.0;

/// Anything that can report the calling process's physical footprint in bytes.
pub trait FootprintSource {
    fn physical_footprint_bytes(&self) -> Result<u64, MemoryQueryError>;
}

impl<S: FootprintSource + ?Sized> FootprintSource for &S {
    #[inline]
    fn physical_footprint_bytes(&self) -> Result<u64, MemoryQueryError> {
        (**self).physical_footprint_bytes()
    }
}

impl<S: FootprintSource + ?Sized> FootprintSource for Box<S> {
    #[inline]
    fn physical_footprint_bytes(&self) -> Result<u64, MemoryQueryError> {
        (**self).physical_footprint_bytes()
    }
}

#[inline]
pub fn bytes_to_megabytes(bytes: u64) -> f64 {
    bytes as f64 / 1024.0 / 1024.0
}

/// Reads `source` once and converts the result to megabytes, or
/// [`FAILURE_SENTINEL`] if the read failed.
pub fn memory_usage_mb<S: FootprintSource>(source: &S) -> f64 {
    match source.physical_footprint_bytes() {
        Ok(bytes) => bytes_to_megabytes(bytes),
        Err(_) => FAILURE_SENTINEL,
    }
}

/// Physical memory footprint of the current process in megabytes, or `-1`.
#[inline]
pub fn query_memory_usage_mb() -> f64 {
    memory_usage_mb(&SystemFootprint)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FailingFootprint, FixedFootprint};
    use std::thread;

    #[test]
    fn hundred_mebibytes_is_one_hundred() {
        let src = FixedFootprint::new(104_857_600);
        assert_eq!(memory_usage_mb(&src), 100.0);
    }

    #[test]
    fn conversion_is_plain_division() {
        for bytes in [0u64, 1, 1023, 1_048_575, 1_048_577, 3_000_000_000, u64::MAX] {
            let got = memory_usage_mb(&FixedFootprint::new(bytes));
            assert_eq!(got, bytes as f64 / BYTES_PER_MEGABYTE, "bytes={bytes}");
            assert!(got >= 0.0);
        }
    }

    #[test]
    fn failure_is_exactly_the_sentinel() {
        assert_eq!(memory_usage_mb(&FailingFootprint::new(5)), -1.0);
        assert_eq!(memory_usage_mb(&FailingFootprint::new(0x10000003)), -1.0);
    }

    #[test]
    fn every_error_kind_maps_to_sentinel() {
        struct Erroring(fn() -> MemoryQueryError);
        impl FootprintSource for Erroring {
            fn physical_footprint_bytes(&self) -> Result<u64, MemoryQueryError> {
                Err((self.0)())
            }
        }

        let cases: [fn() -> MemoryQueryError; 4] = [
            || MemoryQueryError::OsQueryFailed { status: 4 },
            || std::io::Error::other("gone").into(),
            || MemoryQueryError::Malformed("x".into()),
            || MemoryQueryError::Unsupported,
        ];
        for make in cases {
            assert_eq!(memory_usage_mb(&Erroring(make)), FAILURE_SENTINEL);
        }
    }

    #[test]
    fn boxed_and_borrowed_sources_delegate() {
        let boxed: Box<dyn FootprintSource> = Box::new(FixedFootprint::new(2 * 1_048_576));
        assert_eq!(memory_usage_mb(&boxed), 2.0);
        let fixed = FixedFootprint::new(1_048_576);
        assert_eq!(memory_usage_mb(&&fixed), 1.0);
    }

    #[cfg(any(target_os = "linux", target_os = "macos", target_os = "ios"))]
    #[test]
    fn live_query_is_positive_and_finite() {
        let mb = query_memory_usage_mb();
        assert!(mb.is_finite() && mb > 0.0, "invalid footprint: {mb}");
    }

    #[test]
    fn concurrent_queries_do_not_interfere() {
        let handles: Vec<_> = (0..8)
            .map(|_| thread::spawn(|| (0..100).map(|_| query_memory_usage_mb()).collect::<Vec<_>>()))
            .collect();

        for h in handles {
            let readings = h.join().unwrap();
            assert_eq!(readings.len(), 100);
            assert!(readings.iter().all(|mb| mb.is_finite()));
        }
    }
}
