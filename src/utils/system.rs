use crate::memory::{FootprintSource, MemoryQueryError};

/// Footprint source backed by the host operating system.
///
/// On Apple platforms this is `phys_footprint` from `task_info(TASK_VM_INFO)`.
/// On Linux it is the process's `VmRSS` line from `/proc/self/status`.
/// Everywhere else the query reports [`MemoryQueryError::Unsupported`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemFootprint;

impl FootprintSource for SystemFootprint {
    #[inline]
    fn physical_footprint_bytes(&self) -> Result<u64, MemoryQueryError> {
        current_footprint_bytes()
    }
}

#[inline]
pub fn current_footprint_bytes() -> Result<u64, MemoryQueryError> {
    #[cfg(any(target_os = "macos", target_os = "ios"))]
    {
        footprint_for_apple()
    }

    #[cfg(target_os = "linux")]
    {
        footprint_for_linux()
    }

    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "ios")))]
    {
        Err(MemoryQueryError::Unsupported)
    }
}

#[cfg(target_os = "linux")]
fn footprint_for_linux() -> Result<u64, MemoryQueryError> {
    use std::fs;
    let status = fs::read_to_string("/proc/self/status")?;
    parse_linux_status_vm_rss_bytes(&status)
}

#[cfg(any(target_os = "linux", test))]
fn parse_linux_status_vm_rss_bytes(status: &str) -> Result<u64, MemoryQueryError> {
    for line in status.lines() {
        let Some(rest) = line.strip_prefix("VmRSS:") else {
            continue;
        };
        return rest
            .split_whitespace()
            .find_map(|t| t.parse::<u64>().ok())
            .map(|kb| kb.saturating_mul(1024)) // kB -> bytes
            .ok_or_else(|| MemoryQueryError::Malformed(format!("no value in {line:?}")));
    }
    Err(MemoryQueryError::Malformed("VmRSS line missing".into()))
}

#[cfg(any(target_os = "macos", target_os = "ios"))]
fn footprint_for_apple() -> Result<u64, MemoryQueryError> {
    use libc::c_int;
    use mach2::kern_return::KERN_SUCCESS;
    use mach2::message::mach_msg_type_number_t;
    use mach2::task::task_info;
    use mach2::task_info::task_flavor_t;
    use mach2::traps::mach_task_self;
    use std::mem::{size_of, zeroed};

    // Revision 1 of `task_vm_info`, which ends at `phys_footprint`.
    #[repr(C)]
    #[allow(non_camel_case_types, dead_code)]
    struct task_vm_info {
        virtual_size: u64,
        region_count: c_int,
        page_size: c_int,
        resident_size: u64,
        resident_size_peak: u64,
        device: u64,
        device_peak: u64,
        internal: u64,
        internal_peak: u64,
        external: u64,
        external_peak: u64,
        reusable: u64,
        reusable_peak: u64,
        purgeable_volatile_pmap: u64,
        purgeable_volatile_resident: u64,
        purgeable_volatile_virtual: u64,
        compressed: u64,
        compressed_peak: u64,
        compressed_lifetime: u64,
        phys_footprint: u64,
    }

    const _: () = assert!(size_of::<task_vm_info>() == 152);

    const TASK_VM_INFO: task_flavor_t = 22;
    const TASK_VM_INFO_REV1_COUNT: mach_msg_type_number_t =
        (size_of::<task_vm_info>() / size_of::<u32>()) as _;

    // SAFETY: `info` is a plain-old-data record that lives for the whole call and
    // `count` is its size in 32-bit words, which bounds what the kernel writes.
    let (kr, info) = unsafe {
        let mut info: task_vm_info = zeroed();
        let mut count = TASK_VM_INFO_REV1_COUNT;
        let kr = task_info(
            mach_task_self(),
            TASK_VM_INFO,
            &mut info as *mut task_vm_info as *mut c_int,
            &mut count,
        );
        (kr, info)
    };

    if kr == KERN_SUCCESS {
        Ok(info.phys_footprint)
    } else {
        Err(MemoryQueryError::OsQueryFailed { status: kr })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod status_parsing {
        use super::super::parse_linux_status_vm_rss_bytes;
        use crate::memory::MemoryQueryError;

        #[test]
        fn parses_basic_vmrss_line() {
            let s = "Name:\tproc\nVmSize:\t  999 kB\nVmRSS:\t  102400 kB\nThreads: 4\n";
            assert_eq!(parse_linux_status_vm_rss_bytes(s).unwrap(), 104_857_600);
        }

        #[test]
        fn ignores_non_numeric_tokens_and_picks_number() {
            let s = "VmRSS:\t  abc  789  kB";
            assert_eq!(parse_linux_status_vm_rss_bytes(s).unwrap(), 789 * 1024);
        }

        #[test]
        fn errors_if_missing_vmrss() {
            let s = "Name:\tfoo\nVmSize:\t 1024 kB\n";
            assert!(matches!(
                parse_linux_status_vm_rss_bytes(s),
                Err(MemoryQueryError::Malformed(_))
            ));
        }

        #[test]
        fn errors_if_number_missing() {
            let s = "VmRSS:\t kB";
            assert!(matches!(
                parse_linux_status_vm_rss_bytes(s),
                Err(MemoryQueryError::Malformed(_))
            ));
        }
    }

    #[cfg(any(target_os = "linux", target_os = "macos", target_os = "ios"))]
    #[test]
    fn smoke_current_footprint_positive() {
        let bytes = SystemFootprint.physical_footprint_bytes().unwrap();
        assert!(bytes > 0, "a running process has a non-zero footprint");
    }

    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "ios")))]
    #[test]
    fn unsupported_platform_reports_error() {
        assert!(matches!(
            SystemFootprint.physical_footprint_bytes(),
            Err(MemoryQueryError::Unsupported)
        ));
    }
}
