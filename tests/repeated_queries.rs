// Must stay the only test in this binary: it counts the process's open descriptors.
#![cfg(target_os = "linux")]

use footprint::query_memory_usage_mb;

#[test]
fn repeated_queries_do_not_leak_descriptors() {
    fn open_fds() -> usize {
        std::fs::read_dir("/proc/self/fd").unwrap().count()
    }

    // warm up anything lazily opened on first use
    query_memory_usage_mb();
    let before = open_fds();
    for _ in 0..2_000 {
        assert!(query_memory_usage_mb() > 0.0);
    }
    assert_eq!(open_fds(), before);
}
