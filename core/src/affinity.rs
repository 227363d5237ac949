//! Best-effort CPU pinning for worker threads

/// Number of execution cores the benchmark alternates across
pub const EXECUTION_CORES: usize = 2;

/// Pin the calling thread to `core`, returning whether the kernel accepted
/// the mask.
///
/// Pinning is best effort: on platforms without an affinity syscall (or
/// when the scheduler rejects the mask) the thread simply keeps running
/// wherever the OS placed it, and the benchmark still produces correct
/// results; only the measured parallel speedup loses meaning.
#[cfg(target_os = "linux")]
pub fn pin_current_thread(core: usize) -> bool {
    // SAFETY: cpu_set_t is plain data; CPU_SET only writes into the zeroed
    // mask, and sched_setaffinity reads it for the calling thread (tid 0).
    unsafe {
        let mut set: libc::cpu_set_t = std::mem::zeroed();
        libc::CPU_SET(core, &mut set);
        libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set) == 0
    }
}

/// Pin the calling thread to `core`, returning whether the kernel accepted
/// the mask. Always `false` on platforms without an affinity syscall.
#[cfg(not(target_os = "linux"))]
pub fn pin_current_thread(_core: usize) -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(target_os = "linux")]
    #[test]
    fn test_pin_to_first_core() {
        assert!(pin_current_thread(0));
    }

    #[test]
    fn test_two_execution_cores() {
        assert_eq!(EXECUTION_CORES, 2);
    }
}
