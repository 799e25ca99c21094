//! Process memory statistics read from the operating system

/// Memory usage of the current process in KiB
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemoryStats {
    /// Resident set size at the time of reading
    pub resident_kib: u64,
    /// Peak resident set size over the process lifetime
    pub peak_resident_kib: u64,
    /// Virtual memory reserved by the process
    pub virtual_kib: u64,
}

impl MemoryStats {
    /// Read statistics for the running process
    ///
    /// Returns `None` on platforms without `/proc/self/status`.
    pub fn current() -> Option<Self> {
        let status = std::fs::read_to_string("/proc/self/status").ok()?;
        Self::parse_status(&status)
    }

    /// Parse the `VmRSS`, `VmHWM` and `VmSize` lines of a `/proc/<pid>/status` file
    pub fn parse_status(status: &str) -> Option<Self> {
        let field = |name: &str| {
            status.lines().find_map(|line| {
                let value = line.strip_prefix(name)?.strip_prefix(':')?;
                value.split_whitespace().next()?.parse::<u64>().ok()
            })
        };

        Some(Self {
            resident_kib: field("VmRSS")?,
            peak_resident_kib: field("VmHWM")?,
            virtual_kib: field("VmSize")?,
        })
    }
}
