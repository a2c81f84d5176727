use std::path::PathBuf;

/// Default sysfs directory holding one `cpu<N>` entry per core
pub const DEFAULT_CPU_ROOT: &str = "/sys/devices/system/cpu";
/// Default procfs memory report
pub const DEFAULT_MEMINFO: &str = "/proc/meminfo";

/// Locations of the kernel interfaces the sampler reads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSources {
    pub cpu_root: PathBuf,
    pub meminfo: PathBuf,
}

impl Default for MetricSources {
    fn default() -> Self {
        Self {
            cpu_root: PathBuf::from(DEFAULT_CPU_ROOT),
            meminfo: PathBuf::from(DEFAULT_MEMINFO),
        }
    }
}

impl MetricSources {
    fn cpufreq_dir(&self, core: usize) -> PathBuf {
        self.cpu_root.join(format!("cpu{}", core)).join("cpufreq")
    }

    /// `cpu<N>/cpufreq/scaling_max_freq`
    pub fn max_freq_path(&self, core: usize) -> PathBuf {
        self.cpufreq_dir(core).join("scaling_max_freq")
    }

    /// `cpu<N>/cpufreq/scaling_cur_freq`
    pub fn cur_freq_path(&self, core: usize) -> PathBuf {
        self.cpufreq_dir(core).join("scaling_cur_freq")
    }
}
