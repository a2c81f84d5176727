use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};

use crate::system::cpu::{leading_number, BaselineClock, CpuFrequencySample};
use crate::system::error::{Result, SampleError};
use crate::system::memory::MemorySnapshot;
use crate::system::sources::MetricSources;

/// Reads CPU frequency and memory figures from sysfs/procfs text files.
///
/// Holds no state between calls besides the interface locations; every file
/// is opened and closed within a single read.
#[derive(Debug, Clone, Default)]
pub struct Collector {
    sources: MetricSources,
}

impl Collector {
    pub fn new(sources: MetricSources) -> Self {
        Self { sources }
    }

    /// Core 0 `scaling_max_freq`; a missing, unreadable or non-positive value
    /// is an error.
    pub fn read_baseline_clock(&self) -> Result<BaselineClock> {
        let path = self.sources.max_freq_path(0);
        let file = File::open(&path).map_err(|e| SampleError::io(&path, e))?;
        let line = read_first_line(file, &path)?;

        leading_number(&line)
            .and_then(BaselineClock::new)
            .ok_or_else(|| SampleError::parse(&path, line.trim()))
    }

    /// Current frequency of cores 0, 1, 2, ... until a core's file can't be
    /// opened.
    ///
    /// An open failure always ends enumeration, even when it is something
    /// other than "not found" (e.g. a permission error on a present core);
    /// those cases are logged but otherwise indistinguishable from the end
    /// of the core list.
    pub fn read_cpu_frequencies(&self) -> Result<CpuFrequencySample> {
        let mut cores = Vec::new();

        for index in 0usize.. {
            let path = self.sources.cur_freq_path(index);
            let file = match File::open(&path) {
                Ok(file) => file,
                Err(e) if e.kind() == io::ErrorKind::NotFound => break,
                Err(e) => {
                    warn!(
                        index,
                        path = %path.display(),
                        error = %e,
                        "cpu probe stopped on unexpected error"
                    );
                    break;
                }
            };

            let line = read_first_line(file, &path)?;
            let khz = leading_number(&line).ok_or_else(|| SampleError::parse(&path, line.trim()))?;
            cores.push(khz);
        }

        debug!(cores = cores.len(), "sampled cpu frequencies");
        Ok(CpuFrequencySample::new(cores))
    }

    pub fn read_memory_snapshot(&self) -> Result<MemorySnapshot> {
        let path = &self.sources.meminfo;
        let text = fs::read_to_string(path).map_err(|e| SampleError::io(path, e))?;
        MemorySnapshot::parse(&text, path)
    }
}

fn read_first_line(file: File, path: &Path) -> Result<String> {
    let mut line = String::new();
    BufReader::new(file)
        .read_line(&mut line)
        .map_err(|e| SampleError::io(path, e))?;
    Ok(line)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    fn empty_sources(dir: &Path) -> MetricSources {
        MetricSources {
            cpu_root: dir.join("cpu"),
            meminfo: dir.join("meminfo"),
        }
    }

    /// Lay out a fake `cpu<N>/cpufreq` tree plus a meminfo file.
    pub(crate) fn fake_sources(
        dir: &Path,
        baseline: &str,
        current: &[&str],
        meminfo: &str,
    ) -> MetricSources {
        let sources = empty_sources(dir);
        for (core, value) in current.iter().enumerate() {
            let cur = sources.cur_freq_path(core);
            fs::create_dir_all(cur.parent().unwrap()).unwrap();
            fs::write(cur, value).unwrap();
        }
        let max = sources.max_freq_path(0);
        fs::create_dir_all(max.parent().unwrap()).unwrap();
        fs::write(max, baseline).unwrap();
        fs::write(&sources.meminfo, meminfo).unwrap();
        sources
    }

    #[test]
    fn reads_baseline_from_core_zero() {
        let dir = TempDir::new().unwrap();
        let collector = Collector::new(fake_sources(dir.path(), "3000000\n", &[], ""));
        assert_eq!(collector.read_baseline_clock().unwrap().khz(), 3_000_000.0);
    }

    #[test]
    fn baseline_takes_leading_token_of_first_line() {
        let dir = TempDir::new().unwrap();
        let collector = Collector::new(fake_sources(dir.path(), "2400000 kHz\n999\n", &[], ""));
        assert_eq!(collector.read_baseline_clock().unwrap().khz(), 2_400_000.0);
    }

    #[test]
    fn missing_baseline_is_io_error() {
        let dir = TempDir::new().unwrap();
        let collector = Collector::new(empty_sources(dir.path()));
        assert!(matches!(collector.read_baseline_clock(), Err(SampleError::Io { .. })));
    }

    #[test]
    fn garbage_baseline_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let collector = Collector::new(fake_sources(dir.path(), "unknown\n", &[], ""));
        assert!(matches!(collector.read_baseline_clock(), Err(SampleError::Parse { .. })));

        let collector = Collector::new(fake_sources(dir.path(), "0\n", &[], ""));
        assert!(matches!(collector.read_baseline_clock(), Err(SampleError::Parse { .. })));
    }

    #[test]
    fn enumerates_cores_in_index_order() {
        let dir = TempDir::new().unwrap();
        let collector = Collector::new(fake_sources(
            dir.path(),
            "3000000\n",
            &["800000\n", "3200000\n", "1600000\n", "4500000\n"],
            "",
        ));
        let sample = collector.read_cpu_frequencies().unwrap();
        assert_eq!(sample.cores, vec![800_000.0, 3_200_000.0, 1_600_000.0, 4_500_000.0]);
    }

    #[test]
    fn gap_in_core_indices_ends_enumeration() {
        let dir = TempDir::new().unwrap();
        let sources = fake_sources(dir.path(), "3000000\n", &["1000\n", "2000\n"], "");
        let orphan = sources.cur_freq_path(3);
        fs::create_dir_all(orphan.parent().unwrap()).unwrap();
        fs::write(orphan, "4000\n").unwrap();

        let sample = Collector::new(sources).read_cpu_frequencies().unwrap();
        assert_eq!(sample.cores, vec![1000.0, 2000.0]);
    }

    #[test]
    fn no_cores_is_empty_not_error() {
        let dir = TempDir::new().unwrap();
        let collector = Collector::new(empty_sources(dir.path()));
        assert!(collector.read_cpu_frequencies().unwrap().cores.is_empty());
    }

    #[test]
    fn non_numeric_frequency_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let sources = fake_sources(dir.path(), "3000000\n", &["1000\n", "n/a\n"], "");
        let collector = Collector::new(sources);
        assert!(matches!(collector.read_cpu_frequencies(), Err(SampleError::Parse { .. })));
    }

    #[test]
    fn open_failure_other_than_not_found_ends_enumeration() {
        let dir = TempDir::new().unwrap();
        let sources = fake_sources(dir.path(), "3000000\n", &["1000\n", "2000\n"], "");
        // cpu2 is a plain file, so opening cpu2/cpufreq/... fails with ENOTDIR
        fs::write(sources.cpu_root.join("cpu2"), "").unwrap();

        let sample = Collector::new(sources).read_cpu_frequencies().unwrap();
        assert_eq!(sample.cores, vec![1000.0, 2000.0]);
    }

    #[test]
    fn open_failure_on_first_core_gives_empty_sample() {
        let dir = TempDir::new().unwrap();
        let sources = empty_sources(dir.path());
        fs::create_dir_all(&sources.cpu_root).unwrap();
        fs::write(sources.cpu_root.join("cpu0"), "").unwrap();

        let sample = Collector::new(sources).read_cpu_frequencies().unwrap();
        assert!(sample.cores.is_empty());
    }

    #[test]
    fn reads_memory_snapshot() {
        let dir = TempDir::new().unwrap();
        let collector = Collector::new(fake_sources(
            dir.path(),
            "3000000\n",
            &[],
            "MemTotal: 100 kB\nMemAvailable: 40 kB\nCached: 10 kB\n",
        ));
        let snapshot = collector.read_memory_snapshot().unwrap();
        assert_eq!(snapshot.mem_total, 100);
        assert_eq!(snapshot.mem_available, 40);
        assert_eq!(snapshot.cached, 10);
        assert_eq!(snapshot.swap_total, 0);
    }

    #[test]
    fn missing_meminfo_is_io_error() {
        let dir = TempDir::new().unwrap();
        let collector = Collector::new(empty_sources(dir.path()));
        assert!(matches!(collector.read_memory_snapshot(), Err(SampleError::Io { .. })));
    }
}
