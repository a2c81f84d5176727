use std::path::Path;

use super::error::{Result, SampleError};

/// Memory and swap figures from the kernel memory report, all in kB.
///
/// Labels absent from the report leave their field at 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemorySnapshot {
    pub mem_total: u64,
    pub mem_free: u64,
    pub mem_available: u64,
    pub cached: u64,
    pub swap_total: u64,
    pub swap_free: u64,
    pub swap_cached: u64,
}

impl MemorySnapshot {
    /// Parse `Label:   value [unit]` lines. Unknown labels are skipped; a
    /// known label whose value is not numeric is an error naming `origin`.
    pub fn parse(text: &str, origin: &Path) -> Result<Self> {
        let mut snapshot = Self::default();

        for line in text.lines() {
            let Some((label, value)) = line.split_once(':') else {
                continue;
            };
            let Some(slot) = snapshot.slot_mut(label.trim()) else {
                continue;
            };
            *slot = leading_integer(value)
                .ok_or_else(|| SampleError::parse(origin, line.trim()))?;
        }

        Ok(snapshot)
    }

    fn slot_mut(&mut self, label: &str) -> Option<&mut u64> {
        match label {
            "MemTotal" => Some(&mut self.mem_total),
            "MemFree" => Some(&mut self.mem_free),
            "MemAvailable" => Some(&mut self.mem_available),
            "Cached" => Some(&mut self.cached),
            "SwapTotal" => Some(&mut self.swap_total),
            "SwapFree" => Some(&mut self.swap_free),
            "SwapCached" => Some(&mut self.swap_cached),
            _ => None,
        }
    }

    pub fn has_swap(&self) -> bool {
        self.swap_total > 0
    }
}

fn leading_integer(value: &str) -> Option<u64> {
    let value = value.trim_start();
    let end = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    value[..end].parse::<u64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const MEMINFO: &str = "\
MemTotal:       16318504 kB
MemFree:         1207872 kB
MemAvailable:    9876543 kB
Buffers:          531244 kB
Cached:          7654321 kB
SwapCached:        12345 kB
Active:          6412388 kB
SwapTotal:       8388604 kB
SwapFree:        8123456 kB
HugePages_Total:       0
";

    fn parse(text: &str) -> MemorySnapshot {
        MemorySnapshot::parse(text, Path::new("meminfo")).unwrap()
    }

    #[test]
    fn parses_all_seven_fields() {
        let snapshot = parse(MEMINFO);
        assert_eq!(
            snapshot,
            MemorySnapshot {
                mem_total: 16_318_504,
                mem_free: 1_207_872,
                mem_available: 9_876_543,
                cached: 7_654_321,
                swap_total: 8_388_604,
                swap_free: 8_123_456,
                swap_cached: 12_345,
            }
        );
    }

    #[test]
    fn line_order_does_not_matter() {
        let mut lines: Vec<&str> = MEMINFO.lines().collect();
        lines.reverse();
        assert_eq!(parse(&lines.join("\n")), parse(MEMINFO));
    }

    #[test]
    fn missing_label_defaults_to_zero() {
        let text: String = MEMINFO
            .lines()
            .filter(|l| !l.starts_with("MemAvailable"))
            .map(|l| format!("{}\n", l))
            .collect();
        let snapshot = parse(&text);
        assert_eq!(snapshot.mem_available, 0);
        assert_eq!(snapshot.mem_total, 16_318_504);
    }

    #[test]
    fn similar_labels_are_not_confused() {
        // "SwapCached" must not land in "Cached", "Buffers" is ignored
        let snapshot = parse("SwapCached: 7 kB\nBuffers: 99 kB\n");
        assert_eq!(snapshot.cached, 0);
        assert_eq!(snapshot.swap_cached, 7);
    }

    #[test]
    fn lines_without_colon_are_ignored() {
        let snapshot = parse("garbage line\n\nMemTotal: 42 kB\n");
        assert_eq!(snapshot.mem_total, 42);
    }

    #[test]
    fn non_numeric_known_label_is_parse_error() {
        let err = MemorySnapshot::parse("MemTotal: lots kB\n", Path::new("meminfo")).unwrap_err();
        assert!(matches!(err, SampleError::Parse { .. }));
    }

    #[test]
    fn non_numeric_unknown_label_is_ignored() {
        let snapshot = parse("Hugepagesize: n/a\nMemTotal: 1 kB\n");
        assert_eq!(snapshot.mem_total, 1);
    }

    #[test]
    fn swap_presence() {
        assert!(parse(MEMINFO).has_swap());
        assert!(!parse("MemTotal: 1 kB\nSwapTotal: 0 kB\n").has_swap());
    }
}
