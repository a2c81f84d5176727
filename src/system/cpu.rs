/// Rated maximum clock of core 0 in kHz, read once at startup.
///
/// Always strictly positive: it is the divisor of the CPU bar scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaselineClock(f64);

impl BaselineClock {
    pub fn new(khz: f64) -> Option<Self> {
        (khz.is_finite() && khz > 0.0).then_some(Self(khz))
    }

    pub fn khz(self) -> f64 {
        self.0
    }
}

/// Per-core current clock speeds in kHz, ordered by core index
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CpuFrequencySample {
    pub cores: Vec<f64>,
}

impl CpuFrequencySample {
    pub fn new(cores: Vec<f64>) -> Self {
        Self { cores }
    }
}

/// Parse the leading unsigned decimal token of `text` ("2400000", "3.2 GHz").
pub(crate) fn leading_number(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let end = text
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(text.len());
    text[..end].parse::<f64>().ok()
}
