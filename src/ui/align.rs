use unicode_width::UnicodeWidthStr;

/// Join `label` and `value` so that `value` ends at column `field_width`.
///
/// Values narrower than `min_value_width` are padded as if they were that
/// wide, and at least one space always separates the two.
pub fn right_align(label: &str, value: &str, field_width: usize, min_value_width: usize) -> String {
    let occupied = label.width() + value.width().max(min_value_width);
    let pad = field_width.saturating_sub(occupied).max(1);
    format!("{}{}{}", label, " ".repeat(pad), value)
}
