/// Splits raw text into trimmed, non-empty lines, keeping their order.
pub fn normalize_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}
