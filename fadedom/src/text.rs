use unicode_width::UnicodeWidthStr;

pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Intrinsic size of a block of text: widest line by display columns,
/// one row per line.
pub fn measure(s: &str) -> (u16, u16) {
    if s.is_empty() {
        return (0, 1);
    }
    let mut width = 0usize;
    let mut lines = 0u16;
    for line in s.lines() {
        width = width.max(display_width(line));
        lines += 1;
    }
    (width.min(u16::MAX as usize) as u16, lines.max(1))
}
