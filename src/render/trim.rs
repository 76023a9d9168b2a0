/// Is this line empty or whitespace?
fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Strip leading and trailing blank lines. Blank lines between other lines are kept.
pub fn trim_blank_lines<S: AsRef<str>>(lines: &[S]) -> &[S] {
    let start = lines
        .iter()
        .position(|line| !is_blank(line.as_ref()))
        .unwrap_or(lines.len());
    let end = lines
        .iter()
        .rposition(|line| !is_blank(line.as_ref()))
        .map_or(start, |last| last + 1);
    &lines[start..end]
}
