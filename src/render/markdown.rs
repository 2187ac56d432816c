use std::fmt::Write;

/// Canonical form → Markdown table.
///
/// Line 1 is wrapped in pipes as the header; a separator row mirrors the
/// header's comma structure with every other character turned into a dash;
/// every later line is wrapped in pipes unchanged. Cells are not re-split,
/// so ragged rows stay ragged, and no alignment markers are emitted.
#[must_use]
pub fn render(canonical: &str) -> String {
    let mut lines = canonical.lines();
    let Some(header) = lines.next() else {
        return String::new();
    };

    let dashes: String = header
        .chars()
        .map(|c| if c == ',' { ',' } else { '-' })
        .collect();

    let mut out = String::with_capacity(canonical.len() + header.len() + 16);
    let _ = writeln!(out, "|{header}|");
    let _ = writeln!(out, "|{dashes}|");
    for line in lines {
        let _ = writeln!(out, "|{line}|");
    }
    out
}
