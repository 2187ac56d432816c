/// Canonical form → compact JSON array of objects.
///
/// Line 1 always supplies the keys; the header verdict is informational
/// and deliberately ignored here. Every value stays a string, even for
/// columns the analyzer called integer or float. Values pass through
/// unescaped — a field containing `"` or `\` produces malformed JSON, a
/// documented risk of the unquoted-field model.
#[must_use]
pub fn render(canonical: &str) -> String {
    let mut lines = canonical.lines();
    let Some(header) = lines.next() else {
        return "[]".to_string();
    };
    let keys: Vec<&str> = header.split(',').collect();

    let mut objects = Vec::new();
    for line in lines {
        // Ragged rows skew silently: zip stops at the shorter side.
        let pairs: Vec<String> = keys
            .iter()
            .zip(line.split(','))
            .map(|(key, value)| format!("\"{key}\":\"{value}\""))
            .collect();
        objects.push(format!("{{{}}}", pairs.join(",")));
    }

    format!("[{}]", objects.join(","))
}
