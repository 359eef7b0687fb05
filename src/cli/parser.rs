//! Assistant input parsing

/// Split an input line into a lower-cased command and its arguments
///
/// Returns `None` for blank input.
pub fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut parts = line.trim().splitn(2, char::is_whitespace);
    let command = parts.next().filter(|c| !c.is_empty())?.to_lowercase();
    let args = parts
        .next()
        .map(|rest| rest.split_whitespace().map(String::from).collect())
        .unwrap_or_default();

    Some((command, args))
}

/// Everything after the command word, untouched
///
/// Used by commands whose argument may contain spaces, such as `import`.
pub fn raw_argument(line: &str) -> Option<&str> {
    line.trim()
        .split_once(char::is_whitespace)
        .map(|(_, rest)| rest.trim())
        .filter(|rest| !rest.is_empty())
}
