const FENCE: &str = "```";

/// Trims the response and, when it opens with a markdown fence, drops the
/// first and last lines. Assumes the closing fence sits on the last line.
pub fn strip_fences(response: &str) -> String {
    let trimmed = response.trim();
    if !is_fenced(trimmed) {
        return trimmed.to_string();
    }

    let lines: Vec<&str> = trimmed.split('\n').collect();
    if lines.len() <= 2 {
        return String::new();
    }
    lines[1..lines.len() - 1].join("\n")
}

pub fn is_fenced(text: &str) -> bool {
    text.trim_start().starts_with(FENCE)
}
