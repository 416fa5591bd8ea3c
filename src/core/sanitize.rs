// src/core/sanitize.rs

/// Collapse runs of whitespace (incl. NBSP) to one space and trim both ends.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Last word of a display name: "Portland Trail Blazers" → "Blazers".
pub fn nickname(team_name: &str) -> &str {
    team_name.split_whitespace().last().unwrap_or("")
}
