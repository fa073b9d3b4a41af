//! Translation of gitignore-style glob patterns into anchored regular expressions.

/// Convert a glob pattern (already stripped of `!` and trailing `/`) to a regex string.
///
/// Patterns without a `/` match at any depth; a leading `/` anchors to the root.
/// `**` as a whole segment crosses directory boundaries.
pub fn pattern_to_regex(pattern: &str) -> String {
    let normalized = normalize_pattern(pattern);
    let parts: Vec<&str> = normalized.split('/').collect();
    let last = parts.len() - 1;

    let mut regex = String::from("^");
    let mut need_separator = false;

    for (i, part) in parts.iter().enumerate() {
        if *part == "**" {
            if need_separator {
                regex.push('/');
            }
            if i == last {
                regex.push_str(".*");
            } else {
                // zero or more whole directories
                regex.push_str("(?:.*/)?");
            }
            need_separator = false;
            continue;
        }

        if need_separator {
            regex.push('/');
        }
        regex.push_str(&convert_glob_part(part));
        need_separator = true;
    }

    regex.push('$');
    regex
}

fn normalize_pattern(pattern: &str) -> String {
    if !pattern.contains('/') {
        return format!("**/{}", pattern);
    }
    pattern.strip_prefix('/').unwrap_or(pattern).to_string()
}

/// Convert one path segment, character by character.
fn convert_glob_part(part: &str) -> String {
    let chars: Vec<char> = part.chars().collect();
    let mut out = String::new();
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '*' => {
                out.push_str("[^/]*");
                i += 1;
            }
            '?' => {
                out.push_str("[^/]");
                i += 1;
            }
            '[' => match character_class(&chars, i) {
                Some((class, next)) => {
                    out.push_str(&class);
                    i = next;
                }
                None => {
                    out.push_str(r"\[");
                    i += 1;
                }
            },
            '\\' if i + 1 < chars.len() => {
                out.push_str(&regex::escape(&chars[i + 1].to_string()));
                i += 2;
            }
            c => {
                out.push_str(&regex::escape(&c.to_string()));
                i += 1;
            }
        }
    }

    out
}

/// Parse `[...]` starting at `start`. Returns the regex class and the index after `]`,
/// or `None` when the class is never closed.
fn character_class(chars: &[char], start: usize) -> Option<(String, usize)> {
    let mut i = start + 1;
    let mut class = String::from("[");

    if i < chars.len() && (chars[i] == '!' || chars[i] == '^') {
        class.push('^');
        i += 1;
    }

    // a leading ']' is a literal member
    if i < chars.len() && chars[i] == ']' {
        class.push_str(r"\]");
        i += 1;
    }

    while i < chars.len() && chars[i] != ']' {
        match chars[i] {
            '[' | '&' | '~' | '\\' => {
                class.push('\\');
                class.push(chars[i]);
            }
            c => class.push(c),
        }
        i += 1;
    }

    if i >= chars.len() {
        return None;
    }

    class.push(']');
    Some((class, i + 1))
}
