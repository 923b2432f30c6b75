use unicode_width::UnicodeWidthStr;

/// Hard-wraps `s` so that no line is wider than `width` columns.
/// Existing line breaks are kept.
pub fn wrap_text(s: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let mut wrapped = String::with_capacity(s.len());
    let mut line_width = 0;
    for c in s.chars() {
        if c == '\n' {
            wrapped.push(c);
            line_width = 0;
            continue;
        }

        let char_width = c.to_string().width();
        if line_width + char_width > width {
            wrapped.push('\n');
            line_width = 0;
        }
        wrapped.push(c);
        line_width += char_width;
    }
    wrapped
}

pub fn truncate_text(s: &str, max_height: usize) -> String {
    if max_height == 0 {
        return String::new();
    }

    let lines: Vec<&str> = s.lines().collect();
    if lines.len() > max_height {
        if max_height == 1 {
            String::from("...")
        } else {
            format!("{}\n...", lines[..max_height - 1].join("\n"))
        }
    } else {
        s.to_string()
    }
}

/// Collapses a multi-line message into a single status line.
pub fn single_line(s: &str) -> String {
    s.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
