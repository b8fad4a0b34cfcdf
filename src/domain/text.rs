use thousands::Separable;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Hard-wrap `s` at `width` display columns. Existing line breaks are kept.
pub fn wrap_text(s: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let mut out = String::with_capacity(s.len() + s.len() / width);
    let mut line_width = 0;
    for c in s.chars() {
        if c == '\n' {
            out.push(c);
            line_width = 0;
            continue;
        }
        let w = c.width().unwrap_or(0);
        if line_width > 0 && line_width + w > width {
            out.push('\n');
            line_width = 0;
        }
        out.push(c);
        line_width += w;
    }
    out
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

/// Cut `s` to at most `max_width` display columns, ending with `…` when shortened.
pub fn ellipsize(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Whole-unit price with thousands separators, e.g. `$1,349`.
pub fn format_price(price: f64) -> String {
    let whole = price.round() as i64;
    format!("${}", whole.separate_with_commas())
}
