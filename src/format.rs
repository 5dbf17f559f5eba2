//! Positional message-template substitution.
//!
//! `{0}`, `{1}`, ... are replaced by the matching argument rendered with
//! `Display`. `{{` and `}}` escape literal braces. Substitution is
//! locale-invariant and lenient: a placeholder with no matching argument, or
//! a malformed one, is emitted verbatim. A diagnostic path never fails.

use std::fmt;

/// Substitute positional arguments into `template`.
pub(crate) fn positional(template: &str, args: &[&dyn fmt::Display]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' => {
                if chars.peek() == Some(&'{') {
                    chars.next();
                    out.push('{');
                    continue;
                }
                let mut digits = String::new();
                let mut closed = false;
                while let Some(&next) = chars.peek() {
                    if next.is_ascii_digit() {
                        digits.push(next);
                        chars.next();
                    } else if next == '}' {
                        chars.next();
                        closed = true;
                        break;
                    } else {
                        break;
                    }
                }
                if closed && !digits.is_empty() {
                    match digits.parse::<usize>().ok().and_then(|index| args.get(index)) {
                        Some(arg) => out.push_str(&arg.to_string()),
                        None => {
                            out.push('{');
                            out.push_str(&digits);
                            out.push('}');
                        }
                    }
                } else {
                    // Malformed placeholder: emit what was consumed, as-is.
                    out.push('{');
                    out.push_str(&digits);
                    if closed {
                        out.push('}');
                    }
                }
            }
            '}' => {
                if chars.peek() == Some(&'}') {
                    chars.next();
                }
                out.push('}');
            }
            _ => out.push(c),
        }
    }

    out
}
