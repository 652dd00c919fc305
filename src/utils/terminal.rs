//! Terminal output sanitization
//!
//! Transcript files and service replies are untrusted text. Before they reach the
//! terminal, escape sequences (CSI such as `ESC[31m`, OSC such as window-title or
//! hyperlink sequences) and other control characters are removed so content cannot move
//! the cursor, recolor the screen or rewrite the terminal title.

const ESC: char = '\x1b';
const BEL: char = '\x07';

/// Remove escape sequences and control characters, keeping tabs and newlines
///
/// # Examples
///
/// ```
/// use askwhy::utils::sanitize_for_terminal;
///
/// assert_eq!(sanitize_for_terminal("\x1b[1mbold\x1b[0m"), "bold");
/// assert_eq!(sanitize_for_terminal("\x1b]0;pwned\x07title"), "title");
/// ```
pub fn sanitize_for_terminal(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == ESC {
            match chars.peek() {
                // CSI: parameters until a final byte in '@'..='~'
                Some('[') => {
                    chars.next();
                    for c in chars.by_ref() {
                        if ('@'..='~').contains(&c) {
                            break;
                        }
                    }
                }
                // OSC: until BEL or ST (ESC \)
                Some(']') => {
                    chars.next();
                    while let Some(c) = chars.next() {
                        if c == BEL {
                            break;
                        }
                        if c == ESC && chars.peek() == Some(&'\\') {
                            chars.next();
                            break;
                        }
                    }
                }
                // Two-character escape (ESC c, ESC 7, ...)
                Some(_) => {
                    chars.next();
                }
                None => {}
            }
            continue;
        }

        if ch.is_control() && ch != '\n' && ch != '\t' {
            continue;
        }
        out.push(ch);
    }

    out
}
