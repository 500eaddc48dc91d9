#[derive(Clone, Copy)]
enum LexState {
    Code,
    Str { quote: char, escaped: bool },
    LineComment,
    BlockComment,
}

/// Replace `//` and `/* */` comments with whitespace.
///
/// Byte offsets and line breaks are preserved, so positions in the returned
/// text line up with the original. Comment markers inside string literals are
/// left alone.
pub fn blank_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut state = LexState::Code;

    while let Some(ch) = chars.next() {
        state = match state {
            LexState::Code => match ch {
                '"' | '\'' => {
                    out.push(ch);
                    LexState::Str {
                        quote: ch,
                        escaped: false,
                    }
                }
                '/' if chars.peek() == Some(&'/') => {
                    chars.next();
                    out.push_str("  ");
                    LexState::LineComment
                }
                '/' if chars.peek() == Some(&'*') => {
                    chars.next();
                    out.push_str("  ");
                    LexState::BlockComment
                }
                _ => {
                    out.push(ch);
                    LexState::Code
                }
            },
            LexState::Str { quote, escaped } => {
                out.push(ch);
                if escaped {
                    LexState::Str {
                        quote,
                        escaped: false,
                    }
                } else if ch == '\\' {
                    LexState::Str {
                        quote,
                        escaped: true,
                    }
                } else if ch == quote || ch == '\n' {
                    // unterminated literals do not swallow the rest of the file
                    LexState::Code
                } else {
                    LexState::Str {
                        quote,
                        escaped: false,
                    }
                }
            }
            LexState::LineComment => {
                blank(&mut out, ch);
                if ch == '\n' {
                    LexState::Code
                } else {
                    LexState::LineComment
                }
            }
            LexState::BlockComment => {
                if ch == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    out.push_str("  ");
                    LexState::Code
                } else {
                    blank(&mut out, ch);
                    LexState::BlockComment
                }
            }
        };
    }
    out
}

fn blank(out: &mut String, ch: char) {
    if ch == '\n' {
        out.push('\n');
    } else {
        out.extend(std::iter::repeat_n(' ', ch.len_utf8()));
    }
}
