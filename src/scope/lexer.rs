//! Line masking for brace-counting over C-family source.
//!
//! A masked line is a copy of the raw line where string literals, char
//! literals and comments (delimiters included) are replaced with spaces.
//! Every masked char becomes as many spaces as its UTF-8 width, so byte
//! offsets in the masked text are valid offsets into the raw line.

/// Lexical context carried from one line to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexState {
    #[default]
    Code,
    /// `"..."`, including interpolated `$"..."`.
    RegularString,
    /// `@"..."`, `$@"..."` or `@$"..."`; may span lines.
    VerbatimString,
    /// `"""..."""`; closed by a run of at least `quotes` quotes.
    RawString { quotes: usize },
    CharLiteral,
    LineComment,
    /// `/* ... */`; may span lines.
    BlockComment,
}

impl LexState {
    /// State at the start of the next line.
    ///
    /// Line comments end at the newline. Regular strings and char literals
    /// cannot contain a newline, so an unterminated one is dropped.
    fn at_line_end(self) -> Self {
        match self {
            LexState::LineComment | LexState::RegularString | LexState::CharLiteral => {
                LexState::Code
            }
            other => other,
        }
    }
}

/// Masks consecutive lines of one file, carrying [`LexState`] between them.
#[derive(Debug, Clone, Default)]
pub struct Lexer {
    state: LexState,
}

impl Lexer {
    pub fn new() -> Self {
        Self::default()
    }

    /// State the next call to [`Lexer::mask`] starts in.
    pub fn state(&self) -> LexState {
        self.state
    }

    /// Mask one line and advance the carried state.
    pub fn mask(&mut self, line: &str) -> String {
        let (masked, end) = mask_line(line, self.state);
        self.state = end.at_line_end();
        masked
    }
}

/// Mask `line` starting in `state`; returns the masked text and the state
/// at the last char (before end-of-line handling).
pub fn mask_line(line: &str, state: LexState) -> (String, LexState) {
    let chars: Vec<char> = line.chars().collect();
    let mut out = String::with_capacity(line.len());
    let mut state = state;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let next = chars.get(i + 1).copied();

        match state {
            LexState::Code => match c {
                '/' if next == Some('/') => {
                    state = LexState::LineComment;
                    blank(&mut out, &chars[i..i + 2]);
                    i += 2;
                }
                '/' if next == Some('*') => {
                    state = LexState::BlockComment;
                    blank(&mut out, &chars[i..i + 2]);
                    i += 2;
                }
                '"' => {
                    let run = quote_run(&chars, i);
                    if run >= 3 {
                        state = LexState::RawString { quotes: run };
                        blank(&mut out, &chars[i..i + run]);
                        i += run;
                    } else {
                        state = if has_verbatim_prefix(&chars, i) {
                            LexState::VerbatimString
                        } else {
                            LexState::RegularString
                        };
                        blank(&mut out, &chars[i..i + 1]);
                        i += 1;
                    }
                }
                '\'' => {
                    state = LexState::CharLiteral;
                    blank(&mut out, &chars[i..i + 1]);
                    i += 1;
                }
                _ => {
                    out.push(c);
                    i += 1;
                }
            },
            LexState::RegularString | LexState::CharLiteral => {
                let closer = if state == LexState::CharLiteral { '\'' } else { '"' };
                if c == '\\' {
                    let end = (i + 2).min(chars.len());
                    blank(&mut out, &chars[i..end]);
                    i = end;
                } else {
                    if c == closer {
                        state = LexState::Code;
                    }
                    blank(&mut out, &chars[i..i + 1]);
                    i += 1;
                }
            }
            LexState::VerbatimString => {
                if c == '"' && next == Some('"') {
                    // Escaped quote
                    blank(&mut out, &chars[i..i + 2]);
                    i += 2;
                } else {
                    if c == '"' {
                        state = LexState::Code;
                    }
                    blank(&mut out, &chars[i..i + 1]);
                    i += 1;
                }
            }
            LexState::RawString { quotes } => {
                let run = if c == '"' { quote_run(&chars, i) } else { 1 };
                if c == '"' && run >= quotes {
                    state = LexState::Code;
                }
                blank(&mut out, &chars[i..i + run]);
                i += run;
            }
            LexState::LineComment => {
                blank(&mut out, &chars[i..]);
                i = chars.len();
            }
            LexState::BlockComment => {
                if c == '*' && next == Some('/') {
                    state = LexState::Code;
                    blank(&mut out, &chars[i..i + 2]);
                    i += 2;
                } else {
                    blank(&mut out, &chars[i..i + 1]);
                    i += 1;
                }
            }
        }
    }

    (out, state)
}

/// A brace that changes nesting depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Brace {
    Open,
    Close,
}

/// The braces of a masked line, left to right.
pub fn braces(masked: &str) -> impl Iterator<Item = Brace> + '_ {
    masked.chars().filter_map(|c| match c {
        '{' => Some(Brace::Open),
        '}' => Some(Brace::Close),
        _ => None,
    })
}

fn blank(out: &mut String, chars: &[char]) {
    for c in chars {
        out.extend(std::iter::repeat_n(' ', c.len_utf8()));
    }
}

fn quote_run(chars: &[char], start: usize) -> usize {
    chars[start..].iter().take_while(|&&c| c == '"').count()
}

/// `@"`, `$@"` or `@$"` before the quote at `quote`.
fn has_verbatim_prefix(chars: &[char], quote: usize) -> bool {
    let before = |back: usize| quote.checked_sub(back).map(|i| chars[i]);
    match before(1) {
        Some('@') => true,
        Some('$') => before(2) == Some('@'),
        _ => false,
    }
}
