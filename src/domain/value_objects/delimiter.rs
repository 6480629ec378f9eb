//! Raw string literal delimiters
//!
//! A C++ raw string `R"d(...)d"` ends at the first `)d"`, so the delimiter
//! `d` must be picked such that `)d"` never occurs inside the payload.
//!
//! Candidates are tried in a fixed order: `<!>`, `<!1>`, `<!2>`, ... The
//! first candidate whose closing sequence is absent wins, which makes the
//! choice a pure function of the payload.

use std::fmt;

/// Delimiter used whenever the payload allows it
pub const DEFAULT_DELIMITER: &str = "<!>";

/// Number of candidates tried before giving up (default included)
pub const MAX_DELIMITER_CANDIDATES: usize = 32;

/// C++ limit on raw string delimiter length
const MAX_DELIMITER_LEN: usize = 16;

/// A raw string delimiter token
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Delimiter(String);

impl Delimiter {
    fn candidate(index: usize) -> Self {
        if index == 0 {
            Self(DEFAULT_DELIMITER.to_string())
        } else {
            Self(format!("<!{}>", index))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Opening sequence: `R"<d>(`
    pub fn open(&self) -> String {
        format!("R\"{}(", self.0)
    }

    /// Closing sequence: `)<d>"`
    pub fn close(&self) -> String {
        format!("){}\"", self.0)
    }

    /// Whether the closing sequence occurs in `payload`
    pub fn collides_with(&self, payload: &str) -> bool {
        payload.contains(&self.close())
    }

    /// Whether the token is legal in a C++ raw string prefix
    pub fn is_valid_token(token: &str) -> bool {
        token.len() <= MAX_DELIMITER_LEN
            && token
                .chars()
                .all(|c| c.is_ascii_graphic() && !matches!(c, '(' | ')' | '\\'))
    }

    /// Wrap `payload` into a complete raw string literal
    pub fn wrap(&self, payload: &str) -> String {
        let open = self.open();
        let close = self.close();
        let mut out = String::with_capacity(open.len() + payload.len() + close.len());
        out.push_str(&open);
        out.push_str(payload);
        out.push_str(&close);
        out
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of delimiter selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DelimiterChoice {
    /// First candidate whose closing sequence is absent from the payload
    Chosen(Delimiter),
    /// Every candidate collided
    Exhausted { attempts: usize },
}

/// The fixed candidate sequence, default first
pub fn delimiter_candidates() -> impl Iterator<Item = Delimiter> {
    (0..MAX_DELIMITER_CANDIDATES).map(Delimiter::candidate)
}

/// Pick a delimiter for `payload` from the full candidate sequence
pub fn choose_delimiter(payload: &str) -> DelimiterChoice {
    choose_delimiter_within(payload, MAX_DELIMITER_CANDIDATES)
}

/// Pick a delimiter for `payload`, trying at most `max_candidates`
pub fn choose_delimiter_within(payload: &str, max_candidates: usize) -> DelimiterChoice {
    let limit = max_candidates.min(MAX_DELIMITER_CANDIDATES);
    // Fast path: no `)` means nothing can collide.
    if !payload.contains(')') && limit > 0 {
        return DelimiterChoice::Chosen(Delimiter::candidate(0));
    }

    delimiter_candidates()
        .take(limit)
        .find(|d| !d.collides_with(payload))
        .map(DelimiterChoice::Chosen)
        .unwrap_or(DelimiterChoice::Exhausted { attempts: limit })
}
