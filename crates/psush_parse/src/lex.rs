use crate::{PIPE, REDIRECT_INPUT, REDIRECT_OUTPUT};

/// A classified word within a pipeline segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// "<"
    RedirectInput,
    /// ">"
    RedirectOutput,
    /// Any other word, with surrounding quotes already stripped.
    Word(&'a str),
}

impl<'a> From<&'a str> for Token<'a> {
    fn from(word: &'a str) -> Self {
        match word {
            REDIRECT_INPUT => Token::RedirectInput,
            REDIRECT_OUTPUT => Token::RedirectOutput,
            word => Token::Word(strip_quotes(word)),
        }
    }
}

/// Splits a line into pipeline segments.
///
/// Always yields at least one segment. A line consisting of a single pipe
/// yields two empty segments.
pub fn segments(line: &str) -> impl Iterator<Item = &str> {
    line.split(PIPE)
}

/// Splits a segment into whitespace-delimited words.
pub fn words(segment: &str) -> impl Iterator<Item = &str> {
    segment.split_whitespace()
}

/// Drops one leading and one trailing single quote from a word.
///
/// The two ends are handled independently, so a quote does not need a
/// matching partner. A word consisting of a lone quote becomes empty.
pub fn strip_quotes(word: &str) -> &str {
    let word = word.strip_prefix('\'').unwrap_or(word);
    word.strip_suffix('\'').unwrap_or(word)
}
