mod error;
mod lex;
mod parse;

pub use error::ParseError;
pub use lex::{segments, strip_quotes, words, Token};
pub use parse::parse;

/// Separates pipeline segments.
pub const PIPE: char = '|';

/// Reserved word that reads a command's input from the following word.
pub const REDIRECT_INPUT: &str = "<";

/// Reserved word that writes a command's output to the following word.
pub const REDIRECT_OUTPUT: &str = ">";
