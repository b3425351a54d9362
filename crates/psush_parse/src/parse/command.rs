use psush_ast::Command;

use crate::{
    lex::{strip_quotes, words, Token},
    ParseError, REDIRECT_INPUT, REDIRECT_OUTPUT,
};

use super::ParseResult;

/// Parses a single pipeline segment.
///
/// The first word is always the command name. Redirection operators are only
/// recognized among the remaining words, and each consumes the next word as a
/// file name regardless of its contents.
pub fn parse_command(segment: &str, position: usize) -> ParseResult<Command> {
    let mut command = Command::new(segment, position);
    let mut words = words(segment);

    let Some(name) = words.next() else {
        return Ok(command);
    };
    command.name = strip_quotes(name).to_owned();

    while let Some(word) = words.next() {
        match Token::from(word) {
            Token::RedirectInput => {
                let file = words.next().ok_or(ParseError::MissingRedirectTarget {
                    operator: REDIRECT_INPUT,
                    position,
                })?;
                command.redirect_input(strip_quotes(file).to_owned());
            }
            Token::RedirectOutput => {
                let file = words.next().ok_or(ParseError::MissingRedirectTarget {
                    operator: REDIRECT_OUTPUT,
                    position,
                })?;
                command.redirect_output(strip_quotes(file).to_owned());
            }
            Token::Word(argument) => command.arg(argument.to_owned()),
        }
    }

    Ok(command)
}
