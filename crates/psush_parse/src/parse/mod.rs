mod command;
mod resolve;


use psush_ast::Pipeline;

use crate::{lex::segments, ParseError};

use self::{command::parse_command, resolve::resolve_redirects};

pub(crate) type ParseResult<T> = Result<T, ParseError>;

/// Parses a line into a fully resolved [`Pipeline`].
///
/// Every segment produces a command, including empty ones, so that pipeline
/// positions stay stable.
pub fn parse(line: &str) -> ParseResult<Pipeline> {
    let mut pipeline = Pipeline::default();
    for (position, segment) in segments(line).enumerate() {
        pipeline.commands.push(parse_command(segment, position)?);
    }

    resolve_redirects(&mut pipeline)?;

    Ok(pipeline)
}
