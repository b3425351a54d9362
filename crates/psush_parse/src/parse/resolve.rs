use psush_ast::{Pipeline, RedirectMode};

use crate::ParseError;

use super::ParseResult;

/// Applies positional defaults to every command in a pipeline.
///
/// Interior edges are always pipe-connected. An explicit file on such an edge
/// is rejected rather than silently replaced.
pub fn resolve_redirects(pipeline: &mut Pipeline) -> ParseResult<()> {
    let last = pipeline.len().saturating_sub(1);

    for command in &mut pipeline.commands {
        if command.position > 0 {
            if command.input_mode == RedirectMode::File {
                return Err(ParseError::MisplacedInputRedirect {
                    position: command.position,
                });
            }
            command.input_mode = RedirectMode::Pipe;
        }

        if command.position < last {
            if command.output_mode == RedirectMode::File {
                return Err(ParseError::MisplacedOutputRedirect {
                    position: command.position,
                });
            }
            command.output_mode = RedirectMode::Pipe;
        }
    }

    Ok(())
}
