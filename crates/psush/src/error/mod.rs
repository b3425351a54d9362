use annotate_snippets::{
    display_list::{DisplayList, FormatOptions},
    snippet::{Annotation, AnnotationType, Slice, Snippet, SourceAnnotation},
};
use psush_parse::{segments, ParseError};

use crate::shell::ShellError;

/// Generalized error handler.
pub(crate) trait ErrorHandler {
    /// Displays an error.
    fn display_error(&self, error: ShellError);
}

/// A simple error handler, displaying errors on a single line.
pub(crate) struct SimpleErrorHandler;
impl ErrorHandler for SimpleErrorHandler {
    fn display_error(&self, error: ShellError) {
        match error {
            ShellError::Parse(error, _) => eprintln!("psush: parse error: {error}"),
            error => eprintln!("psush: {error}"),
        }
    }
}

/// A guiding error handler, pointing out the offending part of a line.
pub(crate) struct GuidingErrorHandler;
impl ErrorHandler for GuidingErrorHandler {
    fn display_error(&self, error: ShellError) {
        match error {
            ShellError::Parse(error, line) => print_parse_error_details(&line, &error),
            error => eprintln!("psush: {error}"),
        }
    }
}

/// Returns the character range of a pipeline segment's text, excluding
/// surrounding whitespace.
fn segment_span(line: &str, position: usize) -> Option<(usize, usize)> {
    let mut start = 0;
    for (index, segment) in segments(line).enumerate() {
        let length = segment.chars().count();
        if index == position {
            let leading = segment.chars().take_while(|ch| ch.is_whitespace()).count();
            let trailing = segment.chars().rev().take_while(|ch| ch.is_whitespace()).count();
            return match leading + trailing < length {
                true => Some((start + leading, start + length - trailing)),
                false => None,
            };
        }
        start += length + 1; // Skip the pipe.
    }

    None
}

/// Prints details related to a parse error.
fn print_parse_error_details(line: &str, error: &ParseError) {
    let Some(range) = segment_span(line, error.position()) else {
        eprintln!("psush: parse error: {error}");
        return;
    };

    let label = error.to_string();
    let snippet = Snippet {
        title: Some(Annotation {
            label: Some(&label),
            id: None,
            annotation_type: AnnotationType::Error,
        }),
        footer: vec![],
        slices: vec![Slice {
            source: line,
            line_start: 1,
            origin: None,
            fold: true,
            annotations: vec![SourceAnnotation {
                label: error.help(),
                annotation_type: AnnotationType::Error,
                range,
            }],
        }],
        opt: FormatOptions {
            color: true,
            ..Default::default()
        },
    };

    eprintln!("{}", DisplayList::from(snippet));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_spans_exclude_whitespace() {
        assert_eq!(segment_span("ls -l", 0), Some((0, 5)));
        assert_eq!(segment_span("ls | sort > ", 1), Some((5, 11)));
        assert_eq!(segment_span("ls |  ", 1), None);
        assert_eq!(segment_span("ls", 3), None);
    }
}
