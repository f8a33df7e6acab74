use winnow::combinator::separated;
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::take_till;

/// What a single configuration line turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Line<'i> {
    /// Blank line, comment, or nothing left of the equal sign.
    Ignored,
    MissingEqualSign,
    MultipleEqualSigns,
    /// `key = value`, with `key` split on `.`. Only a trailing parameter name
    /// is trimmed; flag and specification segments keep their spacing.
    Assignment { key: Vec<&'i str>, value: &'i str },
}

// -- Splitting --------------------------------------------------------------

/// Split `row` on every `separator`. Always yields at least one part.
fn split_on(row: &str, separator: char) -> Vec<&str> {
    let mut input = row;
    separated(1.., take_till(0.., separator), separator)
        .parse_next(&mut input)
        .unwrap_or_else(|_: ErrMode<ContextError>| vec![row])
}

// -- Lines ------------------------------------------------------------------

pub(crate) fn line(row: &str) -> Line<'_> {
    let sides = split_on(row, '=');
    let left = sides[0].trim();
    if left.is_empty() || left.starts_with('#') {
        return Line::Ignored;
    }

    match sides.as_slice() {
        [_] => Line::MissingEqualSign,
        [_, right] => {
            let mut key = split_on(left, '.');
            if let [_, _, parameter] = key.as_mut_slice() {
                *parameter = parameter.trim();
            }
            Line::Assignment {
                key,
                value: right.trim(),
            }
        }
        _ => Line::MultipleEqualSigns,
    }
}
