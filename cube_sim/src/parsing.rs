//! The move grammar: whitespace-separated tokens, each a face letter with an
//! optional `'` or `2` suffix. Malformed tokens are rejected here, before a
//! move list ever reaches the analysis layer.

use chumsky::prelude::*;

use crate::cube::Face;
use crate::moves::{Move, Turn};

fn move_seq<'src>() -> impl Parser<'src, &'src str, Vec<Move>, extra::Err<Rich<'src, char>>> {
    let face = choice((
        just('U').to(Face::Up),
        just('D').to(Face::Down),
        just('F').to(Face::Front),
        just('B').to(Face::Back),
        just('R').to(Face::Right),
        just('L').to(Face::Left),
    ));

    let turn = choice((
        just('\'').to(Turn::Counterclockwise),
        just('2').to(Turn::Half),
    ))
    .or_not()
    .map(|suffix| suffix.unwrap_or(Turn::Clockwise));

    face.then(turn)
        .map(|(face, turn)| Move { face, turn })
        .padded()
        .repeated()
        .collect()
        .padded()
        .then_ignore(end())
}

/// Parse a scramble or solution string into a move sequence.
///
/// # Errors
///
/// Returns the parse errors if the input does not match the move grammar.
pub fn parse_moves(input: &str) -> Result<Vec<Move>, Vec<Rich<'_, char>>> {
    move_seq().parse(input).into_result()
}
