//! Deterministic text-board diagrams for tests and diagnostics.
//!
//! A diagram is 8 rows of 8 characters, rank 0 (White's home rank) first,
//! one character per square: `kqrbnp` with uppercase for White and a space
//! for an empty square. The loader infers each piece's `has_moved` flag
//! from whether it stands on one of its standard-setup squares, so a
//! diagram's castling and double-step rights read off the page.

use crate::board::piece::{Color, Piece, PieceKind};
use crate::board::position::{Position, BACK_RANK};
use crate::board::square::Square;
use crate::errors::LayoutError;

/// Parses a diagram into piece placements suitable for `Game::new` or
/// `Position::from_pieces`.
pub fn parse_board_layout(rows: &[&str]) -> Result<Vec<(Piece, Square)>, LayoutError> {
    if rows.len() != 8 {
        return Err(LayoutError::WrongRowCount(rows.len()));
    }
    let mut pieces = Vec::with_capacity(32);
    for (rank, row) in rows.iter().enumerate() {
        let cells: Vec<char> = row.chars().collect();
        if cells.len() != 8 {
            return Err(LayoutError::WrongRowLength {
                rank,
                len: cells.len(),
            });
        }
        for (file, &cell) in cells.iter().enumerate() {
            if cell == ' ' {
                continue;
            }
            let kind = kind_from_char(cell)?;
            let color = if cell.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            let square = Square::new(file as i8, rank as i8);
            let mut piece = Piece::new(kind, color);
            if !on_standard_square(kind, color, square) {
                piece = piece.as_moved();
            }
            pieces.push((piece, square));
        }
    }
    Ok(pieces)
}

/// Renders a position in the same 8-row format the loader accepts.
pub fn render_position(position: &Position) -> String {
    let mut out = String::with_capacity(72);
    for rank in 0..8 {
        for file in 0..8 {
            match position.piece_at(Square::new(file, rank)) {
                Some(piece) => out.push(piece_char(piece)),
                None => out.push(' '),
            }
        }
        out.push('\n');
    }
    out
}

fn kind_from_char(cell: char) -> Result<PieceKind, LayoutError> {
    match cell.to_ascii_lowercase() {
        'k' => Ok(PieceKind::King),
        'q' => Ok(PieceKind::Queen),
        'r' => Ok(PieceKind::Rook),
        'b' => Ok(PieceKind::Bishop),
        'n' => Ok(PieceKind::Knight),
        'p' => Ok(PieceKind::Pawn),
        other => Err(LayoutError::InvalidPieceChar(other)),
    }
}

fn piece_char(piece: Piece) -> char {
    let lower = match piece.kind {
        PieceKind::King => 'k',
        PieceKind::Queen => 'q',
        PieceKind::Rook => 'r',
        PieceKind::Bishop => 'b',
        PieceKind::Knight => 'n',
        PieceKind::Pawn => 'p',
    };
    match piece.color {
        Color::White => lower.to_ascii_uppercase(),
        Color::Black => lower,
    }
}

fn on_standard_square(kind: PieceKind, color: Color, square: Square) -> bool {
    match kind {
        PieceKind::Pawn => square.rank == color.home_rank() + color.forward(),
        _ => {
            square.rank == color.home_rank() && BACK_RANK[square.file as usize] == kind
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STANDARD_ROWS: [&str; 8] = [
        "RNBQKBNR",
        "PPPPPPPP",
        "        ",
        "        ",
        "        ",
        "        ",
        "pppppppp",
        "rnbqkbnr",
    ];

    #[test]
    fn standard_diagram_matches_standard_setup() {
        let pieces = parse_board_layout(&STANDARD_ROWS).unwrap();
        let position = Position::from_pieces(&pieces);
        let reference = Position::standard_setup();
        for (piece, square) in reference.all_pieces() {
            assert_eq!(position.piece_at(square), Some(piece));
        }
        assert!(pieces.iter().all(|(piece, _)| !piece.has_moved));
    }

    #[test]
    fn render_is_the_loader_inverse() {
        let position = Position::standard_setup();
        let rendered = render_position(&position);
        let rows: Vec<&str> = rendered.lines().collect();
        assert_eq!(rows, STANDARD_ROWS);
    }

    #[test]
    fn displaced_pieces_are_marked_moved() {
        let rows = [
            "    K   ",
            "P       ",
            "        ",
            "        ",
            "P       ",
            "        ",
            "        ",
            "   k    ",
        ];
        let pieces = parse_board_layout(&rows).unwrap();
        let moved_flags: Vec<bool> = pieces.iter().map(|(p, _)| p.has_moved).collect();
        // King on e1 and pawn on a2 are at home; the advanced pawn and the
        // displaced black king are not.
        assert_eq!(moved_flags, vec![false, false, true, true]);
    }

    #[test]
    fn bad_rows_and_bad_characters_are_reported() {
        assert_eq!(
            parse_board_layout(&["        "; 7]),
            Err(LayoutError::WrongRowCount(7))
        );
        let short = [
            "RNBQKBNR",
            "PPPPPPPP",
            "       ",
            "        ",
            "        ",
            "        ",
            "pppppppp",
            "rnbqkbnr",
        ];
        assert_eq!(
            parse_board_layout(&short),
            Err(LayoutError::WrongRowLength { rank: 2, len: 7 })
        );
        let junk = [
            "RNBQKBNR",
            "PPPPPPPP",
            "   x    ",
            "        ",
            "        ",
            "        ",
            "pppppppp",
            "rnbqkbnr",
        ];
        assert_eq!(
            parse_board_layout(&junk),
            Err(LayoutError::InvalidPieceChar('x'))
        );
    }
}
