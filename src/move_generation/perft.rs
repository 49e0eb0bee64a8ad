//! Exhaustive legal-move tree counting.
//!
//! Perft is the primary regression oracle for the generator: the leaf
//! counts from well-known positions are published and any divergence
//! pinpoints a rule bug. `perft` counts nodes only; `perft_counts` also
//! breaks the horizon moves down by kind, which narrows a mismatch to the
//! rule that produced it.

use crate::board::position::Position;
use crate::move_generation::legal_move_filter::legal_moves_for_color;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
}

/// Leaf count of the legal-move tree to `depth` plies.
pub fn perft(position: &Position, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = legal_moves_for_color(position, position.side_to_move);
    if depth == 1 {
        return moves.len() as u64;
    }
    let mut nodes = 0;
    for mv in moves {
        nodes += perft(&position.apply(&mv), depth - 1);
    }
    nodes
}

/// Like `perft`, but classifies the moves at the horizon.
pub fn perft_counts(position: &Position, depth: u32) -> PerftCounts {
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return counts;
    }
    perft_counts_recursion(position, depth, &mut counts);
    counts
}

fn perft_counts_recursion(position: &Position, depth: u32, counts: &mut PerftCounts) {
    let moves = legal_moves_for_color(position, position.side_to_move);
    if depth == 1 {
        for mv in &moves {
            counts.nodes += 1;
            if let Some((_, victim_square)) = mv.captured {
                counts.captures += 1;
                if victim_square != mv.to {
                    counts.en_passant += 1;
                }
            }
            if mv.castle_rook.is_some() {
                counts.castles += 1;
            }
            if mv.promotion.is_some() {
                counts.promotions += 1;
            }
        }
        return;
    }
    for mv in moves {
        perft_counts_recursion(&position.apply(&mv), depth - 1, counts);
    }
}

// Reference values are taken from https://www.chessprogramming.org/Perft_Results

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::piece::Color;
    use crate::utils::board_text::parse_board_layout;

    // Position 2 ("kiwipete") from the perft results page.
    const KIWIPETE: [&str; 8] = [
        "R   K  R",
        "PPPBBPPP",
        "  N  Q p",
        " p  P   ",
        "   PN   ",
        "bn  pnp ",
        "p ppqpb ",
        "r   k  r",
    ];

    // Position 3: rook-and-pawns endgame.
    const ENDGAME: [&str; 8] = [
        "        ",
        "    P P ",
        "        ",
        " R   p k",
        "KP     r",
        "   p    ",
        "  p     ",
        "        ",
    ];

    fn position_from(rows: &[&str; 8]) -> Position {
        Position::from_pieces(&parse_board_layout(rows).unwrap())
    }

    #[test]
    fn startpos_shallow_depths_match_reference() {
        let position = Position::standard_setup();
        assert_eq!(perft(&position, 1), 20);
        assert_eq!(perft(&position, 2), 400);
        assert_eq!(perft(&position, 3), 8_902);
    }

    #[test]
    fn startpos_depth_four_matches_reference() {
        let position = Position::standard_setup();
        assert_eq!(perft(&position, 4), 197_281);
    }

    #[test]
    #[ignore = "minutes-long; run on demand"]
    fn startpos_deep_depths_match_reference() {
        let position = Position::standard_setup();
        assert_eq!(perft(&position, 5), 4_865_609);
        assert_eq!(perft(&position, 6), 119_060_324);
    }

    #[test]
    fn kiwipete_counts_match_reference() {
        let position = position_from(&KIWIPETE);
        assert_eq!(
            perft_counts(&position, 1),
            PerftCounts {
                nodes: 48,
                captures: 8,
                en_passant: 0,
                castles: 2,
                promotions: 0,
            }
        );
        assert_eq!(
            perft_counts(&position, 2),
            PerftCounts {
                nodes: 2_039,
                captures: 351,
                en_passant: 1,
                castles: 91,
                promotions: 0,
            }
        );
        assert_eq!(perft(&position, 3), 97_862);
    }

    #[test]
    fn endgame_counts_match_reference() {
        let position = position_from(&ENDGAME);
        assert_eq!(
            perft_counts(&position, 1),
            PerftCounts {
                nodes: 14,
                captures: 1,
                en_passant: 0,
                castles: 0,
                promotions: 0,
            }
        );
        assert_eq!(perft(&position, 2), 191);
        assert_eq!(perft(&position, 3), 2_812);
        assert_eq!(perft(&position, 4), 43_238);
    }

    #[test]
    fn promotion_heavy_position_matches_reference() {
        // Position 5 from the perft results page; only White retains
        // castling rights, which the displaced black king encodes.
        let rows = [
            "RNBQK  R",
            "PPP NnPP",
            "        ",
            "  B     ",
            "        ",
            "  p     ",
            "pp Pbppp",
            "rnbq k r",
        ];
        let position = position_from(&rows);
        assert_eq!(perft(&position, 1), 44);
        assert_eq!(perft(&position, 2), 1_486);
        assert_eq!(perft(&position, 3), 62_379);
    }

    #[test]
    fn side_to_move_drives_the_count() {
        let mut position = position_from(&ENDGAME);
        assert_eq!(position.side_to_move, Color::White);
        position.side_to_move = Color::Black;
        // The same board counted for Black; reference row for the
        // mirrored position lists different leaf totals.
        assert_ne!(perft(&position, 1), 14);
    }
}
