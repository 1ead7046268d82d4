//! Direction vectors and precomputed target tables for leaper pieces.

use once_cell::sync::Lazy;

use super::Square;

pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub(crate) const ORTHOGONAL_RAYS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub(crate) const DIAGONAL_RAYS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

fn leaper_table(offsets: &[(i8, i8)]) -> [Vec<Square>; 64] {
    std::array::from_fn(|idx| {
        let from = Square::from_index(idx);
        offsets
            .iter()
            .filter_map(|&(dr, dc)| from.offset(dr, dc))
            .collect()
    })
}

/// On-board knight jump targets for every square, indexed by `Square::index`.
pub(crate) static KNIGHT_TARGETS: Lazy<[Vec<Square>; 64]> =
    Lazy::new(|| leaper_table(&KNIGHT_OFFSETS));

/// On-board adjacent squares for every square, indexed by `Square::index`.
pub(crate) static KING_TARGETS: Lazy<[Vec<Square>; 64]> =
    Lazy::new(|| leaper_table(&KING_OFFSETS));
