//! One playable board location and its local move-search geometry.

use crate::game_state::checkers_types::{Piece, Position};

/// Rendered bounding box of a square: bottom-left corner plus edge length.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Extent {
    pub left: f64,
    pub bottom: f64,
    pub edge: f64,
}

/// Candidate offsets to examine from an occupied square.
///
/// `dx` is always `[-1, 1]`. A man searches a single row direction, a king
/// searches both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchDirections {
    pub dx: [i8; 2],
    pub dy: &'static [i8],
}

const MAN_FORWARD_UP: [i8; 1] = [1];
const MAN_FORWARD_DOWN: [i8; 1] = [-1];
const KING_ROWS: [i8; 2] = [-1, 1];

impl SearchDirections {
    /// Offsets in search order: dx-major, then dy.
    pub fn offsets(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.dx
            .iter()
            .flat_map(move |&dx| self.dy.iter().map(move |&dy| (dx, dy)))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Square {
    pub position: Position,
    pub occupant: Option<Piece>,
    pub extent: Extent,
}

impl PartialEq for Square {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl Eq for Square {}

impl Square {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            occupant: None,
            extent: Extent::default(),
        }
    }

    #[inline]
    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    /// Inclusive bounding-box test against the rendered extent.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.extent.left
            && x <= self.extent.left + self.extent.edge
            && y >= self.extent.bottom
            && y <= self.extent.bottom + self.extent.edge
    }

    /// Callers exclude `self` before asking; a square is adjacent to itself.
    #[inline]
    pub fn is_adjacent(&self, other: &Position) -> bool {
        self.position.is_adjacent(other)
    }

    pub fn all_adjacent(&self, others: &[Position]) -> bool {
        others.iter().all(|other| self.is_adjacent(other))
    }

    /// `None` when the square is empty.
    pub fn search_directions(&self) -> Option<SearchDirections> {
        let piece = self.occupant?;
        let dy: &'static [i8] = if piece.is_king() {
            &KING_ROWS
        } else if piece.owner.forward_dy() > 0 {
            &MAN_FORWARD_UP
        } else {
            &MAN_FORWARD_DOWN
        };
        Some(SearchDirections { dx: [-1, 1], dy })
    }
}
