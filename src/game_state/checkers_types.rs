/// Core value types shared by the board, move generation and the controller.
use std::fmt;

use crate::game_state::checkers_rules::BOARD_SIZE;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Player {
    Human,
    Computer,
}

impl Player {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Player::Human => 0,
            Player::Computer => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    /// Row direction a man of this side advances in: `(-1)^index`.
    #[inline]
    pub const fn forward_dy(self) -> i8 {
        match self {
            Player::Human => 1,
            Player::Computer => -1,
        }
    }

    /// The far rank, where this side's men are crowned: `(N - 1) * (1 - index)`.
    #[inline]
    pub const fn promotion_row(self) -> i8 {
        (BOARD_SIZE - 1) * (1 - self.index() as i8)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Human => write!(f, "human"),
            Player::Computer => write!(f, "computer"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Man,
    King,
}

/// One checker. Identity on the board comes from the square holding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub owner: Player,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn man(owner: Player) -> Self {
        Self {
            owner,
            kind: PieceKind::Man,
        }
    }

    #[inline]
    pub const fn king(owner: Player) -> Self {
        Self {
            owner,
            kind: PieceKind::King,
        }
    }

    #[inline]
    pub const fn is_king(&self) -> bool {
        matches!(self.kind, PieceKind::King)
    }

    /// Promote to king. Crowning a king is a no-op.
    #[inline]
    pub fn crown(&mut self) {
        self.kind = PieceKind::King;
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_king() { "king" } else { "non-king" };
        write!(f, "player: {}, which is {}.", self.owner.index(), kind)
    }
}

/// Integer board coordinate. `x` is the column, `y` the row.
///
/// Ordering is column-major (`x`, then `y`), which is the board scan order
/// used by legal move generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Position {
    pub x: i8,
    pub y: i8,
}

impl Position {
    #[inline]
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn is_on_board(&self) -> bool {
        self.x >= 0 && self.x < BOARD_SIZE && self.y >= 0 && self.y < BOARD_SIZE
    }

    /// Playable squares are those with an odd coordinate sum.
    #[inline]
    pub const fn is_dark(&self) -> bool {
        (self.x + self.y) % 2 != 0
    }

    /// Shift by `(dx, dy)`, or `None` when the result leaves the board.
    #[inline]
    pub fn offset(&self, dx: i8, dy: i8) -> Option<Position> {
        let moved = Position::new(self.x + dx, self.y + dy);
        moved.is_on_board().then_some(moved)
    }

    /// True for any square in the 8-neighbourhood, including `self`.
    #[inline]
    pub fn is_adjacent(&self, other: &Position) -> bool {
        (other.x - self.x).abs() <= 1 && (other.y - self.y).abs() <= 1
    }

    /// The square a jump from `self` to `other` passes over.
    #[inline]
    pub fn midpoint(&self, other: &Position) -> Position {
        Position::new(
            (self.x + other.x).div_euclid(2),
            (self.y + other.y).div_euclid(2),
        )
    }

    /// The landing square when jumping from `self` over `over`.
    #[inline]
    pub fn reflect_through(&self, over: &Position) -> Position {
        Position::new(over.x + (over.x - self.x), over.y + (over.y - self.y))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x: {} y: {}", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_and_promotion_row_follow_owner() {
        assert_eq!(Player::Human.forward_dy(), 1);
        assert_eq!(Player::Computer.forward_dy(), -1);
        assert_eq!(Player::Human.promotion_row(), 7);
        assert_eq!(Player::Computer.promotion_row(), 0);
        assert_eq!(Player::Human.opposite(), Player::Computer);
    }

    #[test]
    fn crowning_is_one_way() {
        let mut piece = Piece::man(Player::Computer);
        assert!(!piece.is_king());
        piece.crown();
        assert!(piece.is_king());
        piece.crown();
        assert_eq!(piece, Piece::king(Player::Computer));
        assert_eq!(piece.to_string(), "player: 1, which is king.");
    }

    #[test]
    fn position_geometry() {
        let origin = Position::new(3, 2);
        assert!(origin.is_dark());
        assert!(!Position::new(0, 0).is_dark());
        assert_eq!(origin.offset(1, 1), Some(Position::new(4, 3)));
        assert_eq!(Position::new(0, 7).offset(-1, 1), None);
        assert!(origin.is_adjacent(&Position::new(2, 3)));
        assert!(!origin.is_adjacent(&Position::new(5, 4)));
        assert_eq!(origin.midpoint(&Position::new(5, 4)), Position::new(4, 3));
        assert_eq!(
            origin.reflect_through(&Position::new(2, 3)),
            Position::new(1, 4)
        );
        assert_eq!(Position::new(6, 5).to_string(), "x: 6 y: 5");
    }

    #[test]
    fn ordering_is_column_major() {
        let mut squares = vec![
            Position::new(2, 1),
            Position::new(0, 7),
            Position::new(2, 0),
            Position::new(1, 4),
        ];
        squares.sort();
        assert_eq!(
            squares,
            vec![
                Position::new(0, 7),
                Position::new(1, 4),
                Position::new(2, 0),
                Position::new(2, 1),
            ]
        );
    }
}
