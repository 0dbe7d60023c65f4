//! The 8x8 checkerboard.
//!
//! `Board` owns every `Square` and, through them, every `Piece`. Squares are
//! created once and never move; only their occupancy changes. Light squares
//! (even coordinate sum) can never be occupied: `place` rejects them, so
//! move search never has to consider them.

use crate::checkers_errors::{CheckersError, CheckersResult};
use crate::game_state::checkers_rules::{
    BOARD_SIZE, COMPUTER_SETUP_START_ROW, DEFAULT_CELL_SIZE, HUMAN_SETUP_ROWS,
};
use crate::game_state::checkers_types::{Piece, Player, Position};
use crate::game_state::square::{Extent, Square};

const N: usize = BOARD_SIZE as usize;

#[derive(Debug, Clone)]
pub struct Board {
    // Indexed [x][y].
    squares: [[Square; N]; N],
    cell_size: f64,
}

impl Default for Board {
    fn default() -> Self {
        Self::new_empty()
    }
}

impl PartialEq for Board {
    /// Boards compare by occupancy only.
    fn eq(&self, other: &Self) -> bool {
        self.squares
            .iter()
            .flatten()
            .zip(other.squares.iter().flatten())
            .all(|(a, b)| a.occupant == b.occupant)
    }
}

impl Board {
    #[inline]
    pub fn new_empty() -> Self {
        Self::with_cell_size(DEFAULT_CELL_SIZE)
    }

    /// Empty board whose square extents are laid out around the origin with
    /// the bottom-left corner at `(-N * cell_size / 2, -N * cell_size / 2)`.
    pub fn with_cell_size(cell_size: f64) -> Self {
        let corner = -(N as f64) * cell_size / 2.0;
        let squares = std::array::from_fn(|x| {
            std::array::from_fn(|y| {
                let mut square = Square::new(Position::new(x as i8, y as i8));
                square.extent = Extent {
                    left: corner + cell_size * x as f64,
                    bottom: corner + cell_size * y as f64,
                    edge: cell_size,
                };
                square
            })
        });
        Self { squares, cell_size }
    }

    /// Standard setup: Human men on the dark squares of the three lowest
    /// rows, Computer men on the dark squares of the three highest.
    pub fn new_game() -> Self {
        let mut board = Self::new_empty();
        board.set_up_pieces();
        board
    }

    pub fn set_up_pieces(&mut self) {
        for column in self.squares.iter_mut() {
            for square in column.iter_mut() {
                if !square.position.is_dark() {
                    continue;
                }
                let y = square.position.y;
                square.occupant = if y < HUMAN_SETUP_ROWS {
                    Some(Piece::man(Player::Human))
                } else if y >= COMPUTER_SETUP_START_ROW {
                    Some(Piece::man(Player::Computer))
                } else {
                    None
                };
            }
        }
    }

    #[inline]
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    #[inline]
    pub fn square(&self, position: Position) -> Option<&Square> {
        if !position.is_on_board() {
            return None;
        }
        Some(&self.squares[position.x as usize][position.y as usize])
    }

    #[inline]
    pub(crate) fn square_mut(&mut self, position: Position) -> Option<&mut Square> {
        if !position.is_on_board() {
            return None;
        }
        Some(&mut self.squares[position.x as usize][position.y as usize])
    }

    /// Occupant of `position`; off-board positions read as empty.
    #[inline]
    pub fn piece_at(&self, position: Position) -> Option<Piece> {
        self.square(position).and_then(|square| square.occupant)
    }

    #[inline]
    pub fn is_empty_at(&self, position: Position) -> bool {
        self.piece_at(position).is_none()
    }

    pub fn place(&mut self, position: Position, piece: Piece) -> CheckersResult<()> {
        if !position.is_dark() && position.is_on_board() {
            return Err(CheckersError::LightSquare(position));
        }
        let square = self.square_mut(position).ok_or(CheckersError::OutOfBounds {
            x: position.x,
            y: position.y,
        })?;
        square.occupant = Some(piece);
        Ok(())
    }

    /// Vacate `position`, returning whatever stood there.
    pub fn remove(&mut self, position: Position) -> Option<Piece> {
        self.square_mut(position)
            .and_then(|square| square.occupant.take())
    }

    /// True when `position` is the far rank for `player`.
    #[inline]
    pub fn is_promotion_row(&self, position: Position, player: Player) -> bool {
        position.y == player.promotion_row()
    }

    /// Dark squares in scan order: column by column, rows ascending.
    pub fn dark_squares(&self) -> impl Iterator<Item = &Square> {
        self.squares
            .iter()
            .flatten()
            .filter(|square| square.position.is_dark())
    }

    /// Occupied squares of `player` in scan order.
    pub fn pieces_of(&self, player: Player) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.dark_squares().filter_map(move |square| match square.occupant {
            Some(piece) if piece.owner == player => Some((square.position, piece)),
            _ => None,
        })
    }

    pub fn piece_count(&self, player: Player) -> usize {
        self.pieces_of(player).count()
    }

    /// Dark square whose rendered extent contains the point, if any.
    pub fn locate_point(&self, x: f64, y: f64) -> Option<Position> {
        self.dark_squares()
            .find(|square| square.contains(x, y))
            .map(|square| square.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::checkers_rules::PIECES_PER_SIDE;

    #[test]
    fn new_game_places_twelve_men_per_side_on_dark_squares() {
        let board = Board::new_game();
        assert_eq!(board.piece_count(Player::Human), PIECES_PER_SIDE);
        assert_eq!(board.piece_count(Player::Computer), PIECES_PER_SIDE);

        for x in 0..8 {
            for y in 0..8 {
                let pos = Position::new(x, y);
                match board.piece_at(pos) {
                    Some(piece) => {
                        assert!(pos.is_dark());
                        assert!(!piece.is_king());
                        if y < 3 {
                            assert_eq!(piece.owner, Player::Human);
                        } else {
                            assert!(y > 4);
                            assert_eq!(piece.owner, Player::Computer);
                        }
                    }
                    None => assert!(!pos.is_dark() || (3..=4).contains(&y)),
                }
            }
        }
    }

    #[test]
    fn light_squares_reject_pieces() {
        let mut board = Board::new_empty();
        assert_eq!(
            board.place(Position::new(0, 0), Piece::man(Player::Human)),
            Err(CheckersError::LightSquare(Position::new(0, 0)))
        );
        assert_eq!(
            board.place(Position::new(8, 1), Piece::man(Player::Human)),
            Err(CheckersError::OutOfBounds { x: 8, y: 1 })
        );
        assert!(board.place(Position::new(0, 1), Piece::man(Player::Human)).is_ok());
        assert_eq!(board.piece_count(Player::Human), 1);
    }

    #[test]
    fn remove_vacates_square() {
        let mut board = Board::new_game();
        let pos = Position::new(1, 2);
        assert_eq!(board.remove(pos), Some(Piece::man(Player::Human)));
        assert!(board.is_empty_at(pos));
        assert_eq!(board.remove(pos), None);
        assert_eq!(board.remove(Position::new(-1, 2)), None);
    }

    #[test]
    fn dark_squares_scan_column_major() {
        let board = Board::new_empty();
        let scanned: Vec<Position> = board.dark_squares().map(|s| s.position).take(5).collect();
        assert_eq!(
            scanned,
            vec![
                Position::new(0, 1),
                Position::new(0, 3),
                Position::new(0, 5),
                Position::new(0, 7),
                Position::new(1, 0),
            ]
        );
        assert_eq!(board.dark_squares().count(), 32);
    }

    #[test]
    fn locate_point_maps_to_dark_squares_only() {
        let board = Board::new_empty();
        assert_eq!(board.locate_point(50.0, -50.0), Some(Position::new(4, 3)));
        assert_eq!(board.locate_point(-25.0, -75.0), Some(Position::new(3, 2)));
        assert_eq!(board.locate_point(-175.0, -175.0), None);
        assert_eq!(board.locate_point(-210.0, 210.0), None);
    }

    #[test]
    fn promotion_rows() {
        let board = Board::new_empty();
        assert!(board.is_promotion_row(Position::new(2, 7), Player::Human));
        assert!(board.is_promotion_row(Position::new(3, 0), Player::Computer));
        assert!(!board.is_promotion_row(Position::new(3, 0), Player::Human));
    }
}
