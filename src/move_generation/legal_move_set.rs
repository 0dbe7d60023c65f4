//! The legal-move map for the side to move.
//!
//! Keys are source squares, values the destinations reachable from them in
//! search order. Keys iterate in board scan order because `Position` orders
//! column-major. A source with no destination is never stored.

use std::collections::BTreeMap;

use crate::checkers_errors::{CheckersError, CheckersResult};
use crate::game_state::checkers_types::Position;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegalMoveSet {
    moves: BTreeMap<Position, Vec<Position>>,
    is_capture: bool,
}

impl LegalMoveSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// A set holding exactly one capturing entry, used while a chain continues.
    pub fn capture_chain(from: Position, jumps: Vec<Position>) -> Self {
        let mut set = Self {
            moves: BTreeMap::new(),
            is_capture: true,
        };
        set.insert(from, jumps);
        set
    }

    /// Switch into capture mode, discarding every entry recorded so far.
    pub(crate) fn start_capture(&mut self) {
        self.moves.clear();
        self.is_capture = true;
    }

    /// Record `destinations` under `from`; empty lists are not stored.
    pub(crate) fn insert(&mut self, from: Position, destinations: Vec<Position>) {
        if !destinations.is_empty() {
            self.moves.insert(from, destinations);
        }
    }

    /// True when every entry is a jump.
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.is_capture
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Number of source squares.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Number of (source, destination) pairs.
    pub fn move_count(&self) -> usize {
        self.moves.values().map(Vec::len).sum()
    }

    pub fn sources(&self) -> impl Iterator<Item = Position> + '_ {
        self.moves.keys().copied()
    }

    pub fn destinations(&self, from: Position) -> Option<&[Position]> {
        self.moves.get(&from).map(Vec::as_slice)
    }

    pub fn contains(&self, from: Position, to: Position) -> bool {
        self.destinations(from)
            .is_some_and(|destinations| destinations.contains(&to))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, &[Position])> + '_ {
        self.moves.iter().map(|(from, to)| (*from, to.as_slice()))
    }

    /// All (source, destination) pairs in scan order.
    pub fn pairs(&self) -> impl Iterator<Item = (Position, Position)> + '_ {
        self.moves
            .iter()
            .flat_map(|(from, to)| to.iter().map(move |dest| (*from, *dest)))
    }

    /// Destinations for a selected source, or `InvalidSource`.
    pub fn validate_source(&self, from: Position) -> CheckersResult<&[Position]> {
        self.destinations(from)
            .ok_or(CheckersError::InvalidSource(from))
    }

    /// Check a full selection against the set without touching any state.
    pub fn validate(&self, from: Position, to: Position) -> CheckersResult<()> {
        let destinations = self.validate_source(from)?;
        if destinations.contains(&to) {
            Ok(())
        } else {
            Err(CheckersError::InvalidDestination { from, to })
        }
    }

    /// Mandatory-capture check: either no destination is a jump, or all are.
    pub fn is_capture_consistent(&self) -> bool {
        let mut jumps = 0usize;
        let mut steps = 0usize;
        for (from, to) in self.pairs() {
            if from.is_adjacent(&to) {
                steps += 1;
            } else {
                jumps += 1;
            }
        }
        jumps == 0 || steps == 0
    }
}
