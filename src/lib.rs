//! Pointer-driven tic-tac-toe game logic.
//!
//! This crate is the game core of a mouse-driven tic-tac-toe: it owns
//! the board, the move history, win and draw detection, and the mapping
//! from normalized pointer coordinates to board cells. Windowing,
//! shaders, and raw input plumbing live in the host program; the host
//! feeds [`InputResolver`] normalized points and redraws from [`Game`]
//! snapshots and [`draw_list`] tokens.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{draw_list, Game, InputResolver, Point};
//!
//! let mut game = Game::new();
//! let mut input = InputResolver::new();
//!
//! // Click the center cell, then the top-left cell.
//! input.on_primary_activate(&mut game, Point::new(0.0, 0.0));
//! input.on_primary_activate(&mut game, Point::new(-0.67, 0.67));
//!
//! let tokens = draw_list(&game, input.geometry());
//! assert_eq!(tokens.len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod game;
mod geometry;
mod input;
mod invariants;
mod position;
mod rules;
mod scene;
mod types;

// Crate-level exports - moves and errors
pub use action::{Move, PlaceError};

// Crate-level exports - game state
pub use game::{Game, GameStatus};

// Crate-level exports - board geometry and input
pub use geometry::{BoardGeometry, Point};
pub use input::InputResolver;

// Crate-level exports - consistency checks
pub use invariants::{HistoryConsistent, MarksBalanced, assert_invariants};

// Crate-level exports - rules
pub use rules::{WinLine, check_winner, is_full};

// Crate-level exports - core types
pub use position::Position;
pub use types::{Board, Player, Square};

// Crate-level exports - presentation boundary
pub use scene::{Token, draw_list};
