//! Core types shared by every game: players, moves, RNG.
//!
//! These are game-agnostic. Concrete games describe themselves through the
//! `rules::Board` trait rather than extending this module.

pub mod moves;
pub mod player;
pub mod rng;

pub use moves::{Move, MoveList};
pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::GameRng;
