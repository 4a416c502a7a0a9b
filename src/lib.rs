//! Single-position checkmate evaluation: white attacking pieces versus a lone
//! defending king on a fixed 8×8 board.
//!
//! A caller builds up a [`game::Game`] (one defending king, any number of
//! attackers), then asks one question: is the defending king checkmated?
//! Movement geometry is deliberately occupancy-blind: a sliding piece's ray
//! is not stopped by intervening pieces.

pub mod board;
pub mod coord;
pub mod game;
pub mod pieces;
pub mod rules;
pub mod scenarios;
