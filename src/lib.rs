//! # Console Connect Four
//!
//! Two players take turns dropping markers into a 6x7 grid from the terminal.
//! There is no win detection: the game ends in a tie once the board is full.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, turn controller
//! - [`ui`] — Text rendering and the interactive console loop
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
