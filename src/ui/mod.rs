//! Console front end: text rendering of the board and the prompt/read/redraw
//! loop that drives a game.

mod app;
pub mod board_view;

pub use app::{App, SessionEnd, TIE_MESSAGE};
