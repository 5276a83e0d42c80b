use crate::game::{GameSession, Player};
use std::io::{self, BufRead, Write};

use super::board_view::{self, cell_token};

pub const TIE_MESSAGE: &str = "Are you sure no one won? If not, the board is full so it's a tie";

/// How an interactive session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Tie,
    /// Input ran out before the board filled.
    InputClosed,
}

/// Line-based console front end: prompts, reads a column, redraws.
pub struct App {
    session: GameSession,
    debug: bool,
}

impl App {
    pub fn new(debug: bool) -> Self {
        Self::with_session(GameSession::initial(), debug)
    }

    pub fn with_session(session: GameSession, debug: bool) -> Self {
        App { session, debug }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Main application loop
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
    ) -> io::Result<SessionEnd> {
        log::info!(
            "starting game on a {}x{} board",
            self.session.board().height(),
            self.session.board().width()
        );
        self.draw(&mut output)?;

        let mut buf = Vec::new();
        while !self.session.is_over() {
            write!(output, "{}", self.prompt())?;
            output.flush()?;

            // Bytes that are not UTF-8 become U+FFFD and fail to parse as a column
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                writeln!(output)?;
                log::warn!(
                    "input closed after {} moves, abandoning game",
                    self.session.moves_played()
                );
                return Ok(SessionEnd::InputClosed);
            }

            let line = String::from_utf8_lossy(&buf);
            match self.session.submit(&line) {
                Ok(placement) => {
                    log::debug!(
                        "{:?} dropped into column {} at row {}",
                        placement.player,
                        placement.column,
                        placement.row
                    );
                    self.draw(&mut output)?;
                }
                Err(err) => {
                    log::debug!("rejected move {:?}: {:?}", line.trim(), err);
                    writeln!(output, "{err}")?;
                }
            }
        }

        writeln!(output, "{TIE_MESSAGE}")?;
        log::info!("board full after {} moves", self.session.moves_played());
        Ok(SessionEnd::Tie)
    }

    fn prompt(&self) -> String {
        let marker = cell_token(self.session.current_player().to_cell());
        format!("Player{}Pick a column, 1-{}: ", marker, self.session.board().width())
    }

    fn draw<W: Write>(&self, output: &mut W) -> io::Result<()> {
        writeln!(output, "{}", board_view::render(self.session.board(), self.debug))
    }

    pub fn current_player(&self) -> Player {
        self.session.current_player()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(false)
    }
}
