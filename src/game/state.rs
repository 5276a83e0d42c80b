use super::{Board, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// Board filled up. Four-in-a-row is never checked, so this is the only
    /// way a game ends.
    Tie,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    AwaitingMove,
    GameOver,
}

/// Rejected column choices. The `Display` text is what the player sees.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("Invalid column number")]
    NotANumber { input: String },

    #[error("Column number must be between 1 and {width}, you gave {input}")]
    OutOfRange { input: String, width: usize },

    #[error("Column {column} is full! pick again")]
    ColumnFull { column: usize },

    #[error("The board is full, no more moves")]
    GameOver,
}

/// Where a successful move landed. `column` is 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub column: usize,
    pub player: Player,
}

/// One game in progress: the board, whose turn it is, and whether play is over.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    board: Board,
    current_player: Player,
    phase: GamePhase,
    moves_played: usize,
}

impl GameSession {
    /// Create initial session on the standard board
    pub fn initial() -> Self {
        Self::with_board(Board::standard())
    }

    /// Start a session on an existing board. Player One moves first.
    pub fn with_board(board: Board) -> Self {
        let phase = if board.is_full() {
            GamePhase::GameOver
        } else {
            GamePhase::AwaitingMove
        };
        GameSession {
            board,
            current_player: Player::One,
            phase,
            moves_played: 0,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.is_over().then_some(GameOutcome::Tie)
    }

    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Apply a column choice typed by the current player (1-based).
    ///
    /// On any error the board and the current player are left untouched.
    pub fn submit(&mut self, input: &str) -> Result<Placement, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        let input = input.trim();
        let choice: i64 = input.parse().map_err(|_| MoveError::NotANumber {
            input: input.to_string(),
        })?;

        let width = self.board.width();
        let column = choice
            .checked_sub(1)
            .and_then(|col| usize::try_from(col).ok())
            .filter(|&col| col < width)
            .ok_or_else(|| MoveError::OutOfRange {
                input: input.to_string(),
                width,
            })?;

        self.play_column(column)
    }

    /// Drop the current player's marker into a 0-based column.
    pub fn play_column(&mut self, column: usize) -> Result<Placement, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        let width = self.board.width();
        let row = self
            .board
            .next_free_row(column)
            .map_err(|_| MoveError::OutOfRange {
                input: (column + 1).to_string(),
                width,
            })?
            .ok_or(MoveError::ColumnFull { column: column + 1 })?;

        let player = self.current_player;
        self.board.place(row, column, player);
        self.current_player = player.other();
        self.moves_played += 1;

        if self.board.is_full() {
            self.phase = GamePhase::GameOver;
        }

        Ok(Placement {
            row,
            column,
            player,
        })
    }
}
