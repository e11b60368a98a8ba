//! Game state management: turns, timers and terminal detection

use std::time::Duration;

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::board::{Board, Pos, Stone, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::config::GameConfig;
use crate::engine::{AIEngine, MoveResult};
use crate::error::{GameError, GameResult, MoveError};
use crate::rules::{check_win, winning_line};

use super::timer::TurnTimer;
use super::{GameMode, Outcome, Phase};

/// Turn controller owning the board of one game.
///
/// Every mutation goes through this type: human moves via
/// [`submit_human_move`](Game::submit_human_move), automated moves via
/// [`tick`](Game::tick) or [`play_automated_turn`](Game::play_automated_turn).
/// A reset or mode change drops any pending automated move, so nothing
/// scheduled for an old game can land on a new board.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use gomoku::{Game, GameConfig, GameMode, Outcome, Stone};
///
/// let config = GameConfig::default().with_board_size(9).with_seed(1);
/// let mut game = Game::new(config, GameMode::HumanVsAi { human: Stone::Black }).unwrap();
///
/// assert_eq!(game.submit_human_move(4, 4), Ok(Outcome::InProgress));
/// // The engine replies once its delay has elapsed
/// let reply = game.tick(Duration::from_secs(1));
/// assert!(reply.is_some());
/// assert_eq!(game.to_move(), Stone::Black);
/// ```
#[derive(Debug)]
pub struct Game<R = ChaCha8Rng> {
    config: GameConfig,
    mode: GameMode,
    board: Board,
    to_move: Stone,
    outcome: Outcome,
    last_move: Option<Pos>,
    move_history: Vec<(Pos, Stone)>,
    winning_line: Option<Vec<Pos>>,
    last_search: Option<MoveResult>,
    timer: Option<TurnTimer>,
    engine: AIEngine<R>,
}

impl Game<ChaCha8Rng> {
    /// Start a game with an engine seeded from `config.seed`.
    pub fn new(config: GameConfig, mode: GameMode) -> GameResult<Self> {
        let engine = AIEngine::from_seed_option(config.seed);
        Self::with_engine(config, mode, engine)
    }

    /// Start a game on a prepared position, `to_move` to play.
    ///
    /// Fails for a `to_move` of `Stone::Empty`. See
    /// [`load_position`](Game::load_position) for how finished positions
    /// are recorded.
    pub fn from_position(
        config: GameConfig,
        mode: GameMode,
        board: Board,
        to_move: Stone,
    ) -> GameResult<Self> {
        let mut game = Self::new(config.with_board_size(board.size()), mode)?;
        game.load_position(board, to_move)?;
        Ok(game)
    }
}

impl<R: Rng> Game<R> {
    /// Start a game with a caller-supplied engine (and random source).
    pub fn with_engine(config: GameConfig, mode: GameMode, engine: AIEngine<R>) -> GameResult<Self> {
        validate_size(config.board_size)?;
        let mut game = Self {
            board: Board::new(config.board_size),
            config,
            mode,
            to_move: Stone::Black,
            outcome: Outcome::InProgress,
            last_move: None,
            move_history: Vec::new(),
            winning_line: None,
            last_search: None,
            timer: None,
            engine,
        };
        game.start_game(game.config.board_size, mode)?;
        Ok(game)
    }

    /// Reset to an empty board of `board_size` in `mode`. Black moves first.
    ///
    /// Any pending automated move or exhibition timer is discarded.
    pub fn start_game(&mut self, board_size: usize, mode: GameMode) -> GameResult<()> {
        validate_size(board_size)?;
        self.reset(Board::new(board_size), Stone::Black, mode);
        info!(size = board_size, ?mode, "game started");
        Ok(())
    }

    /// Restart with the same board size in a different mode
    pub fn set_mode(&mut self, mode: GameMode) -> GameResult<()> {
        self.start_game(self.board.size(), mode)
    }

    /// Replace the game with a prepared position, keeping the mode.
    ///
    /// A position that already holds five in a row is loaded as won by
    /// that color. A full board without five is a draw.
    pub fn load_position(&mut self, board: Board, to_move: Stone) -> GameResult<()> {
        validate_size(board.size())?;
        if !to_move.is_player() {
            return Err(GameError::InvalidPlayer { stone: to_move });
        }
        let size = board.size();
        self.reset(board, to_move, self.mode);

        let five = self
            .board
            .occupied_cells()
            .find(|&pos| check_win(&self.board, pos));
        if let Some(pos) = five {
            self.winning_line = winning_line(&self.board, pos);
            self.finish(Outcome::Win(self.board.get(pos)));
        } else if self.board.is_full() {
            self.finish(Outcome::Draw);
        }
        info!(size, stones = self.board.stone_count(), %to_move, "position loaded");
        Ok(())
    }

    fn reset(&mut self, board: Board, to_move: Stone, mode: GameMode) {
        if self.timer.take().is_some() {
            debug!("discarding pending automated move");
        }
        self.config.board_size = board.size();
        self.board = board;
        self.mode = mode;
        self.to_move = to_move;
        self.outcome = Outcome::InProgress;
        self.last_move = None;
        self.move_history.clear();
        self.winning_line = None;
        self.last_search = None;
        self.timer = match mode {
            GameMode::AiVsAi => Some(TurnTimer::repeating(self.config.exhibition_cadence)),
            _ => None,
        };
        self.schedule_turn();
    }

    /// Place a stone for the human whose turn it is.
    ///
    /// Rejected without touching the board when the game is over, when
    /// the side to move is automated, or when the cell is off the board
    /// or occupied.
    pub fn submit_human_move(&mut self, row: usize, col: usize) -> Result<Outcome, MoveError> {
        if self.outcome.is_over() {
            return Err(MoveError::GameOver);
        }
        if self.mode.is_automated(self.to_move) {
            return Err(MoveError::NotYourTurn {
                to_move: self.to_move,
            });
        }
        let size = self.board.size();
        if row >= size || col >= size {
            return Err(MoveError::OutOfBounds { row, col, size });
        }
        let pos = Pos::new(row as u8, col as u8);
        if !self.board.is_empty(pos) {
            return Err(MoveError::Occupied { row, col });
        }

        Ok(self.apply_move(pos))
    }

    /// Advance the clock by `elapsed`. Applies the pending automated move
    /// when its timer runs out and returns where it was played.
    ///
    /// At most one ply is played per call. Time past the deadline is
    /// carried into the next exhibition period, so after a long stall
    /// [`next_due`](Game::next_due) reports zero until the backlog is
    /// played out.
    pub fn tick(&mut self, elapsed: Duration) -> Option<Pos> {
        let timer = self.timer.as_mut()?;
        if !timer.advance(elapsed) {
            return None;
        }
        if timer.is_repeating() {
            timer.rearm();
        } else {
            self.timer = None;
        }

        let plies = self.move_history.len();
        self.run_automated_turn();
        self.last_move.filter(|_| self.move_history.len() > plies)
    }

    /// Play the pending automated turn now instead of waiting for its timer.
    pub fn play_automated_turn(&mut self) -> Result<Outcome, MoveError> {
        if self.outcome.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.mode.is_automated(self.to_move) {
            return Err(MoveError::NotYourTurn {
                to_move: self.to_move,
            });
        }
        // A forced step restarts the exhibition cadence and consumes a one-shot
        self.timer = self.timer.filter(TurnTimer::is_repeating).map(|mut t| {
            t.rearm();
            t
        });
        self.run_automated_turn();
        Ok(self.outcome)
    }

    /// Stop a running exhibition. Returns false if none was running.
    pub fn stop_exhibition(&mut self) -> bool {
        if self.timer.is_some_and(|t| t.is_repeating()) {
            self.timer = None;
            info!(plies = self.move_history.len(), "exhibition stopped");
            true
        } else {
            false
        }
    }

    /// Restart a stopped exhibition. Returns false if there is nothing to resume.
    pub fn resume_exhibition(&mut self) -> bool {
        if self.mode != GameMode::AiVsAi || self.outcome.is_over() || self.timer.is_some() {
            return false;
        }
        self.timer = Some(TurnTimer::repeating(self.config.exhibition_cadence));
        info!(plies = self.move_history.len(), "exhibition resumed");
        true
    }

    fn run_automated_turn(&mut self) {
        let color = self.to_move;
        let result = self.engine.get_move_with_stats(&self.board, color);
        let best_move = result.best_move;
        self.last_search = Some(result);

        match best_move {
            Some(pos) => {
                self.apply_move(pos);
            }
            None => self.finish(Outcome::Draw),
        }
    }

    /// Place a legal stone for the side to move, then detect a win or
    /// draw or hand the turn over.
    fn apply_move(&mut self, pos: Pos) -> Outcome {
        let color = self.to_move;
        self.board.place_stone(pos, color);
        self.move_history.push((pos, color));
        self.last_move = Some(pos);
        debug!(%color, %pos, ply = self.move_history.len(), "stone placed");

        if check_win(&self.board, pos) {
            self.winning_line = winning_line(&self.board, pos);
            self.finish(Outcome::Win(color));
        } else if self.board.is_full() {
            self.finish(Outcome::Draw);
        } else {
            self.to_move = color.opponent();
            self.schedule_turn();
        }
        self.outcome
    }

    /// Arm the one-shot delay when the engine moves next in a
    /// human-vs-automated game. Exhibition timers re-arm themselves.
    fn schedule_turn(&mut self) {
        if let GameMode::HumanVsAi { .. } = self.mode {
            self.timer = self
                .mode
                .is_automated(self.to_move)
                .then(|| TurnTimer::one_shot(self.config.ai_delay));
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        self.outcome = outcome;
        self.timer = None;
        info!(?outcome, plies = self.move_history.len(), "game over");
    }

    // Accessors for the rendering layer

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Owned copy of the board
    pub fn board_snapshot(&self) -> Board {
        self.board.clone()
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn to_move(&self) -> Stone {
        self.to_move
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    pub fn move_history(&self) -> &[(Pos, Stone)] {
        &self.move_history
    }

    /// Stones of the winning run, once the game is won
    pub fn winning_line(&self) -> Option<&[Pos]> {
        self.winning_line.as_deref()
    }

    /// Statistics of the most recent automated move
    pub fn last_search(&self) -> Option<&MoveResult> {
        self.last_search.as_ref()
    }

    /// Time until the pending automated move fires
    pub fn next_due(&self) -> Option<Duration> {
        self.timer.map(|t| t.remaining())
    }

    pub fn phase(&self) -> Phase {
        if self.outcome.is_over() {
            return Phase::GameOver(self.outcome);
        }
        let color = self.to_move;
        match self.mode {
            GameMode::AiVsAi if self.timer.is_some() => Phase::ExhibitionRunning(color),
            GameMode::AiVsAi => Phase::Paused(color),
            mode if mode.is_automated(color) => Phase::AutomatedTurn(color),
            _ => Phase::AwaitingHumanMove(color),
        }
    }
}

fn validate_size(size: usize) -> GameResult<()> {
    if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(GameError::InvalidBoardSize { size })
    }
}
