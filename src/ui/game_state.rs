//! Game state management for the Gomoku GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use crate::board::{Board, Pos, Stone, WIN_LENGTH};
use crate::config::{GameConfig, PlayerKind};
use crate::engine::{build_agent, Agent, AgentKind, MoveResult, SearchAgent};
use crate::rules::{find_five_positions, GameStatus};
use crate::search::Searcher;

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Human against an agent; `human` is the human's colour
    HumanVsAgent { human: Stone },
    /// Two humans at one screen (hotseat)
    HumanVsHuman,
    /// Agents on both sides
    AgentVsAgent,
}

/// Agent computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Game result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    /// `None` for a draw
    pub winner: Option<Stone>,
    pub winning_line: Option<[Pos; WIN_LENGTH]>,
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.last_move_duration = Some(duration);
        self.start_time = None;
        duration
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub config: GameConfig,
    pub game_over: Option<GameResult>,
    pub last_move: Option<Pos>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub suggested_move: Option<Pos>,
    pub message: Option<String>,
}

impl GameState {
    /// Start a game with the players named in `config`
    pub fn new(config: GameConfig) -> crate::Result<Self> {
        let board = Board::new(config.board_size)?;
        log::info!(
            "new game on {}x{}: X {} / O {}",
            board.size(),
            board.size(),
            config.x,
            config.o
        );
        Ok(Self {
            board,
            config,
            game_over: None,
            last_move: None,
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            suggested_move: None,
            message: None,
        })
    }

    /// Start a game in `mode`, keeping board size and search settings from
    /// `config`. Agent sides keep their configured agent, or alpha-beta if
    /// the side was human.
    pub fn with_mode(mode: GameMode, config: GameConfig) -> crate::Result<Self> {
        let agent_for = |stone: Stone| {
            PlayerKind::Agent(config.player(stone).agent().unwrap_or(AgentKind::AlphaBeta))
        };
        let (x, o) = match mode {
            GameMode::HumanVsAgent { human: Stone::O } => (agent_for(Stone::X), PlayerKind::Human),
            GameMode::HumanVsAgent { .. } => (PlayerKind::Human, agent_for(Stone::O)),
            GameMode::HumanVsHuman => (PlayerKind::Human, PlayerKind::Human),
            GameMode::AgentVsAgent => (agent_for(Stone::X), agent_for(Stone::O)),
        };
        Self::new(GameConfig { x, o, ..config })
    }

    /// Clear the board for a new game with the same players.
    pub fn reset(&mut self) {
        self.board = self.board.cleared();
        self.game_over = None;
        self.last_move = None;
        self.last_ai_result = None;
        self.ai_state = AiState::Idle;
        self.move_timer = MoveTimer::default();
        self.suggested_move = None;
        self.message = None;
    }

    pub fn mode(&self) -> GameMode {
        match (self.config.x.is_human(), self.config.o.is_human()) {
            (true, true) => GameMode::HumanVsHuman,
            (true, false) => GameMode::HumanVsAgent { human: Stone::X },
            (false, true) => GameMode::HumanVsAgent { human: Stone::O },
            (false, false) => GameMode::AgentVsAgent,
        }
    }

    pub fn current_turn(&self) -> Stone {
        self.board.turn()
    }

    pub fn move_count(&self) -> u32 {
        self.board.stone_count()
    }

    /// Check if it's a human's turn
    pub fn is_human_turn(&self) -> bool {
        self.config.player(self.current_turn()).is_human()
    }

    /// Check if it's an agent's turn
    pub fn is_ai_turn(&self) -> bool {
        !self.is_human_turn()
    }

    /// Check if an agent is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt to place a human stone at the given position
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), String> {
        if self.game_over.is_some() {
            return Err("Game is over".to_string());
        }

        if self.is_ai_thinking() {
            return Err("Agent is thinking".to_string());
        }

        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        self.execute_move(pos).map_err(|err| err.to_string())
    }

    /// Execute a move (for both human and agent)
    fn execute_move(&mut self, pos: Pos) -> crate::Result<()> {
        self.board.apply_move(pos)?;

        self.last_move = Some(pos);
        self.suggested_move = None;
        self.message = None;
        self.move_timer.stop();

        if let Some(result) = self.check_game_over() {
            match result.winner {
                Some(winner) => log::info!("{:?} wins with {}", winner, pos),
                None => log::info!("draw after {} moves", self.move_count()),
            }
            self.game_over = Some(result);
            return Ok(());
        }

        self.move_timer.start();
        Ok(())
    }

    fn check_game_over(&self) -> Option<GameResult> {
        match self.board.status() {
            GameStatus::Win(winner) => Some(GameResult {
                winner: Some(winner),
                winning_line: find_five_positions(&self.board, winner),
            }),
            GameStatus::Draw => Some(GameResult {
                winner: None,
                winning_line: None,
            }),
            GameStatus::Ongoing => None,
        }
    }

    /// Start agent thinking on a worker thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.game_over.is_some() {
            return;
        }
        let Some(kind) = self.config.player(self.current_turn()).agent() else {
            return;
        };

        let board = self.board.clone();
        let depth = self.config.search_depth;
        let eval = self.config.eval_config();

        let (tx, rx) = channel();

        thread::spawn(move || {
            let mut agent = build_agent(kind, depth, eval);
            let result = agent.select_move(&board);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if the agent has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking {
                receiver,
                start_time,
            } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("Agent stopped without a move".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((move_result, elapsed)) = result {
            self.ai_state = AiState::Idle;
            self.move_timer.set_ai_time(elapsed);
            let best_move = move_result.best_move;
            self.last_ai_result = Some(move_result);

            match best_move {
                Some(pos) => {
                    if let Err(err) = self.execute_move(pos) {
                        log::warn!("agent move {pos} rejected: {err}");
                        self.message = Some(err.to_string());
                    }
                }
                None => self.message = Some("Agent could not find a move".to_string()),
            }
        }
    }

    /// Get agent thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Request a move suggestion for the side to move
    pub fn request_suggestion(&mut self) {
        if self.game_over.is_some() || self.is_ai_thinking() {
            return;
        }

        let searcher = Searcher::alpha_beta(self.config.search_depth)
            .with_eval(self.config.eval_config());
        let result = SearchAgent::new(searcher).select_move(&self.board);

        self.suggested_move = result.best_move;
        self.last_ai_result = Some(result);
    }
}
