//! Game state management for the four-in-a-row GUI

use crate::error::MoveError;
use crate::rules::winning_line;
use crate::{AIPlayer, Board, MoveResult, Pos, Stone, WIN_LENGTH};
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE { human_color: Stone },
    /// Player vs Player (hotseat)
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE { human_color: Stone::Black }
    }
}

/// AI computation state
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
    /// `None` for a draw on a full board
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
    pub mode: GameMode,
    pub current_turn: Stone,
    pub game_over: Option<GameResult>,
    pub last_move: Option<Pos>,
    pub move_history: Vec<(Pos, Stone)>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub suggested_move: Option<Pos>,
    pub message: Option<String>,

    // AI engine configuration
    ai_depth: u8,
    think_delay: Duration,
}

impl GameState {
    pub fn new(mode: GameMode) -> Self {
        Self::with_ai(mode, crate::engine::DEFAULT_DEPTH, Duration::ZERO)
    }

    pub fn with_ai(mode: GameMode, ai_depth: u8, think_delay: Duration) -> Self {
        info!(?mode, ai_depth, "new game");
        Self {
            board: Board::new(),
            mode,
            current_turn: Stone::Black,
            game_over: None,
            last_move: None,
            move_history: Vec::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            suggested_move: None,
            message: None,
            ai_depth,
            think_delay,
        }
    }

    /// Restart with the same mode and AI settings
    pub fn reset(&mut self) {
        *self = Self::with_ai(self.mode, self.ai_depth, self.think_delay);
    }

    pub fn ai_depth(&self) -> u8 {
        self.ai_depth
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_color } => self.current_turn == human_color,
            GameMode::PvP => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_color } => self.current_turn != human_color,
            GameMode::PvP => false,
        }
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt to place a human stone at signed coordinates
    pub fn try_place_stone(&mut self, row: i32, col: i32) -> Result<(), MoveError> {
        if self.game_over.is_some() {
            return Err(MoveError::GameOver);
        }

        if self.is_ai_thinking() {
            return Err(MoveError::AiThinking);
        }

        if !self.is_human_turn() {
            return Err(MoveError::NotYourTurn);
        }

        let pos = Pos::checked(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        if !self.board.is_empty(pos) {
            return Err(MoveError::Occupied(pos));
        }

        self.execute_move(pos);
        Ok(())
    }

    /// Execute a move (for both human and AI); `false` if the cell is taken
    fn execute_move(&mut self, pos: Pos) -> bool {
        let color = self.current_turn;

        if !self.board.place(pos, color) {
            return false;
        }

        self.move_history.push((pos, color));
        self.last_move = Some(pos);
        self.suggested_move = None;
        self.move_timer.stop();
        self.message = None;

        if self.board.check_winner(pos.row as i32, pos.col as i32, color) {
            info!(winner = ?color, %pos, moves = self.move_history.len(), "game won");
            self.game_over = Some(GameResult {
                winner: Some(color),
                winning_line: winning_line(&self.board, pos, color),
            });
            return true;
        }

        if self.board.is_board_full() {
            info!(moves = self.move_history.len(), "game drawn");
            self.game_over = Some(GameResult {
                winner: None,
                winning_line: None,
            });
            return true;
        }

        self.current_turn = color.opponent();
        self.move_timer.start();
        true
    }

    /// Start AI thinking on a background thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.game_over.is_some() {
            return;
        }

        let board = self.board.clone();
        let ai = AIPlayer::new(self.current_turn, self.ai_depth);
        let think_delay = self.think_delay;

        let (tx, rx) = channel();

        thread::spawn(move || {
            let start = Instant::now();
            let result = ai.get_move_with_stats(&board);
            if let Some(rest) = think_delay.checked_sub(start.elapsed()) {
                thread::sleep(rest);
            }
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, start_time } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(std::sync::mpsc::TryRecvError::Empty) => None,
                Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((move_result, elapsed)) = result {
            self.ai_state = AiState::Idle;
            self.move_timer.set_ai_time(elapsed);
            self.apply_ai_result(move_result);
        }
    }

    /// Play the AI's chosen move, ending the game if it has none or picks an
    /// illegal one
    fn apply_ai_result(&mut self, move_result: MoveResult) {
        self.last_ai_result = Some(move_result.clone());

        let Some(pos) = move_result.best_move else {
            warn!("AI found no move");
            self.message = Some("AI could not find a move".to_string());
            self.game_over = Some(GameResult {
                winner: None,
                winning_line: None,
            });
            return;
        };

        if !self.execute_move(pos) {
            warn!(%pos, "AI chose an occupied intersection");
            self.message = Some(format!("AI chose an invalid move {pos}"));
            self.game_over = Some(GameResult {
                winner: None,
                winning_line: None,
            });
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Request move suggestion for PvP mode
    pub fn request_suggestion(&mut self) {
        if self.game_over.is_some() || self.is_ai_thinking() {
            return;
        }

        // Quick suggestion at reduced depth
        let ai = AIPlayer::new(self.current_turn, self.ai_depth.min(2));
        let result = ai.get_move_with_stats(&self.board);

        self.suggested_move = result.best_move;
        self.last_ai_result = Some(result);
    }

    /// Undo last move
    pub fn undo(&mut self) {
        if self.move_history.is_empty() || self.is_ai_thinking() {
            return;
        }

        // For PvE, undo two moves (human + AI)
        let undo_count = match self.mode {
            GameMode::PvE { .. } if self.move_history.len() >= 2 => 2,
            _ => 1,
        };

        // Simple undo: reset and replay
        let moves_to_keep = self.move_history.len().saturating_sub(undo_count);
        let moves: Vec<_> = self.move_history.drain(..moves_to_keep).collect();

        self.board = Board::new();
        self.current_turn = Stone::Black;
        self.game_over = None;
        self.last_move = None;
        self.suggested_move = None;
        self.move_history.clear();

        for (pos, color) in moves {
            self.board.place(pos, color);
            self.move_history.push((pos, color));
            self.last_move = Some(pos);
            self.current_turn = color.opponent();
        }

        self.move_timer.start();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(state: &mut GameState, moves: &[(i32, i32)]) {
        for &(r, c) in moves {
            state.try_place_stone(r, c).unwrap();
        }
    }

    #[test]
    fn test_turns_alternate() {
        let mut state = GameState::new(GameMode::PvP);
        assert_eq!(state.current_turn, Stone::Black);
        play(&mut state, &[(0, 0)]);
        assert_eq!(state.current_turn, Stone::White);
        assert_eq!(state.board.get(Pos::new(0, 0)), Stone::Black);
        assert_eq!(state.last_move, Some(Pos::new(0, 0)));
    }

    #[test]
    fn test_rejected_moves() {
        let mut state = GameState::new(GameMode::PvP);
        play(&mut state, &[(4, 4)]);
        assert_eq!(
            state.try_place_stone(4, 4),
            Err(MoveError::Occupied(Pos::new(4, 4)))
        );
        assert_eq!(
            state.try_place_stone(20, 0),
            Err(MoveError::OutOfBounds { row: 20, col: 0 })
        );
        // Rejections keep the turn
        assert_eq!(state.current_turn, Stone::White);
    }

    #[test]
    fn test_not_human_turn_in_pve() {
        let mut state = GameState::new(GameMode::PvE { human_color: Stone::White });
        assert!(state.is_ai_turn());
        assert_eq!(state.try_place_stone(0, 0), Err(MoveError::NotYourTurn));
    }

    #[test]
    fn test_four_in_row_ends_game() {
        let mut state = GameState::new(GameMode::PvP);
        play(
            &mut state,
            &[(10, 5), (0, 0), (10, 6), (0, 1), (10, 7), (0, 2), (10, 8)],
        );
        let result = state.game_over.unwrap();
        assert_eq!(result.winner, Some(Stone::Black));
        assert_eq!(
            result.winning_line,
            Some([Pos::new(10, 5), Pos::new(10, 6), Pos::new(10, 7), Pos::new(10, 8)])
        );
        assert_eq!(state.try_place_stone(5, 5), Err(MoveError::GameOver));
    }

    #[test]
    fn test_undo_pvp_single_move() {
        let mut state = GameState::new(GameMode::PvP);
        play(&mut state, &[(1, 1), (2, 2)]);
        state.undo();
        assert_eq!(state.move_history, vec![(Pos::new(1, 1), Stone::Black)]);
        assert_eq!(state.board.get(Pos::new(2, 2)), Stone::Empty);
        assert_eq!(state.current_turn, Stone::White);
    }

    #[test]
    fn test_undo_clears_game_over() {
        let mut state = GameState::new(GameMode::PvP);
        play(
            &mut state,
            &[(3, 0), (5, 5), (3, 1), (5, 7), (3, 2), (5, 9), (3, 3)],
        );
        assert!(state.game_over.is_some());
        state.undo();
        assert!(state.game_over.is_none());
        assert_eq!(state.current_turn, Stone::Black);
        assert_eq!(state.move_history.len(), 6);
    }

    #[test]
    fn test_ai_result_applied() {
        let mut state = GameState::new(GameMode::PvE { human_color: Stone::Black });
        play(&mut state, &[(10, 10)]);
        assert!(state.is_ai_turn());

        let ai = AIPlayer::new(Stone::White, 2);
        let result = ai.get_move_with_stats(&state.board);
        let chosen = result.best_move.unwrap();
        state.apply_ai_result(result);

        assert_eq!(state.board.get(chosen), Stone::White);
        assert!(state.is_human_turn());
    }

    #[test]
    fn test_ai_without_move_stops_game() {
        let mut state = GameState::new(GameMode::PvE { human_color: Stone::White });
        state.apply_ai_result(MoveResult {
            best_move: None,
            score: 0,
            search_type: crate::SearchType::AlphaBeta,
            time_ms: 0,
            nodes: 0,
        });
        assert!(state.game_over.is_some());
        assert!(state.message.is_some());
    }

    #[test]
    fn test_reset_keeps_mode() {
        let mut state = GameState::with_ai(GameMode::PvP, 2, Duration::ZERO);
        play(&mut state, &[(0, 0)]);
        state.reset();
        assert_eq!(state.mode, GameMode::PvP);
        assert_eq!(state.ai_depth(), 2);
        assert!(state.move_history.is_empty());
        assert!(state.board.is_board_empty());
    }

    #[test]
    fn test_suggestion_on_empty_board() {
        let mut state = GameState::new(GameMode::PvP);
        state.request_suggestion();
        assert_eq!(state.suggested_move, Some(Pos::new(10, 10)));
    }
}
