//! Game session management for the GUI
//!
//! The session owns the [`Game`] and keeps the window responsive while the
//! engine thinks: the search runs on a worker thread over a cloned board and
//! the UI polls a channel for the result. Resetting mid-search cancels the
//! worker and discards whatever it sends back.

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crate::board::Pos;
use crate::engine::{AiEngine, MoveResult, DEFAULT_DEPTH};
use crate::game::{Game, Phase};

/// Engine computation state
enum EngineState {
    Idle,
    Thinking {
        engine: Arc<AiEngine>,
        receiver: Receiver<MoveResult>,
        started: Instant,
    },
}

/// One GUI game session
pub struct Session {
    pub game: Game,
    engine_state: EngineState,
    /// Statistics of the engine's most recent move
    pub last_result: Option<MoveResult>,
    /// Status line shown when a move was rejected or the worker failed
    pub message: Option<String>,
    depth: u8,
}

impl Session {
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            engine_state: EngineState::Idle,
            last_result: None,
            message: None,
            depth: DEFAULT_DEPTH,
        }
    }

    /// Abandon the current game and start over.
    pub fn reset(&mut self) {
        if let EngineState::Thinking { engine, .. } = &self.engine_state {
            engine.cancel();
        }
        self.engine_state = EngineState::Idle;
        self.game = Game::new();
        self.last_result = None;
        self.message = None;
    }

    pub fn is_thinking(&self) -> bool {
        matches!(self.engine_state, EngineState::Thinking { .. })
    }

    /// How long the current search has been running
    pub fn thinking_elapsed(&self) -> Option<Duration> {
        match &self.engine_state {
            EngineState::Thinking { started, .. } => Some(started.elapsed()),
            EngineState::Idle => None,
        }
    }

    /// True when a board click should place a human stone
    pub fn accepts_clicks(&self) -> bool {
        self.game.phase() == Phase::HumanTurn && !self.is_thinking()
    }

    /// Handle a board click on the human's turn
    pub fn handle_click(&mut self, pos: Pos) {
        if !self.accepts_clicks() {
            return;
        }
        match self.game.play_human(pos) {
            Ok(()) => self.message = None,
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    /// Per-frame driver: collect a finished search, then start one if due.
    pub fn poll(&mut self) {
        self.collect_result();
        self.start_thinking_if_due();
    }

    fn start_thinking_if_due(&mut self) {
        if self.game.phase() != Phase::EngineTurn || self.is_thinking() {
            return;
        }

        let board = self.game.board().clone();
        let engine = Arc::new(AiEngine::new(self.game.engine_color(), self.depth));
        let worker = Arc::clone(&engine);
        let (tx, rx) = channel();

        thread::spawn(move || {
            let _ = tx.send(worker.get_move_with_stats(&board));
        });

        self.engine_state = EngineState::Thinking {
            engine,
            receiver: rx,
            started: Instant::now(),
        };
    }

    fn collect_result(&mut self) {
        let result = match &self.engine_state {
            EngineState::Thinking { receiver, .. } => match receiver.try_recv() {
                Ok(result) => result,
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    self.engine_state = EngineState::Idle;
                    self.message = Some("engine worker disappeared".to_string());
                    return;
                }
            },
            EngineState::Idle => return,
        };

        self.engine_state = EngineState::Idle;

        if let Some(pos) = result.pos {
            if let Err(err) = self.game.apply_engine_move(pos) {
                self.message = Some(err.to_string());
            }
        } else {
            self.message = Some("engine found no move".to_string());
        }
        self.last_result = Some(result);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
