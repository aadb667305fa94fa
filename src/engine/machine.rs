//! The turn sequencer.
//!
//! `GameStateMachine` owns the board, both stone supplies and the turn
//! state. Two commands drive it: a position click and a restart. Every
//! illegal click is consumed without effect; the return value says what a
//! click actually did.
//!
//! ## Example
//!
//! ```
//! use morris_engine::engine::{ClickOutcome, GameEvent, GameStateMachine};
//! use morris_engine::core::Player;
//!
//! let mut game = GameStateMachine::default();
//!
//! assert_eq!(game.on_position_clicked(0), ClickOutcome::Placed);
//! assert_eq!(game.current_player(), Player::Two);
//!
//! // Occupied: silently ignored, still Player 2's turn
//! assert_eq!(game.on_position_clicked(0), ClickOutcome::Ignored);
//! assert_eq!(game.current_player(), Player::Two);
//!
//! let events = game.drain_events();
//! assert!(events.contains(&GameEvent::CurrentPlayerChanged(Player::Two)));
//! ```

use tracing::{debug, instrument, trace};

use crate::board::Board;
use crate::core::{GameConfig, GamePhase, Player, PlayerMap, Position, StoneCounts};
use crate::rules::{self, GameResult};

use super::events::GameEvent;
use super::turn::TurnState;

/// What a single click did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum ClickOutcome {
    /// Rejected; nothing changed.
    Ignored,
    /// A stone was picked up for a move.
    Selected,
    /// The pending selection was dropped (re-click or illegal destination).
    Deselected,
    /// A stone was placed from hand.
    Placed,
    /// A selected stone moved.
    Moved,
    /// An opponent stone was captured.
    Captured,
}

/// Nine Men's Morris rules engine driven by position clicks.
#[derive(Clone, Debug)]
pub struct GameStateMachine {
    config: GameConfig,
    board: Board,
    stones: PlayerMap<StoneCounts>,
    turn: TurnState,
    events: Vec<GameEvent>,
}

impl Default for GameStateMachine {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl GameStateMachine {
    /// Start a new game.
    ///
    /// ## Panics
    ///
    /// Panics if `config` is invalid.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        config.assert_valid();
        Self {
            stones: PlayerMap::with_value(StoneCounts::starting(config.stones_per_player)),
            turn: TurnState::new(config.first_player),
            board: Board::new(),
            events: Vec::new(),
            config,
        }
    }

    /// Resume from an arbitrary mid-game position.
    ///
    /// Used to set up analysis positions and test scenarios.
    ///
    /// ## Panics
    ///
    /// Panics if the counters disagree with the board or exceed the supply.
    #[must_use]
    pub fn from_parts(
        config: GameConfig,
        board: Board,
        stones: PlayerMap<StoneCounts>,
        turn: TurnState,
    ) -> Self {
        config.assert_valid();
        for (player, counts) in stones.iter() {
            assert!(
                counts.total() <= config.stones_per_player,
                "{player} holds more stones than the supply"
            );
            assert_eq!(
                usize::from(counts.on_board),
                board.count_owned_by(player),
                "{player} on-board count disagrees with the board"
            );
        }
        Self {
            config,
            board,
            stones,
            turn,
            events: Vec::new(),
        }
    }

    // === Queries ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    #[must_use]
    pub fn current_player(&self) -> Player {
        self.turn.current_player
    }

    /// Phase of the player to act.
    #[must_use]
    pub fn current_phase(&self) -> GamePhase {
        self.turn.current_phase()
    }

    #[must_use]
    pub fn phase_of(&self, player: Player) -> GamePhase {
        self.turn.phase_of(player)
    }

    #[must_use]
    pub fn stones(&self, player: Player) -> StoneCounts {
        self.stones[player]
    }

    #[must_use]
    pub fn removal_pending(&self) -> bool {
        self.turn.removal_pending
    }

    #[must_use]
    pub fn selected(&self) -> Option<Position> {
        self.turn.selected
    }

    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.turn.winner()
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.turn.result
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.turn.is_game_over()
    }

    /// Where the current player's stone at `from` may legally go.
    ///
    /// Empty unless `from` holds a current-player stone that can move now
    /// (not during Placement, a pending capture, or after the game).
    #[must_use]
    pub fn valid_destinations(&self, from: Position) -> Vec<Position> {
        if self.is_game_over()
            || self.turn.removal_pending
            || self.board.owner_at(from) != Some(self.turn.current_player)
        {
            return Vec::new();
        }
        match self.current_phase() {
            GamePhase::Placement => Vec::new(),
            GamePhase::Movement => self
                .board
                .neighbors(from)
                .into_iter()
                .filter(|&to| self.board.is_empty(to))
                .collect(),
            GamePhase::Flying => self.board.empty_positions().collect(),
        }
    }

    /// Stones the current player may capture. Empty unless a capture is pending.
    #[must_use]
    pub fn removable_positions(&self) -> Vec<Position> {
        if self.turn.removal_pending {
            rules::removable_positions(&self.board, self.turn.current_player.opponent())
        } else {
            Vec::new()
        }
    }

    /// Take every event queued since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // === Commands ===

    /// Handle a click on board index `raw_index`.
    #[instrument(skip(self), fields(player = %self.turn.current_player))]
    pub fn on_position_clicked(&mut self, raw_index: usize) -> ClickOutcome {
        if self.is_game_over() {
            trace!("game over, click ignored");
            return ClickOutcome::Ignored;
        }
        let Some(pos) = Position::from_index(raw_index) else {
            trace!("no such position");
            return ClickOutcome::Ignored;
        };

        let outcome = if self.turn.removal_pending {
            self.capture(pos)
        } else {
            match self.current_phase() {
                GamePhase::Placement => self.place(pos),
                GamePhase::Movement | GamePhase::Flying => self.select_or_move(pos),
            }
        };

        if !outcome.is_ignored() {
            self.check_invariants();
        }
        outcome
    }

    /// Reset board, supplies and turn state to the start of a game.
    #[instrument(skip(self))]
    pub fn on_restart_requested(&mut self) {
        let first = self.config.first_player;
        self.board.clear();
        self.stones = PlayerMap::with_value(StoneCounts::starting(self.config.stones_per_player));
        self.turn = TurnState::new(first);

        self.events.push(GameEvent::Restarted);
        for (player, &counts) in self.stones.iter() {
            self.events.push(GameEvent::StonesChanged { player, counts });
        }
        self.events.push(GameEvent::CurrentPlayerChanged(first));
        self.events.push(GameEvent::PhaseChanged(GamePhase::Placement));
        debug!("game restarted");
    }

    // === Transitions ===

    fn place(&mut self, pos: Position) -> ClickOutcome {
        let player = self.turn.current_player;
        if self.stones[player].in_hand == 0 {
            trace!("no stones left in hand");
            return ClickOutcome::Ignored;
        }
        if !self.board.place(pos, player) {
            trace!(%pos, "position occupied");
            return ClickOutcome::Ignored;
        }

        let counts = &mut self.stones[player];
        counts.in_hand -= 1;
        counts.on_board += 1;
        let counts = *counts;
        self.events.push(GameEvent::StonePlaced { player, at: pos });
        self.events.push(GameEvent::StonesChanged { player, counts });
        debug!(%pos, in_hand = counts.in_hand, "stone placed");

        if rules::forms_mill(&self.board, pos, player) {
            self.begin_capture(GamePhase::Placement);
        } else {
            self.complete_turn(GamePhase::Placement);
        }
        ClickOutcome::Placed
    }

    fn select_or_move(&mut self, pos: Position) -> ClickOutcome {
        let player = self.turn.current_player;
        let Some(from) = self.turn.selected else {
            if self.board.owner_at(pos) != Some(player) {
                trace!(%pos, "not one of the current player's stones");
                return ClickOutcome::Ignored;
            }
            self.turn.selected = Some(pos);
            self.events.push(GameEvent::SelectionChanged(Some(pos)));
            return ClickOutcome::Selected;
        };

        let phase = self.current_phase();
        let legal = match phase {
            GamePhase::Flying => self.board.is_empty(pos),
            _ => self.board.can_step_move(from, pos),
        };
        if from == pos || !legal {
            if from != pos {
                trace!(%from, to = %pos, %phase, "illegal destination");
            }
            self.clear_selection();
            return ClickOutcome::Deselected;
        }

        self.clear_selection();
        let moved = self.board.move_stone(from, pos);
        debug_assert!(moved, "validated move rejected by the board");
        self.events.push(GameEvent::StoneMoved { player, from, to: pos });
        debug!(%from, to = %pos, %phase, "stone moved");

        if rules::forms_mill(&self.board, pos, player) {
            self.begin_capture(phase);
            return ClickOutcome::Moved;
        }

        if phase.is_movement()
            && self.config.flying_enabled
            && self.stones[player].on_board <= self.config.flying_threshold
        {
            self.turn.flying[player] = true;
            self.events.push(GameEvent::FlyingEntered(player));
            debug!(on_board = self.stones[player].on_board, "entered flying");
        }
        self.complete_turn(phase);
        ClickOutcome::Moved
    }

    fn capture(&mut self, pos: Position) -> ClickOutcome {
        let defender = self.turn.current_player.opponent();
        if !rules::can_capture(&self.board, pos, defender) {
            trace!(%pos, "not a capturable stone");
            return ClickOutcome::Ignored;
        }

        self.board.remove(pos);
        let counts = &mut self.stones[defender];
        counts.on_board -= 1;
        let counts = *counts;
        self.turn.removal_pending = false;
        self.events.push(GameEvent::StoneRemoved {
            player: defender,
            at: pos,
        });
        self.events.push(GameEvent::StonesChanged {
            player: defender,
            counts,
        });
        debug!(%pos, %defender, on_board = counts.on_board, "stone captured");

        self.complete_turn(self.current_phase());
        ClickOutcome::Captured
    }

    /// A mill just closed; prompt for a capture unless there is nothing to take.
    fn begin_capture(&mut self, acted_under: GamePhase) {
        let player = self.turn.current_player;
        if self.stones[player.opponent()].on_board == 0 {
            debug!("mill closed with no stone to capture");
            self.complete_turn(acted_under);
            return;
        }
        self.turn.removal_pending = true;
        self.events.push(GameEvent::RemovalPending(player));
        debug!("mill closed, awaiting capture");
    }

    /// End the current player's turn: close Placement if both hands are
    /// empty, then either end the game or hand over to the opponent.
    fn complete_turn(&mut self, acted_under: GamePhase) {
        let mover = self.turn.current_player;
        let next = mover.opponent();

        if self.turn.global_phase.is_placement()
            && self.stones.iter().all(|(_, counts)| counts.in_hand == 0)
        {
            self.turn.global_phase = GamePhase::Movement;
            debug!("placement finished");
        }
        self.turn.turn_number += 1;

        let next_phase = self.turn.phase_of(next);
        if let Some(reason) =
            rules::loss_reason(&self.board, next, self.stones[next].on_board, next_phase)
        {
            self.turn.result = Some(GameResult {
                winner: mover,
                reason,
            });
            self.events.push(GameEvent::GameEnded(mover));
            debug!(winner = %mover, ?reason, turns = self.turn.turn_number, "game over");
            return;
        }

        self.turn.current_player = next;
        self.events.push(GameEvent::CurrentPlayerChanged(next));
        if next_phase != acted_under {
            self.events.push(GameEvent::PhaseChanged(next_phase));
            debug!(phase = %next_phase, "phase changed");
        }
    }

    fn clear_selection(&mut self) {
        if self.turn.selected.take().is_some() {
            self.events.push(GameEvent::SelectionChanged(None));
        }
    }

    fn check_invariants(&self) {
        for (player, counts) in self.stones.iter() {
            debug_assert!(
                counts.total() <= self.config.stones_per_player,
                "{player} exceeds the stone supply: {counts:?}"
            );
            debug_assert_eq!(
                usize::from(counts.on_board),
                self.board.count_owned_by(player),
                "{player} on-board count disagrees with the board"
            );
        }
        debug_assert!(
            !(self.turn.removal_pending && self.turn.selected.is_some()),
            "selection held during a capture"
        );
    }
}
