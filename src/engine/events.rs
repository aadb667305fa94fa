//! Outbound notifications.
//!
//! The state machine queues a `GameEvent` for every observable change and
//! collaborators drain the queue after each command. Callers that prefer
//! callbacks implement [`GameObserver`] and feed it through
//! [`GameEvent::dispatch`].

use serde::{Deserialize, Serialize};

use crate::core::{GamePhase, Player, Position, StoneCounts};

/// Something observable that happened while processing a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The turn passed to this player.
    CurrentPlayerChanged(Player),
    /// The phase of the player to act changed.
    PhaseChanged(GamePhase),
    /// This player closed a mill and must pick a stone to capture.
    RemovalPending(Player),
    /// The game is over; this player won.
    GameEnded(Player),

    // Presentation hooks
    StonePlaced { player: Player, at: Position },
    StoneMoved { player: Player, from: Position, to: Position },
    /// `player` is the owner of the captured stone.
    StoneRemoved { player: Player, at: Position },
    SelectionChanged(Option<Position>),
    StonesChanged { player: Player, counts: StoneCounts },
    /// This player may now move stones to any empty position.
    FlyingEntered(Player),
    Restarted,
}

/// Callback-style consumer of the core notifications.
///
/// Every method defaults to a no-op so observers implement only what they
/// care about.
pub trait GameObserver {
    fn on_current_player_changed(&mut self, _player: Player) {}

    fn on_phase_changed(&mut self, _phase: GamePhase) {}

    /// `actor` is the player who must choose a stone to capture.
    fn on_removal_pending(&mut self, _actor: Player) {}

    fn on_game_ended(&mut self, _winner: Player) {}
}

impl GameEvent {
    /// Forward this event to the matching observer callback, if it has one.
    pub fn dispatch(&self, observer: &mut dyn GameObserver) {
        match *self {
            GameEvent::CurrentPlayerChanged(player) => observer.on_current_player_changed(player),
            GameEvent::PhaseChanged(phase) => observer.on_phase_changed(phase),
            GameEvent::RemovalPending(actor) => observer.on_removal_pending(actor),
            GameEvent::GameEnded(winner) => observer.on_game_ended(winner),
            GameEvent::StonePlaced { .. }
            | GameEvent::StoneMoved { .. }
            | GameEvent::StoneRemoved { .. }
            | GameEvent::SelectionChanged(_)
            | GameEvent::StonesChanged { .. }
            | GameEvent::FlyingEntered(_)
            | GameEvent::Restarted => {}
        }
    }

    /// Whether this is one of the four core notifications.
    #[must_use]
    pub fn is_core(&self) -> bool {
        matches!(
            self,
            GameEvent::CurrentPlayerChanged(_)
                | GameEvent::PhaseChanged(_)
                | GameEvent::RemovalPending(_)
                | GameEvent::GameEnded(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        players: Vec<Player>,
        phases: Vec<GamePhase>,
        removals: Vec<Player>,
        winner: Option<Player>,
    }

    impl GameObserver for Recorder {
        fn on_current_player_changed(&mut self, player: Player) {
            self.players.push(player);
        }

        fn on_phase_changed(&mut self, phase: GamePhase) {
            self.phases.push(phase);
        }

        fn on_removal_pending(&mut self, actor: Player) {
            self.removals.push(actor);
        }

        fn on_game_ended(&mut self, winner: Player) {
            self.winner = Some(winner);
        }
    }

    #[test]
    fn test_dispatch_routes_core_events() {
        let events = [
            GameEvent::StonePlaced {
                player: Player::One,
                at: Position(0),
            },
            GameEvent::CurrentPlayerChanged(Player::Two),
            GameEvent::PhaseChanged(GamePhase::Movement),
            GameEvent::RemovalPending(Player::Two),
            GameEvent::GameEnded(Player::Two),
        ];

        let mut recorder = Recorder::default();
        for event in &events {
            event.dispatch(&mut recorder);
        }

        assert_eq!(recorder.players, vec![Player::Two]);
        assert_eq!(recorder.phases, vec![GamePhase::Movement]);
        assert_eq!(recorder.removals, vec![Player::Two]);
        assert_eq!(recorder.winner, Some(Player::Two));
    }

    #[test]
    fn test_default_observer_ignores_everything() {
        struct Silent;
        impl GameObserver for Silent {}

        GameEvent::GameEnded(Player::One).dispatch(&mut Silent);
        GameEvent::Restarted.dispatch(&mut Silent);
    }

    #[test]
    fn test_is_core() {
        assert!(GameEvent::RemovalPending(Player::One).is_core());
        assert!(!GameEvent::SelectionChanged(None).is_core());
        assert!(!GameEvent::Restarted.is_core());
    }

    #[test]
    fn test_serialization() {
        let event = GameEvent::StoneMoved {
            player: Player::Two,
            from: Position(15),
            to: Position(11),
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }
}
