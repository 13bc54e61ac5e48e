//! Match State Machine
//!
//! Decides which phase of a match is active. The machine itself only tracks
//! the phase, the score-pause countdown and the winner; the side effects of a
//! transition (resetting scores, launching the ball) belong to `Game`.

use crate::Side;

/// Match phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    Menu,
    Playing,
    Paused,
    Scored,
    GameOver,
}

/// Things that can move the machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchAction {
    /// Click, tap, space or enter
    Confirm,
    /// Escape
    Cancel,
    /// A point was scored and nobody has won yet
    PointScored,
    /// A point was scored and it reached the winning score
    MatchWon(Side),
    /// The score pause ran out
    PauseElapsed,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: MatchState,
    pub to_state: MatchState,
    pub action: MatchAction,
}

/// Match Finite State Machine
#[derive(Debug, Clone)]
pub struct MatchFsm {
    state: MatchState,
    score_pause_timer: f32,
    winner: Option<Side>,
    score_pause: f32,
}

impl MatchFsm {
    pub fn new(score_pause: f32) -> Self {
        Self {
            state: MatchState::Menu,
            score_pause_timer: 0.0,
            winner: None,
            score_pause,
        }
    }

    /// Get current state
    pub fn state(&self) -> MatchState {
        self.state
    }

    /// Remaining score pause; zero outside `Scored`
    pub fn score_pause_timer(&self) -> f32 {
        self.score_pause_timer
    }

    /// Winner of the finished match; only set in `GameOver`
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: MatchAction) -> TransitionResult {
        let from_state = self.state;

        let Some(next_state) = self.next_state(action) else {
            log::debug!("Ignored {:?} in {:?}", action, from_state);
            return TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            };
        };

        self.state = next_state;
        match action {
            MatchAction::PointScored => self.score_pause_timer = self.score_pause,
            MatchAction::MatchWon(side) => self.winner = Some(side),
            _ => {}
        }
        if next_state != MatchState::Scored {
            self.score_pause_timer = 0.0;
        }
        if next_state != MatchState::GameOver {
            self.winner = None;
        }

        log::info!("Match {:?} -> {:?} ({:?})", from_state, next_state, action);
        TransitionResult {
            success: true,
            from_state,
            to_state: next_state,
            action,
        }
    }

    /// Count the score pause down. Returns true once it runs out, after
    /// moving back to `Playing`.
    pub fn tick_pause(&mut self, dt: f32) -> bool {
        if self.state != MatchState::Scored {
            return false;
        }
        self.score_pause_timer -= dt;
        if self.score_pause_timer <= 0.0 {
            return self.transition(MatchAction::PauseElapsed).success;
        }
        false
    }

    /// Get next state for a given action (if valid)
    fn next_state(&self, action: MatchAction) -> Option<MatchState> {
        match (self.state, action) {
            // From Menu
            (MatchState::Menu, MatchAction::Confirm) => Some(MatchState::Playing),

            // From Playing
            (MatchState::Playing, MatchAction::Cancel) => Some(MatchState::Paused),
            (MatchState::Playing, MatchAction::PointScored) => Some(MatchState::Scored),
            (MatchState::Playing, MatchAction::MatchWon(_)) => Some(MatchState::GameOver),

            // From Paused
            (MatchState::Paused, MatchAction::Cancel) => Some(MatchState::Playing),

            // From Scored
            (MatchState::Scored, MatchAction::PauseElapsed) => Some(MatchState::Playing),

            // From GameOver
            (MatchState::GameOver, MatchAction::Confirm) => Some(MatchState::Menu),

            // Invalid transition
            _ => None,
        }
    }

    /// Check if physics should run
    pub fn is_playing(&self) -> bool {
        self.state == MatchState::Playing
    }
}

impl Default for MatchFsm {
    fn default() -> Self {
        Self::new(crate::Params::SCORE_PAUSE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let fsm = MatchFsm::default();
        assert_eq!(fsm.state(), MatchState::Menu);
        assert_eq!(fsm.winner(), None);
        assert_eq!(fsm.score_pause_timer(), 0.0);
    }

    #[test]
    fn test_valid_transition() {
        let mut fsm = MatchFsm::default();
        let result = fsm.transition(MatchAction::Confirm);
        assert!(result.success);
        assert_eq!(result.from_state, MatchState::Menu);
        assert_eq!(result.to_state, MatchState::Playing);
        assert_eq!(fsm.state(), MatchState::Playing);
    }

    #[test]
    fn test_invalid_transition() {
        let mut fsm = MatchFsm::default();
        let result = fsm.transition(MatchAction::Cancel);
        assert!(!result.success);
        assert_eq!(fsm.state(), MatchState::Menu);
        assert!(!fsm.transition(MatchAction::PointScored).success);
        assert_eq!(fsm.state(), MatchState::Menu);
    }

    #[test]
    fn test_pause_toggles() {
        let mut fsm = MatchFsm::default();
        fsm.transition(MatchAction::Confirm);
        fsm.transition(MatchAction::Cancel);
        assert_eq!(fsm.state(), MatchState::Paused);
        assert!(!fsm.is_playing());
        fsm.transition(MatchAction::Cancel);
        assert_eq!(fsm.state(), MatchState::Playing);
    }

    #[test]
    fn test_paused_ignores_timer_and_confirm() {
        let mut fsm = MatchFsm::default();
        fsm.transition(MatchAction::Confirm);
        fsm.transition(MatchAction::Cancel);
        assert!(!fsm.tick_pause(10.0));
        assert!(!fsm.transition(MatchAction::Confirm).success);
        assert_eq!(fsm.state(), MatchState::Paused);
    }

    #[test]
    fn test_score_pause_counts_down() {
        let mut fsm = MatchFsm::new(1.5);
        fsm.transition(MatchAction::Confirm);
        fsm.transition(MatchAction::PointScored);
        assert_eq!(fsm.state(), MatchState::Scored);
        assert_eq!(fsm.score_pause_timer(), 1.5);

        assert!(!fsm.tick_pause(1.0));
        assert_eq!(fsm.state(), MatchState::Scored);
        assert!((fsm.score_pause_timer() - 0.5).abs() < 1e-6);

        assert!(fsm.tick_pause(0.5));
        assert_eq!(fsm.state(), MatchState::Playing);
        assert_eq!(fsm.score_pause_timer(), 0.0);
    }

    #[test]
    fn test_cannot_pause_during_score_pause() {
        let mut fsm = MatchFsm::default();
        fsm.transition(MatchAction::Confirm);
        fsm.transition(MatchAction::PointScored);
        assert!(!fsm.transition(MatchAction::Cancel).success);
    }

    #[test]
    fn test_match_flow() {
        let mut fsm = MatchFsm::default();
        fsm.transition(MatchAction::Confirm);
        fsm.transition(MatchAction::MatchWon(Side::Right));
        assert_eq!(fsm.state(), MatchState::GameOver);
        assert_eq!(fsm.winner(), Some(Side::Right));

        fsm.transition(MatchAction::Confirm);
        assert_eq!(fsm.state(), MatchState::Menu);
        assert_eq!(fsm.winner(), None, "Winner is cleared when leaving GameOver");
    }
}
