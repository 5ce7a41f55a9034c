//! The board engine.
//!
//! `NumericTicTacToe` holds the winning sum and an opponent policy. It never
//! holds a board: every operation takes the caller's board and returns a new
//! one, so independent games can share one engine.
//!
//! ## Rounds
//!
//! `step` plays one round: the agent's move, then (unless the agent's move
//! ended the game) one opponent reply. Only one reward is returned per round.

use log::{debug, error, trace};
use serde::{Deserialize, Serialize};

use super::lines::{self, LineSums};
use super::outcome::{self, Classification, Outcome};
use super::policy::{OpponentPolicy, UniformOpponent};
use crate::core::{Action, Board, EngineConfig, GameRng, Side};
use crate::error::{ConfigError, RulesError};

/// Result of one `step` round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepResult {
    /// Board after the round.
    pub board: Board,

    /// Reward of the last classification: agent-move reward if the round
    /// ended on the agent's move, opponent-move reward otherwise.
    pub reward: i32,

    /// Terminal flag of the last classification.
    pub terminal: bool,

    /// Outcome of the last classification.
    pub outcome: Outcome,

    /// The opponent's reply, `None` if the agent's move ended the game.
    pub opponent_action: Option<Action>,
}

/// Numerical Tic-Tac-Toe rules engine.
///
/// ## Example
///
/// ```
/// use numeric_ttt::{Action, EngineConfig, GameRng, NumericTicTacToe};
///
/// let engine = NumericTicTacToe::new(EngineConfig::new(15)).unwrap();
/// let mut rng = GameRng::new(42);
///
/// let board = engine.reset();
/// let result = engine.step(&board, Action::try_new(4, 5).unwrap(), &mut rng).unwrap();
///
/// assert!(!result.terminal);
/// assert_eq!(result.reward, -1);
/// assert_eq!(result.board.filled_count(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct NumericTicTacToe<P = UniformOpponent> {
    config: EngineConfig,
    opponent: P,
}

impl NumericTicTacToe {
    /// Create an engine with a uniform random opponent.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        Self::with_opponent(config, UniformOpponent)
    }
}

impl Default for NumericTicTacToe {
    fn default() -> Self {
        Self {
            config: EngineConfig::default(),
            opponent: UniformOpponent,
        }
    }
}

impl<P: OpponentPolicy> NumericTicTacToe<P> {
    /// Create an engine with a custom opponent policy.
    pub fn with_opponent(config: EngineConfig, opponent: P) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, opponent })
    }

    /// Get the engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Get the winning sum.
    #[must_use]
    pub fn winning_sum(&self) -> u32 {
        self.config.winning_sum
    }

    /// The canonical empty board.
    #[must_use]
    pub fn reset(&self) -> Board {
        Board::EMPTY
    }

    // === Judgment ===

    /// Sums of all 8 lines; `None` where a line has an empty cell.
    #[must_use]
    pub fn line_sums(&self, board: &Board) -> LineSums {
        lines::line_sums(board)
    }

    /// Check if any filled line hits the winning sum.
    #[must_use]
    pub fn is_winning(&self, board: &Board) -> bool {
        lines::is_winning(board, self.config.winning_sum)
    }

    /// Classify a board: Win, then Tie, then Resume.
    #[must_use]
    pub fn classify(&self, board: &Board) -> Classification {
        outcome::classify(board, self.config.winning_sum)
    }

    /// Reward for `outcome` reached by an agent or opponent move.
    #[must_use]
    pub fn reward(&self, outcome: Outcome, is_agent_move: bool) -> i32 {
        outcome::reward(outcome, is_agent_move)
    }

    // === Transitions ===

    /// Place a token without validation. See `Board::apply_action`.
    #[must_use]
    pub fn apply_action(&self, board: &Board, action: Action) -> Board {
        board.apply_action(action)
    }

    /// Pick the opponent's action with the configured policy.
    ///
    /// Fails with `NoLegalOpponentMove` on a board where the opponent has no
    /// open position or no even token left.
    pub fn choose_opponent_action(
        &self,
        board: &Board,
        rng: &mut GameRng,
    ) -> Result<Action, RulesError> {
        self.opponent
            .choose_action(board, rng)
            .ok_or_else(|| RulesError::NoLegalOpponentMove {
                open_positions: board.allowed_positions().len(),
                tokens_left: board.pool(Side::Opponent).len(),
            })
    }

    /// Play one round.
    ///
    /// 1. Apply the agent's action. If that ends the game, return the
    ///    agent-move reward; the opponent does not move.
    /// 2. Otherwise apply the opponent's reply and return the
    ///    opponent-move reward of the resulting board.
    ///
    /// The agent's action is validated against the odd pool; an illegal one
    /// leaves no trace and returns `IllegalAction`.
    pub fn step(
        &self,
        board: &Board,
        action: Action,
        rng: &mut GameRng,
    ) -> Result<StepResult, RulesError> {
        let after_agent = board.try_apply(Side::Agent, action)?;
        let classification = self.classify(&after_agent);
        debug!("agent plays {} -> {}", action, classification.outcome);

        if classification.terminal {
            return Ok(StepResult {
                board: after_agent,
                reward: classification.outcome.reward_for(Side::Agent),
                terminal: true,
                outcome: classification.outcome,
                opponent_action: None,
            });
        }

        let reply = self.choose_opponent_action(&after_agent, rng).map_err(|e| {
            error!("no opponent reply on non-terminal board:\n{}", after_agent);
            e
        })?;
        let after_opponent = after_agent.try_apply(Side::Opponent, reply)?;
        let classification = self.classify(&after_opponent);
        debug!("opponent plays {} -> {}", reply, classification.outcome);
        trace!("board after round:\n{}", after_opponent);

        Ok(StepResult {
            board: after_opponent,
            reward: classification.outcome.reward_for(Side::Opponent),
            terminal: classification.terminal,
            outcome: classification.outcome,
            opponent_action: Some(reply),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Token;
    use crate::error::IllegalAction;

    fn board(values: [Option<u8>; 9]) -> Board {
        Board::from_values(values).unwrap()
    }

    fn action(position: usize, value: u8) -> Action {
        Action::try_new(position, value).unwrap()
    }

    /// Opponent that always plays a fixed action.
    struct Scripted(Action);

    impl OpponentPolicy for Scripted {
        fn choose_action(&self, _board: &Board, _rng: &mut GameRng) -> Option<Action> {
            Some(self.0)
        }
    }

    #[test]
    fn test_new_validates_config() {
        assert!(NumericTicTacToe::new(EngineConfig::new(15)).is_ok());
        assert!(matches!(
            NumericTicTacToe::new(EngineConfig::new(30)),
            Err(ConfigError::UnreachableWinningSum { sum: 30, .. })
        ));
        assert_eq!(NumericTicTacToe::default().winning_sum(), 15);
    }

    #[test]
    fn test_reset_is_empty_and_idempotent() {
        let engine = NumericTicTacToe::default();
        assert_eq!(engine.reset(), Board::EMPTY);
        assert_eq!(engine.reset(), engine.reset());
    }

    #[test]
    fn test_step_agent_win_short_circuits() {
        let engine = NumericTicTacToe::default();
        let mut rng = GameRng::new(42);
        // Column 0: 2 + 4 + 9.
        let b = board([Some(2), None, None, Some(4), None, None, None, None, None]);
        let result = engine.step(&b, action(6, 9), &mut rng).unwrap();

        assert!(result.terminal);
        assert_eq!(result.outcome, Outcome::Win);
        assert_eq!(result.reward, 10);
        assert_eq!(result.opponent_action, None);
        assert_eq!(result.board.filled_count(), 3);
    }

    #[test]
    fn test_step_opponent_win_is_negative() {
        let b = board([Some(1), None, None, Some(6), None, None, None, None, None]);
        let engine =
            NumericTicTacToe::with_opponent(EngineConfig::new(15), Scripted(action(6, 8))).unwrap();
        let mut rng = GameRng::new(0);

        let result = engine.step(&b, action(8, 3), &mut rng).unwrap();

        assert!(result.terminal);
        assert_eq!(result.outcome, Outcome::Win);
        assert_eq!(result.reward, -10);
        assert_eq!(result.opponent_action, Some(action(6, 8)));
    }

    #[test]
    fn test_step_rejects_illegal_agent_action() {
        let engine = NumericTicTacToe::default();
        let mut rng = GameRng::new(42);
        let b = board([Some(1), None, None, None, None, None, None, None, None]);

        assert_eq!(
            engine.step(&b, action(0, 3), &mut rng),
            Err(RulesError::IllegalAction(IllegalAction::Occupied {
                position: 0,
                token: Token::new(1).unwrap(),
            }))
        );
        assert!(matches!(
            engine.step(&b, action(4, 2), &mut rng),
            Err(RulesError::IllegalAction(IllegalAction::WrongSide { .. }))
        ));
        assert!(matches!(
            engine.step(&b, action(4, 1), &mut rng),
            Err(RulesError::IllegalAction(IllegalAction::TokenUsed(_)))
        ));
    }

    #[test]
    fn test_step_rejects_illegal_opponent_reply() {
        let engine =
            NumericTicTacToe::with_opponent(EngineConfig::default(), Scripted(action(0, 2))).unwrap();
        let mut rng = GameRng::new(0);

        let result = engine.step(&Board::EMPTY, action(0, 1), &mut rng);
        assert!(matches!(
            result,
            Err(RulesError::IllegalAction(IllegalAction::Occupied { position: 0, .. }))
        ));
    }

    #[test]
    fn test_choose_opponent_action_without_evens() {
        let engine = NumericTicTacToe::default();
        let mut rng = GameRng::new(42);
        let b = board([Some(2), Some(4), Some(6), Some(8), None, None, None, None, None]);

        assert_eq!(
            engine.choose_opponent_action(&b, &mut rng),
            Err(RulesError::NoLegalOpponentMove {
                open_positions: 5,
                tokens_left: 0,
            })
        );
        assert!(matches!(
            engine.step(&b, action(4, 1), &mut rng),
            Err(RulesError::NoLegalOpponentMove { open_positions: 4, tokens_left: 0 })
        ));
    }

    #[test]
    fn test_engine_forwards_judgment() {
        let engine = NumericTicTacToe::new(EngineConfig::new(15)).unwrap();
        let b = board([None, None, None, Some(4), Some(5), Some(6), None, None, None]);

        assert_eq!(engine.line_sums(&b)[1], Some(15));
        assert!(engine.is_winning(&b));
        assert_eq!(engine.classify(&b), Classification { terminal: true, outcome: Outcome::Win });
        assert_eq!(engine.reward(Outcome::Resume, true), -1);
    }
}
