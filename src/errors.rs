use schema::Species;
use std::fmt;

/// Main error type for the Kanto Clash battle engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleEngineError {
    /// Error related to invalid player actions
    Action(ActionError),
    /// Error related to team construction or team-file parsing
    Roster(RosterError),
    /// Error related to invalid battle state
    BattleState(BattleStateError),
}

/// Errors related to player actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// Move index is out of bounds
    InvalidMoveIndex(usize),
    /// Team index is out of bounds or targets a fainted combatant
    InvalidPokemonIndex(usize),
    /// Action is not valid in the current battle state
    InvalidAction(String),
}

/// Errors related to building rosters from prefab or RON definitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// A team must have exactly three members
    WrongTeamSize(usize),
    /// A combatant must know exactly four moves
    WrongMoveCount { species: Species, count: usize },
    /// The team file could not be parsed
    Parse(String),
}

/// Errors related to battle state validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleStateError {
    /// Invalid player index
    InvalidPlayerIndex(usize),
    /// Turn resolution requested before every pending action was submitted
    TurnNotReady,
}

impl fmt::Display for BattleEngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleEngineError::Action(err) => write!(f, "Action error: {}", err),
            BattleEngineError::Roster(err) => write!(f, "Roster error: {}", err),
            BattleEngineError::BattleState(err) => write!(f, "Battle state error: {}", err),
        }
    }
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionError::InvalidMoveIndex(index) => write!(f, "Invalid move index: {}", index),
            ActionError::InvalidPokemonIndex(index) => write!(f, "Invalid team index: {}", index),
            ActionError::InvalidAction(details) => write!(f, "Invalid action: {}", details),
        }
    }
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterError::WrongTeamSize(count) => {
                write!(f, "A team needs exactly 3 members, got {}", count)
            }
            RosterError::WrongMoveCount { species, count } => {
                write!(f, "{} needs exactly 4 moves, got {}", species, count)
            }
            RosterError::Parse(details) => write!(f, "Malformed team definition: {}", details),
        }
    }
}

impl fmt::Display for BattleStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleStateError::InvalidPlayerIndex(index) => {
                write!(f, "Invalid player index: {}", index)
            }
            BattleStateError::TurnNotReady => write!(f, "Turn is not ready for resolution"),
        }
    }
}

impl std::error::Error for BattleEngineError {}
impl std::error::Error for ActionError {}
impl std::error::Error for RosterError {}
impl std::error::Error for BattleStateError {}

impl From<ActionError> for BattleEngineError {
    fn from(err: ActionError) -> Self {
        BattleEngineError::Action(err)
    }
}

impl From<RosterError> for BattleEngineError {
    fn from(err: RosterError) -> Self {
        BattleEngineError::Roster(err)
    }
}

impl From<BattleStateError> for BattleEngineError {
    fn from(err: BattleStateError) -> Self {
        BattleEngineError::BattleState(err)
    }
}

/// Type alias for Results using BattleEngineError
pub type BattleResult<T> = Result<T, BattleEngineError>;
