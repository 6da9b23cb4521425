use crate::dimension::Dimension;
use salvage_structs::Cost;

#[derive(Debug, Clone, PartialEq)]
pub enum PenaltyError {
    InvalidPenaltyIncrease {
        penalty_increase: f64,
    },
    InvalidPenaltyDecrease {
        penalty_decrease: f64,
    },
    InvalidTargetFeasible {
        target_feasible: f64,
    },
    InvalidRepairBooster {
        repair_booster: f64,
    },
    InvalidRegistrationWindow {
        num_registrations: usize,
    },
    NegativeInitialPenalty {
        dimension: Dimension,
        penalty: Cost,
    },
    InvalidHyperparameters {
        reason: String,
    },
}

impl std::fmt::Display for PenaltyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PenaltyError::InvalidPenaltyIncrease { penalty_increase } => write!(
                f,
                "Expected penalty_increase >= 1, got '{}'",
                penalty_increase
            ),
            PenaltyError::InvalidPenaltyDecrease { penalty_decrease } => write!(
                f,
                "Expected penalty_decrease in [0, 1], got '{}'",
                penalty_decrease
            ),
            PenaltyError::InvalidTargetFeasible { target_feasible } => write!(
                f,
                "Expected target_feasible in [0, 1], got '{}'",
                target_feasible
            ),
            PenaltyError::InvalidRepairBooster { repair_booster } => write!(
                f,
                "Expected repair_booster >= 1, got '{}'",
                repair_booster
            ),
            PenaltyError::InvalidRegistrationWindow { num_registrations } => write!(
                f,
                "Expected num_registrations_between_penalty_updates >= 1, got '{}'",
                num_registrations
            ),
            PenaltyError::NegativeInitialPenalty { dimension, penalty } => write!(
                f,
                "Initial {} penalty must be non-negative, got '{}'",
                dimension, penalty
            ),
            PenaltyError::InvalidHyperparameters { reason } => {
                write!(f, "Invalid penalty hyperparameters: {}", reason)
            }
        }
    }
}

impl std::error::Error for PenaltyError {}

pub type PenaltyResult<T> = std::result::Result<T, PenaltyError>;
