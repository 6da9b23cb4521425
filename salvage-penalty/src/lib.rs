mod dimension;
mod error;
mod manager;
mod observer;
mod params;
mod update;

pub use dimension::Dimension;
pub use error::{PenaltyError, PenaltyResult};
pub use manager::{PenaltyCoefficients, PenaltyManager};
pub use observer::{PenaltyObserver, PenaltyUpdate, TracingObserver};
pub use params::PenaltyParams;
pub use salvage_structs::{Cost, CostEvaluator, SolutionStats};
pub use update::{compute_penalty, DEAD_ZONE, MAX_PENALTY, MIN_PENALTY, PENALTY_NUDGE};
