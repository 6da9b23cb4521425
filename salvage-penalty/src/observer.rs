use crate::dimension::Dimension;
use salvage_structs::Cost;

/// A change of one penalty coefficient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PenaltyUpdate {
    pub dimension: Dimension,
    /// Feasible fraction of the window that triggered the change
    pub feasible_fraction: f64,
    pub previous: Cost,
    pub penalty: Cost,
}

/// Notified by [`crate::PenaltyManager`] after every coefficient change, once
/// the evaluators reflect the new value.
pub trait PenaltyObserver {
    fn on_penalty_update(&mut self, update: &PenaltyUpdate);
}

impl<F> PenaltyObserver for F
where
    F: FnMut(&PenaltyUpdate),
{
    fn on_penalty_update(&mut self, update: &PenaltyUpdate) {
        self(update)
    }
}

/// Emits every update as a `tracing` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl PenaltyObserver for TracingObserver {
    fn on_penalty_update(&mut self, update: &PenaltyUpdate) {
        tracing::info!(
            dimension = %update.dimension,
            feasible_fraction = update.feasible_fraction,
            previous = update.previous,
            penalty = update.penalty,
            "penalty updated"
        );
    }
}
