use crate::params::PenaltyParams;
use crate::update::compute_penalty;
use salvage_structs::Cost;
use serde::{Deserialize, Serialize};

/// A constraint class whose violations are penalised.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Weight,
    Volume,
    Salvage,
    TimeWarp,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Dimension::Weight,
        Dimension::Volume,
        Dimension::Salvage,
        Dimension::TimeWarp,
    ];

    #[inline(always)]
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Dimension::Weight => "weight",
            Dimension::Volume => "volume",
            Dimension::Salvage => "salvage",
            Dimension::TimeWarp => "time warp",
        };
        f.write_str(name)
    }
}

/// Penalty coefficient of one dimension together with the feasibility
/// registrations gathered since its last update.
///
/// Only built by [`crate::PenaltyManager`] from validated parameters.
#[derive(Debug, Clone)]
pub(crate) struct DimensionController {
    penalty: Cost,
    window_size: usize,
    window: Vec<bool>,
}

impl DimensionController {
    pub(crate) fn new(params: &PenaltyParams, dimension: Dimension) -> Self {
        let window_size = params.num_registrations_between_penalty_updates;
        Self {
            penalty: params.initial_penalty(dimension),
            window_size,
            window: Vec::with_capacity(window_size),
        }
    }

    pub(crate) fn penalty(&self) -> Cost {
        self.penalty
    }

    /// Registrations waiting in the window.
    pub(crate) fn num_pending(&self) -> usize {
        self.window.len()
    }

    /// Appends one registration. Once the window holds `window_size` entries
    /// it is consumed: the penalty is recomputed from the feasible fraction
    /// and the window is cleared. Returns the feasible fraction of the
    /// consumed window, if any.
    pub(crate) fn register(&mut self, is_feasible: bool, params: &PenaltyParams) -> Option<f64> {
        self.window.push(is_feasible);
        if self.window.len() < self.window_size {
            return None;
        }

        let num_feasible = self.window.iter().filter(|&&b| b).count();
        let feasible_fraction = num_feasible as f64 / self.window.len() as f64;
        self.penalty = compute_penalty(
            self.penalty,
            feasible_fraction,
            params.target_feasible,
            params.penalty_increase,
            params.penalty_decrease,
        );
        self.window.clear();
        Some(feasible_fraction)
    }
}
