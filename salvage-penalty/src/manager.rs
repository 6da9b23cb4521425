use crate::dimension::{Dimension, DimensionController};
use crate::error::PenaltyResult;
use crate::observer::{PenaltyObserver, PenaltyUpdate};
use crate::params::PenaltyParams;
use salvage_structs::{measure_struct_with_getters, Cost, CostEvaluator, SolutionStats};
use serde::{Deserialize, Serialize};

measure_struct_with_getters! {
    /// Snapshot of the four penalty coefficients.
    PenaltyCoefficients {
        weight: Cost,
        volume: Cost,
        salvage: Cost,
        time_warp: Cost,
    }
}

impl PenaltyCoefficients {
    pub fn get(&self, dimension: Dimension) -> Cost {
        match dimension {
            Dimension::Weight => self.weight,
            Dimension::Volume => self.volume,
            Dimension::Salvage => self.salvage,
            Dimension::TimeWarp => self.time_warp,
        }
    }

    /// Every coefficient multiplied by `booster`, rounded down. Saturates at
    /// `Cost::MAX`.
    pub fn boosted(&self, booster: f64) -> Self {
        let boost = |penalty: Cost| ((penalty as f64) * booster).floor() as Cost;
        Self {
            weight: boost(self.weight),
            volume: boost(self.volume),
            salvage: boost(self.salvage),
            time_warp: boost(self.time_warp),
        }
    }

    pub fn evaluator(&self) -> CostEvaluator {
        CostEvaluator::new(self.weight, self.volume, self.salvage, self.time_warp)
    }
}

/// Evaluators built from the same coefficient generation. Always replaced as
/// a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EvaluatorPair {
    current: CostEvaluator,
    boosted: CostEvaluator,
}

impl EvaluatorPair {
    fn build(penalties: &PenaltyCoefficients, repair_booster: f64) -> Self {
        Self {
            current: penalties.evaluator(),
            boosted: penalties.boosted(repair_booster).evaluator(),
        }
    }
}

/// Adapts the weight, volume, salvage and time warp penalties from the
/// feasibility of recently evaluated solutions, and keeps a current and a
/// boosted [`CostEvaluator`] in sync with them.
///
/// Every dimension collects registrations in its own window. When a window
/// is full the dimension's penalty is increased if fewer than
/// `target_feasible` of its registrations were feasible, decreased if more
/// were, and the evaluators are rebuilt if the value changed.
///
/// A manager is owned by a single search loop. Evaluators returned by
/// [`PenaltyManager::current_evaluator`] and
/// [`PenaltyManager::boosted_evaluator`] go stale after the next update and
/// should be fetched again rather than kept.
pub struct PenaltyManager {
    params: PenaltyParams,
    dimensions: [DimensionController; 4],
    evaluators: EvaluatorPair,
    num_rebuilds: usize,
    observer: Option<Box<dyn PenaltyObserver + Send>>,
}

impl PenaltyManager {
    pub fn new(params: PenaltyParams) -> PenaltyResult<Self> {
        params.validate()?;
        Ok(Self::build(params))
    }

    fn build(params: PenaltyParams) -> Self {
        let dimensions = Dimension::ALL.map(|d| DimensionController::new(&params, d));
        let penalties = PenaltyCoefficients {
            weight: params.init_weight_capacity_penalty,
            volume: params.init_volume_capacity_penalty,
            salvage: params.init_salvage_penalty,
            time_warp: params.init_time_warp_penalty,
        };
        Self {
            params,
            dimensions,
            evaluators: EvaluatorPair::build(&penalties, params.repair_booster),
            num_rebuilds: 0,
            observer: None,
        }
    }

    pub fn with_observer<O>(mut self, observer: O) -> Self
    where
        O: PenaltyObserver + Send + 'static,
    {
        self.set_observer(observer);
        self
    }

    pub fn set_observer<O>(&mut self, observer: O)
    where
        O: PenaltyObserver + Send + 'static,
    {
        self.observer = Some(Box::new(observer));
    }

    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    pub fn params(&self) -> &PenaltyParams {
        &self.params
    }

    pub fn penalty(&self, dimension: Dimension) -> Cost {
        self.dimensions[dimension.index()].penalty()
    }

    pub fn penalties(&self) -> PenaltyCoefficients {
        PenaltyCoefficients {
            weight: self.penalty(Dimension::Weight),
            volume: self.penalty(Dimension::Volume),
            salvage: self.penalty(Dimension::Salvage),
            time_warp: self.penalty(Dimension::TimeWarp),
        }
    }

    /// Registrations gathered for `dimension` since its last update.
    pub fn num_pending(&self, dimension: Dimension) -> usize {
        self.dimensions[dimension.index()].num_pending()
    }

    /// Number of times the evaluators were rebuilt after construction.
    pub fn num_rebuilds(&self) -> usize {
        self.num_rebuilds
    }

    /// Registers whether the last evaluated solution was feasible with respect
    /// to `dimension`.
    pub fn register_feasible(&mut self, dimension: Dimension, is_feasible: bool) {
        let controller = &mut self.dimensions[dimension.index()];
        let previous = controller.penalty();
        let Some(feasible_fraction) = controller.register(is_feasible, &self.params) else {
            return;
        };
        let penalty = controller.penalty();
        if penalty == previous {
            return;
        }

        self.rebuild_evaluators();
        if let Some(observer) = self.observer.as_mut() {
            observer.on_penalty_update(&PenaltyUpdate {
                dimension,
                feasible_fraction,
                previous,
                penalty,
            });
        }
    }

    pub fn register_weight_feasible(&mut self, is_weight_feasible: bool) {
        self.register_feasible(Dimension::Weight, is_weight_feasible);
    }

    pub fn register_volume_feasible(&mut self, is_volume_feasible: bool) {
        self.register_feasible(Dimension::Volume, is_volume_feasible);
    }

    pub fn register_salvage_feasible(&mut self, is_salvage_feasible: bool) {
        self.register_feasible(Dimension::Salvage, is_salvage_feasible);
    }

    pub fn register_time_feasible(&mut self, is_time_feasible: bool) {
        self.register_feasible(Dimension::TimeWarp, is_time_feasible);
    }

    /// Registers the feasibility of one solution in all four dimensions.
    pub fn register(&mut self, solution: &SolutionStats) {
        self.register_weight_feasible(!solution.has_excess_weight());
        self.register_volume_feasible(!solution.has_excess_volume());
        self.register_salvage_feasible(!solution.has_excess_salvage());
        self.register_time_feasible(!solution.has_time_warp());
    }

    /// Evaluator using the current penalties.
    pub fn current_evaluator(&self) -> &CostEvaluator {
        &self.evaluators.current
    }

    /// Evaluator using the current penalties times `repair_booster`.
    pub fn boosted_evaluator(&self) -> &CostEvaluator {
        &self.evaluators.boosted
    }

    fn rebuild_evaluators(&mut self) {
        self.evaluators = EvaluatorPair::build(&self.penalties(), self.params.repair_booster);
        self.num_rebuilds += 1;
    }
}

impl Default for PenaltyManager {
    fn default() -> Self {
        Self::build(PenaltyParams::default())
    }
}

impl std::fmt::Debug for PenaltyManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PenaltyManager")
            .field("params", &self.params)
            .field("dimensions", &self.dimensions)
            .field("evaluators", &self.evaluators)
            .field("num_rebuilds", &self.num_rebuilds)
            .field("has_observer", &self.observer.is_some())
            .finish()
    }
}
