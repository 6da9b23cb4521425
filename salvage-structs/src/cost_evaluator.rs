use crate::measure::{Cost, Duration, Load, Salvage};
use crate::solution::{RouteStats, SolutionStats};
use serde::{Deserialize, Serialize};

/// Turns constraint violations into cost, given one penalty coefficient per
/// constraint dimension.
///
/// An evaluator is an immutable value: when the penalties change a new
/// evaluator is built rather than the old one being updated.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CostEvaluator {
    weight_capacity_penalty: Cost,
    volume_capacity_penalty: Cost,
    salvage_capacity_penalty: Cost,
    time_warp_penalty: Cost,
}

impl CostEvaluator {
    pub fn new(
        weight_capacity_penalty: Cost,
        volume_capacity_penalty: Cost,
        salvage_capacity_penalty: Cost,
        time_warp_penalty: Cost,
    ) -> Self {
        Self {
            weight_capacity_penalty,
            volume_capacity_penalty,
            salvage_capacity_penalty,
            time_warp_penalty,
        }
    }

    pub fn weight_capacity_penalty(&self) -> Cost {
        self.weight_capacity_penalty
    }

    pub fn volume_capacity_penalty(&self) -> Cost {
        self.volume_capacity_penalty
    }

    pub fn salvage_capacity_penalty(&self) -> Cost {
        self.salvage_capacity_penalty
    }

    pub fn time_warp_penalty(&self) -> Cost {
        self.time_warp_penalty
    }

    #[inline(always)]
    pub fn weight_penalty_excess(&self, excess_weight: Load) -> Cost {
        excess_weight.saturating_mul(self.weight_capacity_penalty)
    }

    /// Penalty for carrying `weight` in a vehicle of `weight_capacity`; zero
    /// when the load fits.
    #[inline(always)]
    pub fn weight_penalty(&self, weight: Load, weight_capacity: Load) -> Cost {
        if weight > weight_capacity {
            self.weight_penalty_excess(weight.saturating_sub(weight_capacity))
        } else {
            0
        }
    }

    #[inline(always)]
    pub fn volume_penalty_excess(&self, excess_volume: Load) -> Cost {
        excess_volume.saturating_mul(self.volume_capacity_penalty)
    }

    #[inline(always)]
    pub fn volume_penalty(&self, volume: Load, volume_capacity: Load) -> Cost {
        if volume > volume_capacity {
            self.volume_penalty_excess(volume.saturating_sub(volume_capacity))
        } else {
            0
        }
    }

    #[inline(always)]
    pub fn salvage_penalty_excess(&self, excess_salvage: Salvage) -> Cost {
        excess_salvage.saturating_mul(self.salvage_capacity_penalty)
    }

    #[inline(always)]
    pub fn salvage_penalty(&self, salvage: Salvage, salvage_capacity: Salvage) -> Cost {
        if salvage > salvage_capacity {
            self.salvage_penalty_excess(salvage.saturating_sub(salvage_capacity))
        } else {
            0
        }
    }

    #[inline(always)]
    pub fn tw_penalty(&self, time_warp: Duration) -> Cost {
        time_warp.max(0).saturating_mul(self.time_warp_penalty)
    }

    /// Sum of the four violation penalties of a single route.
    pub fn route_penalty(&self, route: &RouteStats) -> Cost {
        self.weight_penalty(route.weight, route.weight_capacity)
            .saturating_add(self.volume_penalty(route.volume, route.volume_capacity))
            .saturating_add(self.salvage_penalty(route.salvage, route.salvage_capacity))
            .saturating_add(self.tw_penalty(route.time_warp))
    }

    /// Smoothed objective: distance and uncollected prizes plus the penalty
    /// terms of every violated constraint.
    pub fn penalised_cost(&self, solution: &SolutionStats) -> Cost {
        solution
            .distance
            .saturating_add(solution.uncollected_prizes)
            .saturating_add(self.weight_penalty_excess(solution.excess_weight))
            .saturating_add(self.volume_penalty_excess(solution.excess_volume))
            .saturating_add(self.salvage_penalty_excess(solution.excess_salvage))
            .saturating_add(self.tw_penalty(solution.time_warp))
    }

    /// Objective of a feasible solution, `Cost::MAX` for an infeasible one.
    pub fn cost(&self, solution: &SolutionStats) -> Cost {
        // penalty terms vanish on feasible solutions
        if solution.is_feasible() {
            self.penalised_cost(solution)
        } else {
            Cost::MAX
        }
    }
}
