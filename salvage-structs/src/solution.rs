use crate::measure::{excess, Cost, Distance, Duration, Load, Salvage};
use crate::measure_struct_with_getters;
use serde::{Deserialize, Serialize};

measure_struct_with_getters! {
    /// Summary of one route as seen by the cost evaluator.
    RouteStats {
        distance: Distance,
        weight: Load,
        weight_capacity: Load,
        volume: Load,
        volume_capacity: Load,
        /// Nonterminal salvage pickups on the route
        salvage: Salvage,
        salvage_capacity: Salvage,
        time_warp: Duration,
        prizes: Cost,
    }
}

impl RouteStats {
    #[inline]
    pub fn excess_weight(&self) -> Load {
        excess(self.weight, self.weight_capacity)
    }

    #[inline]
    pub fn excess_volume(&self) -> Load {
        excess(self.volume, self.volume_capacity)
    }

    #[inline]
    pub fn excess_salvage(&self) -> Salvage {
        excess(self.salvage, self.salvage_capacity)
    }

    pub fn is_feasible(&self) -> bool {
        self.excess_weight() == 0
            && self.excess_volume() == 0
            && self.excess_salvage() == 0
            && self.time_warp <= 0
    }
}

measure_struct_with_getters! {
    /// Aggregated violations and objective terms of a complete solution.
    SolutionStats {
        distance: Distance,
        uncollected_prizes: Cost,
        excess_weight: Load,
        excess_volume: Load,
        excess_salvage: Salvage,
        time_warp: Duration,
    }
}

impl SolutionStats {
    /// Sums the route summaries. Prizes not collected on any route count
    /// towards `uncollected_prizes`.
    pub fn from_routes(routes: &[RouteStats], total_prizes: Cost) -> Self {
        let mut stats = SolutionStats::default();
        let mut collected: Cost = 0;
        for route in routes {
            stats.distance = stats.distance.saturating_add(route.distance);
            stats.excess_weight = stats.excess_weight.saturating_add(route.excess_weight());
            stats.excess_volume = stats.excess_volume.saturating_add(route.excess_volume());
            stats.excess_salvage = stats.excess_salvage.saturating_add(route.excess_salvage());
            stats.time_warp = stats.time_warp.saturating_add(route.time_warp.max(0));
            collected = collected.saturating_add(route.prizes);
        }
        stats.uncollected_prizes = total_prizes.saturating_sub(collected).max(0);
        stats
    }

    #[inline]
    pub fn has_excess_weight(&self) -> bool {
        self.excess_weight > 0
    }

    #[inline]
    pub fn has_excess_volume(&self) -> bool {
        self.excess_volume > 0
    }

    #[inline]
    pub fn has_excess_salvage(&self) -> bool {
        self.excess_salvage > 0
    }

    #[inline]
    pub fn has_time_warp(&self) -> bool {
        self.time_warp > 0
    }

    pub fn is_feasible(&self) -> bool {
        !self.has_excess_weight()
            && !self.has_excess_volume()
            && !self.has_excess_salvage()
            && !self.has_time_warp()
    }
}
