use crate::dimension::Dimension;
use crate::error::{PenaltyError, PenaltyResult};
use salvage_structs::Cost;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PenaltyParams {
    /// Penalty per unit of excess weight at the start of the search
    pub init_weight_capacity_penalty: Cost,

    /// Penalty per unit of excess volume at the start of the search
    pub init_volume_capacity_penalty: Cost,

    /// Penalty per nonterminal salvage pickup at the start of the search
    pub init_salvage_penalty: Cost,

    /// Penalty per unit of time warp at the start of the search
    pub init_time_warp_penalty: Cost,

    /// Multiplier r >= 1 applied to every penalty by the booster evaluator,
    /// used to force feasibility during repair
    pub repair_booster: f64,

    /// Number of registrations gathered per dimension before its penalty is
    /// revised. Keep greater than 0
    pub num_registrations_between_penalty_updates: usize,

    /// Factor p_i >= 1 applied when too few registrations were feasible
    pub penalty_increase: f64,

    /// Factor p_d in [0, 1] applied when too many registrations were feasible
    pub penalty_decrease: f64,

    /// Target fraction p_f in [0, 1] of feasible registrations per window
    pub target_feasible: f64,
}

impl Default for PenaltyParams {
    fn default() -> Self {
        Self {
            init_weight_capacity_penalty: 20,
            init_volume_capacity_penalty: 20,
            init_salvage_penalty: 20,
            init_time_warp_penalty: 6,
            repair_booster: 12.0,
            num_registrations_between_penalty_updates: 50,
            penalty_increase: 1.34,
            penalty_decrease: 0.32,
            target_feasible: 0.43,
        }
    }
}

impl PenaltyParams {
    pub fn initial_penalty(&self, dimension: Dimension) -> Cost {
        match dimension {
            Dimension::Weight => self.init_weight_capacity_penalty,
            Dimension::Volume => self.init_volume_capacity_penalty,
            Dimension::Salvage => self.init_salvage_penalty,
            Dimension::TimeWarp => self.init_time_warp_penalty,
        }
    }

    /// Checks every bound. Comparisons are written so that NaN fails them.
    pub fn validate(&self) -> PenaltyResult<()> {
        if !(self.penalty_increase >= 1.0) {
            return Err(PenaltyError::InvalidPenaltyIncrease {
                penalty_increase: self.penalty_increase,
            });
        }
        if !(0.0..=1.0).contains(&self.penalty_decrease) {
            return Err(PenaltyError::InvalidPenaltyDecrease {
                penalty_decrease: self.penalty_decrease,
            });
        }
        if !(0.0..=1.0).contains(&self.target_feasible) {
            return Err(PenaltyError::InvalidTargetFeasible {
                target_feasible: self.target_feasible,
            });
        }
        if !(self.repair_booster >= 1.0) {
            return Err(PenaltyError::InvalidRepairBooster {
                repair_booster: self.repair_booster,
            });
        }
        if self.num_registrations_between_penalty_updates == 0 {
            return Err(PenaltyError::InvalidRegistrationWindow {
                num_registrations: self.num_registrations_between_penalty_updates,
            });
        }
        for dimension in Dimension::ALL {
            let penalty = self.initial_penalty(dimension);
            if penalty < 0 {
                return Err(PenaltyError::NegativeInitialPenalty { dimension, penalty });
            }
        }
        Ok(())
    }

    /// Starts from `default()`, overrides every user-provided key, then
    /// validates the result.
    pub fn initialize(hyperparameters: &Option<Map<String, Value>>) -> PenaltyResult<Self> {
        let mut merged_params = serde_json::to_value(Self::default()).map_err(|e| {
            PenaltyError::InvalidHyperparameters {
                reason: e.to_string(),
            }
        })?;
        if let (Value::Object(ref mut obj), Some(map)) = (&mut merged_params, hyperparameters) {
            for (k, v) in map {
                obj.insert(k.clone(), v.clone());
            }
        }

        if let Value::Object(ref map) = merged_params {
            for (k, v) in map {
                tracing::debug!(parameter = %k, value = %v, "penalty parameter");
            }
        }

        let params: Self = serde_json::from_value(merged_params).map_err(|e| {
            PenaltyError::InvalidHyperparameters {
                reason: e.to_string(),
            }
        })?;
        params.validate()?;
        Ok(params)
    }
}
