use salvage_structs::Cost;

/// Half width of the band around the target feasible fraction in which a
/// penalty is left untouched.
pub const DEAD_ZONE: f64 = 0.05;

/// Added on increase and subtracted on decrease so that small penalties do
/// not get stuck on the same integer.
pub const PENALTY_NUDGE: f64 = 1.0;

pub const MIN_PENALTY: Cost = 1;

/// Upper bound keeping penalised costs clear of overflow when combined with
/// distances and durations.
pub const MAX_PENALTY: Cost = 1000;

/// Computes the next value of a penalty coefficient from its current value and
/// the fraction of feasible registrations observed since the last update.
///
/// Raises the penalty by `penalty_increase` when too few registrations were
/// feasible, lowers it by `penalty_decrease` when too many were, and keeps it
/// when the fraction is within [`DEAD_ZONE`] of `target_feasible`. The result
/// always lies in `[MIN_PENALTY, MAX_PENALTY]`: a value outside that range is
/// clamped even inside the dead zone.
pub fn compute_penalty(
    penalty: Cost,
    feasible_fraction: f64,
    target_feasible: f64,
    penalty_increase: f64,
    penalty_decrease: f64,
) -> Cost {
    let diff = target_feasible - feasible_fraction;
    if -DEAD_ZONE < diff && diff < DEAD_ZONE {
        return penalty.clamp(MIN_PENALTY, MAX_PENALTY);
    }

    let penalty = penalty as f64;
    let next = if diff > 0.0 {
        (penalty_increase * penalty + PENALTY_NUDGE).min(MAX_PENALTY as f64)
    } else {
        (penalty_decrease * penalty - PENALTY_NUDGE).max(MIN_PENALTY as f64)
    };
    next.floor() as Cost
}
