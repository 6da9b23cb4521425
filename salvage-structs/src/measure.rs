//! Integer measures shared by the cost evaluator and the penalty controller.
//!
//! All measures are signed so that differences such as `load - capacity` can be
//! taken without wrapping; negative excess is treated as zero wherever a
//! penalty is computed.

pub type Cost = i64;
pub type Distance = i64;
pub type Duration = i64;
pub type Load = i64;
pub type Salvage = i64;

/// Amount by which `value` exceeds `capacity`, or zero.
#[inline(always)]
pub fn excess(value: i64, capacity: i64) -> i64 {
    value.saturating_sub(capacity).max(0)
}
