pub mod cost_evaluator;
pub mod measure;
pub mod solution;

pub use cost_evaluator::CostEvaluator;
pub use measure::*;
pub use solution::{RouteStats, SolutionStats};

#[macro_export]
macro_rules! measure_struct_with_getters {
    ( $(#[$meta:meta])* $name:ident { $( $(#[$attr:meta])* $param:ident : $type:ty ),* $(,)? } ) => (
        $(#[$meta])*
        #[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $name {
            $(
                $(#[$attr])*
                #[serde(default)]
                pub $param : $type,
            )*
        }
        impl $name {
            $(
                #[inline]
                pub fn $param(&self) -> $type {
                    self.$param
                }
            )*
        }
    );
}
