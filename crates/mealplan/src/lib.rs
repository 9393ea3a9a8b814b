mod plan;
mod planner;
mod week;

pub use plan::*;
pub use planner::*;
pub use week::*;
