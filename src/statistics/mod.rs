pub mod results;
mod stats;

pub use results::SweepResult;
pub use stats::Statistics;
