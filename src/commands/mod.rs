//! Command implementations

pub mod evaluate;
pub mod play;
pub mod serve;
pub mod simulate;

pub use evaluate::{EvaluationResult, evaluate_pair};
pub use play::run_play;
pub use serve::run_server;
pub use simulate::{SimulationConfig, SimulationResult, run_simulation};
