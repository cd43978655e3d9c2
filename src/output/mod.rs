//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_evaluation_result, print_simulation_result, write_board, write_statistics,
};
