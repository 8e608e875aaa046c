//! Simulated Annealing (SA).
//!
//! A trajectory search that picks one random neighbor per iteration and
//! accepts worsening moves with a probability that shrinks as the
//! temperature cools. Both the cooling schedule and the acceptance rule
//! are part of the configuration.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Barker (1965), "Monte Carlo Calculations of the Radial Distribution Functions"
//! - Lundy & Mees (1986), "Convergence of an Annealing Algorithm"

mod config;
mod runner;

pub use config::{Acceptance, CoolingSchedule, SaConfig};
pub use runner::{SaResult, SaRunner};
