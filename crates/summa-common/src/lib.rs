//! Common types shared across all summa-launch crates.

pub mod decisions;
pub mod error;
pub mod ident;
pub mod run;

pub use decisions::{DecisionSet, DecisionSpec};
pub use error::{SummaError, SummaResult};
pub use ident::{RunLabel, SiteId};
pub use run::{RunDescriptor, RunPeriod};
