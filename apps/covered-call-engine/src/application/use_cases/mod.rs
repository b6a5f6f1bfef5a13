//! Application Use Cases
//!
//! Use cases orchestrate domain logic to fulfill application requirements.

mod analyze_roll;
mod enrich_positions;
mod execute_roll;

pub use analyze_roll::{AnalyzeRollUseCase, RollAnalysis};
pub use enrich_positions::EnrichPositionsUseCase;
pub use execute_roll::{ExecuteRollUseCase, RollOutcome};
