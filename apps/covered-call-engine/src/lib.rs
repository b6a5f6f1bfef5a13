// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::items_after_statements
    )
)]

//! Covered Call Engine - Core Library
//!
//! Metrics and roll recommendations for covered-call positions: a short call
//! sold against 100 shares per contract.
//!
//! # Architecture (Clean Architecture + DDD)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: value objects, the `Position` aggregate and its lifecycle,
//!   roll proposals, the fixed roll rule table and scoring engine
//! - **Metrics**: pure formulas (DTE, moneyness, premium, yield, P&L,
//!   buffer, roll economics), enriched views and portfolio summary
//! - **Application**: form DTOs, field-level validation and use cases
//!   (`EnrichPositions`, `AnalyzeRoll`, `ExecuteRoll`)
//! - **Infrastructure**: YAML config, tracing setup, JSON backups
//!
//! Every calculation takes "today" explicitly, through a [`Clock`] or a
//! `NaiveDate`, so results are deterministic.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no I/O.
pub mod domain;

/// Metrics layer - Pure position and roll formulas.
pub mod metrics;

/// Application layer - DTOs, validation and use cases.
pub mod application;

/// Infrastructure layer - Config, telemetry and backups.
pub mod infrastructure;

// =============================================================================
// Re-exports
// =============================================================================

pub use application::{
    AnalyzeRollUseCase, ApplicationError, EnrichPositionsUseCase, ExecuteRollUseCase,
    PositionForm, RollAnalysis, RollOutcome, RollProposalForm, ValidationErrors,
};
pub use domain::position::{BufferRisk, Moneyness, NewPosition, Position, PositionStatus};
pub use domain::roll::{
    Recommendation, RecommendationItem, RecommendationKind, RollAction, RollDecisionInput,
    RollProposal, analyze_roll_decision,
};
pub use domain::shared::{Clock, FixedClock, Money, PositionId, SystemClock, Ticker, Timestamp};
pub use metrics::{EnrichedPosition, PortfolioSummary, RollMetrics, enrich};
