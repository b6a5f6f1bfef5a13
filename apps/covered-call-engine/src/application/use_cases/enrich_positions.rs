//! Enrich Positions Use Case
//!
//! Derives every metric for stored records as of the clock's "today".

use std::sync::Arc;

use tracing::debug;

use crate::domain::position::Position;
use crate::domain::shared::Clock;
use crate::metrics::{EnrichedPosition, PortfolioSummary, enrich};

/// Use case for reading positions with their derived metrics.
pub struct EnrichPositionsUseCase<C>
where
    C: Clock,
{
    clock: Arc<C>,
}

impl<C> EnrichPositionsUseCase<C>
where
    C: Clock,
{
    /// Create a new `EnrichPositionsUseCase`.
    pub const fn new(clock: Arc<C>) -> Self {
        Self { clock }
    }

    /// Enrich every position. Nothing is cached between calls.
    pub fn execute(&self, positions: &[Position]) -> Vec<EnrichedPosition> {
        let today = self.clock.today();
        debug!(count = positions.len(), %today, "Enriching positions");
        positions.iter().map(|p| enrich(p, today)).collect()
    }

    /// Enrich and summarize every position.
    pub fn summarize(&self, positions: &[Position]) -> PortfolioSummary {
        let today = self.clock.today();
        let enriched: Vec<_> = positions.iter().map(|p| enrich(p, today)).collect();
        PortfolioSummary::from_positions(&enriched, today)
    }
}
