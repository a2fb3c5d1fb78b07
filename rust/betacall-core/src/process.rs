use tracing::debug;

use crate::compare::Comparator;
use crate::error::{Result, RouteError};
use crate::models::{Position, ProcessedPosition};
use crate::options::RouteConfig;
use crate::start::synthesize_start;

/// One `ProcessedPosition` per input position, in input order.
///
/// Move 0 is measured from a synthesized standing start; every later move
/// from the position right before it.
pub fn process_positions(positions: &[Position], config: &RouteConfig) -> Result<Vec<ProcessedPosition>> {
    let first = positions.first().ok_or_else(|| RouteError::MalformedInput("route has no positions".into()))?;
    let comparator = Comparator::new(config);
    let start = synthesize_start(first, config);

    let mut out = Vec::with_capacity(positions.len());
    out.push(comparator.compare_placements(first, &start)?);
    for (move_index, pair) in positions.windows(2).enumerate() {
        let processed = comparator.compare_placements(&pair[1], &pair[0]).inspect_err(|e| {
            debug!(move_index = move_index + 1, error = %e, "comparison failed");
        })?;
        out.push(processed);
    }
    Ok(out)
}
