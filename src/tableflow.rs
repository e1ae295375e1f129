use crate::accumulator::{BreakReason, PageAccumulator};
use crate::block::Block;
use crate::builders;
use crate::config::LayoutSpec;
use crate::error::GalleyError;
use crate::model::ScopeRow;

/// Flows the scope-of-work table through the accumulator. This is the only
/// splittable content in the document: rows spill onto as many pages as they
/// need, and every continuation page is seeded with a repeated column-header
/// block before the row that triggered the break.
///
/// Returns the number of repeated headers emitted, for metrics.
pub(crate) fn flow_scope_table(
    acc: &mut PageAccumulator,
    rows: &[ScopeRow],
    spec: &LayoutSpec,
) -> Result<usize, GalleyError> {
    acc.push(Block::Text(builders::scope_heading_block(spec)))?;
    let header = builders::scope_header_block(spec);
    acc.push(Block::TableHeader(header))?;

    let mut repeated = 0usize;
    for row in rows {
        let row_block = builders::scope_row_block(row, spec);
        if acc.would_overflow(row_block.height) {
            acc.close_page(BreakReason::TableSplit, "table_row");
            // Fresh page starts at header height plus this row.
            acc.push(Block::TableHeader(header))?;
            repeated += 1;
        }
        acc.push(Block::TableRow(row_block))?;
    }
    Ok(repeated)
}
