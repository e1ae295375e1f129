use serde::Serialize;

use crate::accumulator::PageAccumulator;
use crate::block::{Block, SectionKind};
use crate::builders;
use crate::config::LayoutSpec;
use crate::debug::DebugLogger;
use crate::error::GalleyError;
use crate::metrics::{PageMetrics, PaginationMetrics};
use crate::model::AgreementModel;
use crate::tableflow;
use crate::types::Px;

/// One committed page: ordered blocks plus the accumulated content height.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub blocks: Vec<Block>,
    pub used: Px,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationResult {
    pub pages: Vec<Page>,
    /// Flowed pages plus the separately rendered cover page.
    pub page_count: usize,
}

/// One full pagination run over an immutable model snapshot. Strictly
/// sequential; every edit to the model re-runs this from scratch.
pub(crate) fn paginate_model(
    model: &AgreementModel,
    spec: &LayoutSpec,
    debug: Option<DebugLogger>,
) -> Result<(PaginationResult, PaginationMetrics), GalleyError> {
    if model.is_blank() {
        return Err(GalleyError::EmptyDocument);
    }

    let mut acc = PageAccumulator::new(spec.page_capacity, debug.clone());

    // Document order is fixed: scope table, narrative, milestone groups,
    // closing sections, signatures.
    let repeated_headers = tableflow::flow_scope_table(&mut acc, &model.scope, spec)?;

    let texts = &model.sections;
    let narrative = [
        (SectionKind::Intro, texts.intro.as_str()),
        (SectionKind::Definitions, texts.definitions.as_str()),
        (SectionKind::ScopeNarrative, texts.scope_narrative.as_str()),
    ];
    for (section, text) in narrative {
        if text.trim().is_empty() {
            continue;
        }
        acc.push(Block::Text(builders::narrative_block(section, text, spec)))?;
    }

    for group in model.milestone_groups() {
        let Some(block) = builders::milestone_group_block(group, spec) else {
            continue;
        };
        acc.reserve(block.height, spec.group_break_margin);
        acc.push(Block::MilestoneGroup(block))?;
    }

    let closing = [
        (SectionKind::Approval, texts.approval.as_str()),
        (SectionKind::Feedback, texts.feedback.as_str()),
        (SectionKind::Revisions, texts.revisions.as_str()),
        (SectionKind::StyleGuideLock, texts.style_guide_lock.as_str()),
    ];
    for (section, text) in closing {
        if text.trim().is_empty() {
            continue;
        }
        acc.push(Block::Text(builders::narrative_block(section, text, spec)))?;
    }

    acc.push(Block::Signature(builders::signature_block(model, spec)))?;

    let (pages, filler_blocks) = acc.finish();

    if let Some(debug) = &debug {
        debug.emit_summary("paginate");
        debug.flush();
    }

    let metrics = PaginationMetrics {
        pages: pages
            .iter()
            .enumerate()
            .map(|(idx, page)| PageMetrics {
                page_number: idx + 1,
                block_count: page.blocks.len(),
                used: page.used,
                slack: (spec.page_capacity - page.used).max(Px::ZERO),
            })
            .collect(),
        block_count: pages.iter().map(|page| page.blocks.len()).sum(),
        repeated_headers,
        filler_blocks,
    };

    let page_count = pages.len() + 1;
    Ok((PaginationResult { pages, page_count }, metrics))
}
