use crate::block::{
    MilestoneGroupBlock, MilestoneLine, SectionKind, SignatureBlock, TableHeaderBlock,
    TableRowBlock, TextBlock,
};
use crate::config::LayoutSpec;
use crate::measure::estimate_text_height;
use crate::model::{AgreementModel, MilestoneGroup, ScopeRow};

pub(crate) fn scope_heading_block(spec: &LayoutSpec) -> TextBlock {
    TextBlock {
        section: SectionKind::ScopeHeading,
        text: "Scope of Work".to_string(),
        height: spec.section_header_height,
    }
}

pub(crate) fn scope_header_block(spec: &LayoutSpec) -> TableHeaderBlock {
    TableHeaderBlock {
        height: spec.table_header_height,
    }
}

/// A scope row is as tall as its tallest cell: the three columns wrap
/// independently and the row must cover all of them.
pub(crate) fn scope_row_block(row: &ScopeRow, spec: &LayoutSpec) -> TableRowBlock {
    let height = estimate_text_height(&row.category, spec.category_col_width, spec)
        .max(estimate_text_height(&row.flow, spec.flow_col_width, spec))
        .max(estimate_text_height(
            &row.description,
            spec.description_col_width,
            spec,
        ));
    TableRowBlock {
        category: row.category.clone(),
        flow: row.flow.clone(),
        description: row.description.clone(),
        height,
    }
}

pub(crate) fn narrative_block(section: SectionKind, text: &str, spec: &LayoutSpec) -> TextBlock {
    TextBlock {
        section,
        text: text.to_string(),
        height: estimate_text_height(text, spec.content_width, spec),
    }
}

/// Builds one atomic milestone-group composite, or `None` for a group with
/// no rows. Height is the sum of all sub-parts: title band, column header,
/// line rows, total-days footer.
pub(crate) fn milestone_group_block(
    group: &MilestoneGroup,
    spec: &LayoutSpec,
) -> Option<MilestoneGroupBlock> {
    if group.rows.is_empty() {
        return None;
    }
    let lines: Vec<MilestoneLine> = group
        .rows
        .iter()
        .map(|row| MilestoneLine {
            title: row.title.clone(),
            days: row.days,
            weight: row.weight,
            height: estimate_text_height(&row.title, spec.milestone_title_col_width, spec),
        })
        .collect();
    let height = spec.group_title_height
        + spec.table_header_height
        + lines.iter().map(|line| line.height).sum()
        + spec.group_footer_height;
    Some(MilestoneGroupBlock {
        title: group.title.clone(),
        total_days: group.total_days(),
        lines,
        height,
    })
}

pub(crate) fn signature_block(model: &AgreementModel, spec: &LayoutSpec) -> SignatureBlock {
    SignatureBlock {
        client_name: model.client.name.clone(),
        agency_name: model.agency.name.clone(),
        height: spec.signature_height,
    }
}
