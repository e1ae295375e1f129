use serde::Serialize;

use crate::types::Px;

/// Which narrative section a text block renders. The engine only needs the
/// tag for tracing and for hosts that style sections differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKind {
    ScopeHeading,
    Intro,
    Definitions,
    ScopeNarrative,
    Approval,
    Feedback,
    Revisions,
    StyleGuideLock,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBlock {
    pub section: SectionKind,
    pub text: String,
    pub height: Px,
}

/// Column header row of the scope-of-work table. Re-emitted at the top of
/// every continuation page when the table splits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableHeaderBlock {
    pub height: Px,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRowBlock {
    pub category: String,
    pub flow: String,
    pub description: String,
    pub height: Px,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneLine {
    pub title: String,
    pub days: u32,
    pub weight: f32,
    pub height: Px,
}

/// A whole milestone group rendered as one atomic block: title band, column
/// header, every line row and a synthetic total-days footer. Groups never
/// split across pages; the accumulator reserves room ahead of them instead.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneGroupBlock {
    pub title: String,
    pub lines: Vec<MilestoneLine>,
    pub total_days: u32,
    pub height: Px,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureBlock {
    pub client_name: String,
    pub agency_name: String,
    pub height: Px,
}

/// Inert spacer emitted by the overflow-filler rule; forces the next block
/// onto a fresh page. Carries no content.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FillerBlock {
    pub height: Px,
}

/// Atomic unit of layout. Exhaustive by construction: the renderer matches
/// on the variant, the accumulator only ever reads the height.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Block {
    Text(TextBlock),
    TableHeader(TableHeaderBlock),
    TableRow(TableRowBlock),
    MilestoneGroup(MilestoneGroupBlock),
    Signature(SignatureBlock),
    Filler(FillerBlock),
}

impl Block {
    pub fn height(&self) -> Px {
        match self {
            Block::Text(block) => block.height,
            Block::TableHeader(block) => block.height,
            Block::TableRow(block) => block.height,
            Block::MilestoneGroup(block) => block.height,
            Block::Signature(block) => block.height,
            Block::Filler(block) => block.height,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Block::Text(_) => "text",
            Block::TableHeader(_) => "table_header",
            Block::TableRow(_) => "table_row",
            Block::MilestoneGroup(_) => "milestone_group",
            Block::Signature(_) => "signature",
            Block::Filler(_) => "filler",
        }
    }

    pub fn is_filler(&self) -> bool {
        matches!(self, Block::Filler(_))
    }

    pub fn is_table_header(&self) -> bool {
        matches!(self, Block::TableHeader(_))
    }
}
