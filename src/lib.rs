mod accumulator;
mod block;
mod builders;
mod config;
mod debug;
mod error;
mod fingerprint;
mod measure;
mod metrics;
mod model;
mod paginate;
mod tableflow;
mod types;

pub use block::{
    Block, FillerBlock, MilestoneGroupBlock, MilestoneLine, SectionKind, SignatureBlock,
    TableHeaderBlock, TableRowBlock, TextBlock,
};
pub use config::LayoutSpec;
use debug::DebugLogger;
pub use error::GalleyError;
pub use measure::estimate_text_height;
pub use metrics::{PageMetrics, PaginationMetrics};
pub use model::{
    AgreementModel, MilestoneGroup, MilestoneRow, PartyInfo, ScopeRow, SectionTexts,
};
pub use paginate::{Page, PaginationResult};
pub use types::Px;

/// Configured pagination engine. Cheap to construct, safe to reuse: every
/// `paginate` call builds its accumulator state from scratch, so one engine
/// can serve every edit of a document session.
#[derive(Debug)]
pub struct Galley {
    spec: LayoutSpec,
    debug: Option<DebugLogger>,
}

impl Galley {
    pub fn new() -> Self {
        Self {
            spec: LayoutSpec::default(),
            debug: None,
        }
    }

    pub fn builder() -> GalleyBuilder {
        GalleyBuilder::new()
    }

    pub fn layout(&self) -> &LayoutSpec {
        &self.spec
    }

    /// Lays the agreement out across pages. Deterministic: an unchanged
    /// model yields a structurally identical result on every call.
    pub fn paginate(&self, model: &AgreementModel) -> Result<PaginationResult, GalleyError> {
        Ok(self.paginate_with_metrics(model)?.0)
    }

    pub fn paginate_with_metrics(
        &self,
        model: &AgreementModel,
    ) -> Result<(PaginationResult, PaginationMetrics), GalleyError> {
        paginate::paginate_model(model, &self.spec, self.debug.clone())
    }
}

impl Default for Galley {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
pub struct GalleyBuilder {
    spec: LayoutSpec,
    debug_path: Option<std::path::PathBuf>,
}

impl GalleyBuilder {
    pub fn new() -> Self {
        Self {
            spec: LayoutSpec::default(),
            debug_path: None,
        }
    }

    /// Replaces the whole layout configuration in one step.
    pub fn layout(mut self, spec: LayoutSpec) -> Self {
        self.spec = spec;
        self
    }

    pub fn page_capacity(mut self, value: f32) -> Self {
        self.spec.page_capacity = Px::from_f32(value);
        self
    }

    pub fn content_width(mut self, value: f32) -> Self {
        self.spec.content_width = Px::from_f32(value);
        self
    }

    pub fn font_size(mut self, value: f32) -> Self {
        self.spec.font_size = Px::from_f32(value);
        self
    }

    pub fn line_height(mut self, value: f32) -> Self {
        self.spec.line_height = Px::from_f32(value);
        self
    }

    pub fn group_break_margin(mut self, value: f32) -> Self {
        self.spec.group_break_margin = Px::from_f32(value);
        self
    }

    /// Writes a JSON-lines trace of break decisions to `path`.
    pub fn debug_log(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.debug_path = Some(path.into());
        self
    }

    pub fn build(self) -> Result<Galley, GalleyError> {
        self.spec.validate()?;
        let debug = match &self.debug_path {
            Some(path) => Some(DebugLogger::new(path)?),
            None => None,
        };
        Ok(Galley {
            spec: self.spec,
            debug,
        })
    }
}

impl Default for GalleyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn short_scope_rows(count: usize) -> Vec<ScopeRow> {
        (0..count)
            .map(|idx| ScopeRow {
                category: "Shop".to_string(),
                flow: format!("Checkout {idx}"),
                description: "Cart review".to_string(),
            })
            .collect()
    }

    #[test]
    fn three_short_rows_stay_on_the_first_content_page() {
        // Single-line rows estimate at 22px: 20px line plus 2px padding.
        let spec = LayoutSpec {
            line_height: Px::from_i32(20),
            cell_v_padding: Px::from_i32(2),
            ..LayoutSpec::default()
        };
        let engine = Galley::builder().layout(spec).build().unwrap();

        let mut with_rows = AgreementModel::default();
        with_rows.scope = short_scope_rows(3);
        let without_rows = AgreementModel::default();

        let populated = engine.paginate(&with_rows).unwrap();
        let baseline = engine.paginate(&without_rows).unwrap();

        // 150 + 28 + 3 * 22 never overflows a 1353px page, so the rows add
        // no page over the fixed-sections baseline.
        assert_eq!(populated.page_count, baseline.page_count);
        let first_page_rows = populated.pages[0]
            .blocks
            .iter()
            .filter(|block| matches!(block, Block::TableRow(_)))
            .count();
        assert_eq!(first_page_rows, 3);
    }

    #[test]
    fn group_that_misses_the_margin_starts_a_fresh_page() {
        let spec = LayoutSpec {
            page_capacity: Px::from_i32(300),
            section_header_height: Px::from_i32(20),
            table_header_height: Px::from_i32(10),
            group_title_height: Px::from_i32(20),
            group_footer_height: Px::from_i32(10),
            group_break_margin: Px::from_i32(50),
            line_height: Px::from_i32(20),
            cell_v_padding: Px::from_i32(5),
            ..LayoutSpec::default()
        };
        let engine = Galley::builder().layout(spec).build().unwrap();

        let mut model = AgreementModel::default();
        model.scope = short_scope_rows(2);
        model.sections.intro = "Intro.".to_string();
        model.sections.definitions = "Definitions.".to_string();
        model.sections.scope_narrative = "Narrative.".to_string();
        model.design_milestones = MilestoneGroup {
            title: "Design".to_string(),
            rows: (0..4)
                .map(|idx| MilestoneRow {
                    title: format!("Step {idx}"),
                    days: 3,
                    weight: 5.0,
                })
                .collect(),
        };

        let result = engine.paginate(&model).unwrap();

        let filler_page = result
            .pages
            .iter()
            .position(|page| page.blocks.iter().any(|block| block.is_filler()))
            .expect("a filler block must be emitted");
        // The filler closes out its page and the group opens the next one.
        assert!(result.pages[filler_page].blocks.last().unwrap().is_filler());
        assert!(matches!(
            result.pages[filler_page + 1].blocks.first().unwrap(),
            Block::MilestoneGroup(_)
        ));
    }

    #[test]
    fn pagination_is_deterministic() {
        let mut model = AgreementModel::default();
        model.scope = short_scope_rows(40);
        model.development_milestones = MilestoneGroup {
            title: "Development".to_string(),
            rows: vec![MilestoneRow {
                title: "Build".to_string(),
                days: 20,
                weight: 50.0,
            }],
        };
        let engine = Galley::new();
        let first = engine.paginate(&model).unwrap();
        let second = engine.paginate(&model).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.fingerprint(), second.fingerprint());

        model.scope[7].description.push_str(" Plus edge cases.");
        let third = engine.paginate(&model).unwrap();
        assert_ne!(first.fingerprint(), third.fingerprint());
    }

    #[test]
    fn builder_rejects_broken_configuration() {
        let err = Galley::builder().page_capacity(0.0).build().unwrap_err();
        assert!(matches!(err, GalleyError::InvalidConfiguration(_)));
    }

    #[test]
    fn debug_log_records_break_decisions() {
        let path = std::env::temp_dir().join("galley_debug_trace_test.jsonl");
        let engine = Galley::builder().debug_log(&path).build().unwrap();
        let mut model = AgreementModel::default();
        model.scope = short_scope_rows(80);
        engine.paginate(&model).unwrap();
        let trace = std::fs::read_to_string(&path).unwrap();
        assert!(trace.contains("\"type\":\"flow.page_break\""));
        assert!(trace.contains("\"type\":\"flow.summary\""));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn result_serializes_for_the_host() {
        let engine = Galley::new();
        let mut model = AgreementModel::default();
        model.scope = short_scope_rows(2);
        let result = engine.paginate(&model).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json["pageCount"].as_u64().unwrap() as usize,
            result.page_count
        );
        assert_eq!(json["pages"][0]["blocks"][0]["kind"], "text");
    }
}
