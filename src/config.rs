use crate::error::GalleyError;
use crate::types::Px;

/// Immutable layout configuration for one pagination run.
///
/// Every dimension that drives a break decision lives here rather than in
/// module-level constants, so the same engine can target different page
/// geometries (and tests can shrink pages to force splits).
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSpec {
    /// Content-area height budget shared by every page.
    pub page_capacity: Px,
    /// Full content-area width; narrative paragraphs wrap against this.
    pub content_width: Px,
    pub category_col_width: Px,
    pub flow_col_width: Px,
    pub description_col_width: Px,
    pub milestone_title_col_width: Px,
    /// Section heading band above the scope-of-work table.
    pub section_header_height: Px,
    /// Column header row of the scope-of-work table; repeated on every
    /// continuation page.
    pub table_header_height: Px,
    pub group_title_height: Px,
    pub group_footer_height: Px,
    pub signature_height: Px,
    /// Slack demanded below a milestone group before it is allowed to start
    /// on the current page. Tunable; it shrinks the odds of estimator
    /// undershoot spilling past the page edge, it does not eliminate them.
    pub group_break_margin: Px,
    pub font_size: Px,
    pub line_height: Px,
    pub cell_h_padding: Px,
    pub cell_v_padding: Px,
}

impl Default for LayoutSpec {
    fn default() -> Self {
        Self {
            page_capacity: Px::from_i32(1353),
            content_width: Px::from_i32(864),
            category_col_width: Px::from_i32(180),
            flow_col_width: Px::from_i32(220),
            description_col_width: Px::from_i32(464),
            milestone_title_col_width: Px::from_i32(520),
            section_header_height: Px::from_i32(150),
            table_header_height: Px::from_i32(28),
            group_title_height: Px::from_i32(40),
            group_footer_height: Px::from_i32(28),
            signature_height: Px::from_i32(180),
            group_break_margin: Px::from_i32(100),
            font_size: Px::from_f32(13.0),
            line_height: Px::from_f32(20.8),
            cell_h_padding: Px::from_i32(24),
            cell_v_padding: Px::from_i32(12),
        }
    }
}

impl LayoutSpec {
    pub(crate) fn validate(&self) -> Result<(), GalleyError> {
        fn positive(name: &str, value: Px) -> Result<(), GalleyError> {
            if value <= Px::ZERO {
                return Err(GalleyError::InvalidConfiguration(format!(
                    "{} must be positive, got {}px",
                    name,
                    value.to_f32()
                )));
            }
            Ok(())
        }
        fn non_negative(name: &str, value: Px) -> Result<(), GalleyError> {
            if value.is_negative() {
                return Err(GalleyError::InvalidConfiguration(format!(
                    "{} must not be negative, got {}px",
                    name,
                    value.to_f32()
                )));
            }
            Ok(())
        }

        positive("page_capacity", self.page_capacity)?;
        positive("content_width", self.content_width)?;
        positive("category_col_width", self.category_col_width)?;
        positive("flow_col_width", self.flow_col_width)?;
        positive("description_col_width", self.description_col_width)?;
        positive("milestone_title_col_width", self.milestone_title_col_width)?;
        positive("section_header_height", self.section_header_height)?;
        positive("table_header_height", self.table_header_height)?;
        positive("group_title_height", self.group_title_height)?;
        positive("group_footer_height", self.group_footer_height)?;
        positive("signature_height", self.signature_height)?;
        positive("font_size", self.font_size)?;
        positive("line_height", self.line_height)?;
        non_negative("group_break_margin", self.group_break_margin)?;
        non_negative("cell_h_padding", self.cell_h_padding)?;
        non_negative("cell_v_padding", self.cell_v_padding)?;

        if self.table_header_height >= self.page_capacity {
            return Err(GalleyError::InvalidConfiguration(
                "table_header_height must leave room for at least one row".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_spec_is_valid() {
        assert!(LayoutSpec::default().validate().is_ok());
    }

    #[test]
    fn rejects_zero_capacity() {
        let spec = LayoutSpec {
            page_capacity: Px::ZERO,
            ..LayoutSpec::default()
        };
        assert!(matches!(
            spec.validate(),
            Err(GalleyError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn rejects_negative_margin() {
        let spec = LayoutSpec {
            group_break_margin: Px::from_i32(-1),
            ..LayoutSpec::default()
        };
        assert!(matches!(
            spec.validate(),
            Err(GalleyError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn rejects_header_taller_than_page() {
        let spec = LayoutSpec {
            page_capacity: Px::from_i32(28),
            ..LayoutSpec::default()
        };
        assert!(spec.validate().is_err());
    }
}
