use crate::config::LayoutSpec;
use crate::types::Px;

/// Estimates the rendered height of `text` wrapped inside a column of
/// `column_width`, without running a real layout pass.
///
/// The heuristic treats every glyph as 0.6 x font-size wide, divides the
/// usable column width into whole character slots and charges one line-height
/// per resulting line, plus the cell's vertical padding. It is deliberately
/// crude: callers get a deterministic estimate, not a guarantee, and the
/// accumulator's break margins absorb the slack.
pub fn estimate_text_height(text: &str, column_width: Px, spec: &LayoutSpec) -> Px {
    let char_count = text.chars().count();
    if char_count == 0 {
        // An empty cell still occupies one line; never estimate zero.
        return spec.line_height;
    }

    let glyph_width = spec.font_size.mul_ratio(3, 5);
    let usable_width = (column_width - spec.cell_h_padding).max(Px::ZERO);

    // Whole character slots per line, clamped so pathological inputs
    // (zero-width columns, giant fonts) degrade to one glyph per line
    // instead of dividing by zero.
    let glyph_milli = glyph_width.to_milli_i64().max(1);
    let chars_per_line = ((usable_width.to_milli_i64() / glyph_milli).max(1)) as usize;

    let line_count = char_count.div_ceil(chars_per_line);
    spec.line_height * (line_count as i32) + spec.cell_v_padding
}
