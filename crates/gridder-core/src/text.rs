// File: crates/gridder-core/src/text.rs
// Summary: Font face description and a Skia textlayout shaper for anchored strings.

use serde::{Deserialize, Serialize};
use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

pub const DEFAULT_FONT_SIZE: f32 = 16.0;

const SANS_FAMILIES: [&str; 6] = ["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"];
const MONO_FAMILIES: [&str; 5] = ["Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"];

/// Font request: family fallbacks in preference order and a size in pixels.
/// Resolution against installed fonts is left to the canvas backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontFace {
    pub families: Vec<String>,
    pub size: f32,
}

impl FontFace {
    pub fn new<S: Into<String>>(families: impl IntoIterator<Item = S>, size: f32) -> Self {
        Self { families: families.into_iter().map(Into::into).collect(), size }
    }

    pub fn sans(size: f32) -> Self {
        Self::new(SANS_FAMILIES, size)
    }

    /// Monospaced/tabular-number families.
    pub fn mono(size: f32) -> Self {
        Self::new(MONO_FAMILIES, size)
    }
}

impl Default for FontFace {
    fn default() -> Self {
        Self::sans(DEFAULT_FONT_SIZE)
    }
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(face: &FontFace, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(face.size.max(1.0));
        ts.set_color(color);
        if face.families.is_empty() {
            ts.set_font_families(&SANS_FAMILIES[..]);
        } else {
            ts.set_font_families(face.families.as_slice());
        }
        ts
    }

    pub fn layout(&self, text: &str, face: &FontFace, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(face, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Paint `text` so the point `(anchor_x * width, anchor_y * height)` of its box,
    /// measured from the left edge and up from the baseline (`height` is the
    /// first line's ascent plus descent), lands on `(x, y)`.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_anchored(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        face: &FontFace,
        color: skia::Color,
        x: f32,
        y: f32,
        anchor_x: f32,
        anchor_y: f32,
    ) {
        let paragraph = self.layout(text, face, color);
        let width = paragraph.longest_line();
        let height = first_line_height(&paragraph);
        let baseline_x = x - anchor_x * width;
        let baseline_y = y + anchor_y * height;
        // Paragraph paints from its top-left corner, not from the baseline.
        let top = baseline_y - paragraph.alphabetic_baseline();
        paragraph.paint(canvas, (baseline_x, top));
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

/// Ascent plus descent of the first line, without paragraph spacing.
fn first_line_height(paragraph: &Paragraph) -> f32 {
    paragraph
        .get_line_metrics()
        .first()
        .map(|m| (m.ascent + m.descent) as f32)
        .unwrap_or_else(|| paragraph.height())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_height_covers_one_line_only() {
        let shaper = TextShaper::new();
        let paragraph = shaper.layout("A\nB", &FontFace::sans(40.0), skia::Color::BLACK);
        let line = first_line_height(&paragraph);
        assert!(line >= 0.0);
        assert!(line <= paragraph.height() / 2.0 + 0.5, "line {line} vs paragraph {}", paragraph.height());
    }
}
