use std::fmt::Write as _;
use std::sync::Arc;

use image::RgbaImage;
use resvg::tiny_skia;

use crate::core::explanations::errors::ExplanationError;
use crate::core::explanations::explanation_config::ExplanationConfig;
use crate::core::explanations::wrap_text::wrap_text;

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// SVG for a white panel with `body` wrapped and drawn top-down in black.
#[must_use]
pub fn text_panel_svg(config: &ExplanationConfig, height: u32, body: &str) -> String {
    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}"><rect width="{w}" height="{h}" fill="white"/>"#,
        w = config.panel_width,
        h = height,
    );

    for (index, line) in wrap_text(body, config.wrap_width).iter().enumerate() {
        // SVG places text by its baseline, one font size below the line top.
        let baseline =
            config.margin_top as f32 + (index as u32 * config.line_height) as f32 + config.font_size;
        let _ = write!(
            svg,
            r#"<text x="{x}" y="{y}" font-family="{family}" font-size="{size}" fill="black">{text}</text>"#,
            x = config.margin_left,
            y = baseline,
            family = escape_xml(&config.font_family),
            size = config.font_size,
            text = escape_xml(line),
        );
    }

    svg.push_str("</svg>");
    svg
}

/// Font database with the system fonts plus any configured font directories.
#[must_use]
pub fn load_font_database(config: &ExplanationConfig) -> Arc<usvg::fontdb::Database> {
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();
    for dir in &config.font_dirs {
        db.load_fonts_dir(dir);
    }

    tracing::debug!(faces = db.len(), "loaded fonts for text panel");
    Arc::new(db)
}

/// Rasterizes the explanation panel at `(panel_width, height)`.
///
/// Glyphs missing from `fontdb` are skipped, leaving the panel blank white.
pub fn render_text_panel(
    config: &ExplanationConfig,
    fontdb: Arc<usvg::fontdb::Database>,
    height: u32,
    body: &str,
) -> Result<RgbaImage, ExplanationError> {
    let width = config.panel_width;
    let size_error = ExplanationError::PanelSize { width, height };

    let Some(mut pixmap) = tiny_skia::Pixmap::new(width, height) else {
        return Err(size_error);
    };

    let options = usvg::Options {
        fontdb,
        ..Default::default()
    };
    let tree = usvg::Tree::from_str(&text_panel_svg(config, height, body), &options)?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    // The opaque white background means premultiplied and straight alpha agree.
    RgbaImage::from_raw(width, height, pixmap.take()).ok_or(size_error)
}
