//! SVG generation from a design document

use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::document::{
    display_content, DesignElement, Document, ElementKind, EventRecord, FontStyle, FontWeight,
    ResolvedStyle, TextAlign,
};
use crate::geometry::Size;
use crate::theme::Theme;

use super::SvgConfig;

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    styles: Vec<String>,
    elements: Vec<String>,
    overlay: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            styles: vec![],
            elements: vec![],
            overlay: vec![],
            indent: 1,
        }
    }

    /// Add CSS custom properties from a theme
    pub fn add_theme(&mut self, theme: &Theme) {
        let mut css = String::from(":root {\n");
        for (token, value) in &theme.colors {
            css.push_str(&format!("    --{}: {};\n", token, value));
        }
        css.push_str("  }\n");
        if let Some(family) = &theme.font_family {
            let prefix = self.prefix();
            css.push_str(&format!(
                "  .{}element text {{ font-family: {}; }}",
                prefix,
                escape_xml(family)
            ));
        }
        self.styles.push(css);
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add an element background rectangle
    pub fn add_background(
        &mut self,
        id: &str,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        fill: Option<&str>,
        radius: f64,
        extra: &str,
    ) {
        let prefix = self.prefix();
        let rx_attr = if radius > 0.0 {
            format!(r#" rx="{}""#, radius)
        } else {
            String::new()
        };
        self.elements.push(format!(
            r#"{}<rect id="{}" class="{}element" x="{}" y="{}" width="{}" height="{}"{} fill="{}"{}/>"#,
            self.indent_str(),
            id,
            prefix,
            x,
            y,
            w,
            h,
            rx_attr,
            fill.unwrap_or("none"),
            extra
        ));
    }

    /// Add a text line, vertically centered with dominant-baseline
    pub fn add_text(&mut self, text: &str, x: f64, y: f64, anchor: &str, styles: &str) {
        let prefix = self.prefix();
        self.elements.push(format!(
            r#"{}<text class="{}text" x="{}" y="{}" text-anchor="{}" dominant-baseline="middle"{}>{}</text>"#,
            self.indent_str(),
            prefix,
            x,
            y,
            anchor,
            styles,
            escape_xml(text)
        ));
    }

    /// Add an image element
    pub fn add_image(&mut self, id: &str, href: &str, x: f64, y: f64, w: f64, h: f64) {
        let prefix = self.prefix();
        self.elements.push(format!(
            r#"{}<image id="{}" class="{}element {}image" href="{}" x="{}" y="{}" width="{}" height="{}" preserveAspectRatio="xMidYMid slice"/>"#,
            self.indent_str(),
            id,
            prefix,
            prefix,
            escape_xml(href),
            x,
            y,
            w,
            h
        ));
    }

    /// Add a debug outline and id label for an element
    pub fn add_debug_overlay(&mut self, id: &str, x: f64, y: f64, w: f64, h: f64, color: &str) {
        self.overlay.push(format!(
            r#"{}<rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="{}" stroke-dasharray="4,2"/>"#,
            self.indent_str(),
            x,
            y,
            w,
            h,
            color
        ));
        self.overlay.push(format!(
            r#"{}<text x="{}" y="{}" font-size="9" fill="{}">{}</text>"#,
            self.indent_str(),
            x,
            y - 3.0,
            color,
            escape_xml(id)
        ));
    }

    /// Build the final SVG string for a fixed-size canvas
    pub fn build(self, canvas: Size, background: &str) -> String {
        let nl = self.newline();
        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            canvas.width, canvas.height, canvas.width, canvas.height
        ));
        svg.push_str(nl);

        if !self.styles.is_empty() {
            svg.push_str("  <style>");
            svg.push_str(nl);
            for style in &self.styles {
                svg.push_str("    ");
                svg.push_str(style);
                svg.push_str(nl);
            }
            svg.push_str("  </style>");
            svg.push_str(nl);
        }

        // Canvas background
        svg.push_str(&format!(
            r#"  <rect width="{}" height="{}" fill="{}"/>"#,
            canvas.width, canvas.height, background
        ));
        svg.push_str(nl);

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        // Debug overlay on top
        for line in &self.overlay {
            svg.push_str(line);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");
        svg
    }
}

/// Render a document as a design-time or live preview.
///
/// With no record, field elements show their fixed placeholders; with a
/// record, live values win.
pub fn render_preview(
    document: &Document,
    record: Option<&EventRecord>,
    config: &SvgConfig,
    theme: &Theme,
) -> String {
    let mut builder = SvgBuilder::new(config.clone());
    builder.add_theme(theme);

    for element in &document.elements {
        render_element(element, record, config, theme, &mut builder);
    }

    if config.debug {
        let color = theme.color("debug-outline");
        for element in &document.elements {
            let b = element.bounds();
            builder.add_debug_overlay(&element.id, b.x, b.y, b.width, b.height, &color);
        }
    }

    builder.build(document.canvas_size, &theme.color("canvas"))
}

/// Render the public share surface.
///
/// The share route deliberately takes no record: field elements always show
/// their placeholders. This matches the current product behavior and is
/// preserved on purpose.
pub fn render_share(document: &Document, config: &SvgConfig, theme: &Theme) -> String {
    render_preview(document, None, config, theme)
}

/// Render a single element to the builder
fn render_element(
    element: &DesignElement,
    record: Option<&EventRecord>,
    config: &SvgConfig,
    theme: &Theme,
    builder: &mut SvgBuilder,
) {
    let bounds = element.bounds();
    let style = element.style.resolve();

    match element.kind {
        ElementKind::Image => {
            let href = image_href(element, config);
            if href.is_empty() {
                // No source yet: render the frame so the slot stays visible
                builder.add_background(
                    &element.id,
                    bounds.x,
                    bounds.y,
                    bounds.width,
                    bounds.height,
                    Some(&theme.color("card-edge")),
                    style.border_radius,
                    "",
                );
            } else {
                builder.add_image(
                    &element.id,
                    &href,
                    bounds.x,
                    bounds.y,
                    bounds.width,
                    bounds.height,
                );
            }
        }
        ElementKind::Container => {
            let stroke = format!(r#" stroke="{}""#, theme.color("card-edge"));
            builder.add_background(
                &element.id,
                bounds.x,
                bounds.y,
                bounds.width,
                bounds.height,
                style.background_color.as_deref(),
                style.border_radius,
                &stroke,
            );
            add_element_text(element, record, &style, builder);
        }
        ElementKind::Text | ElementKind::Field => {
            builder.add_background(
                &element.id,
                bounds.x,
                bounds.y,
                bounds.width,
                bounds.height,
                style.background_color.as_deref(),
                style.border_radius,
                "",
            );
            add_element_text(element, record, &style, builder);
        }
    }
}

/// Emit the element's display text, positioned per its alignment and padding
fn add_element_text(
    element: &DesignElement,
    record: Option<&EventRecord>,
    style: &ResolvedStyle,
    builder: &mut SvgBuilder,
) {
    let text = display_content(element, record);
    if text.is_empty() {
        return;
    }

    let bounds = element.bounds();
    let (x, anchor) = match style.text_align {
        TextAlign::Left => (bounds.x + style.padding, "start"),
        TextAlign::Center => (bounds.x + bounds.width / 2.0, "middle"),
        TextAlign::Right => (bounds.right() - style.padding, "end"),
    };
    let y = bounds.y + bounds.height / 2.0;

    builder.add_text(&text, x, y, anchor, &format_text_styles(style));
}

/// Format resolved text styles as SVG presentation attributes
fn format_text_styles(style: &ResolvedStyle) -> String {
    let mut parts = vec![
        format!(r#" font-size="{}""#, style.font_size),
        format!(r#" font-family="{}""#, escape_xml(&style.font_family)),
        format!(r#" fill="{}""#, style.color),
    ];
    if style.font_weight == FontWeight::Bold {
        parts.push(r#" font-weight="bold""#.to_string());
    }
    if style.font_style == FontStyle::Italic {
        parts.push(r#" font-style="italic""#.to_string());
    }
    parts.join("")
}

/// Resolve an image element's href, optionally inlining local files.
///
/// Embedding failures fall back to the raw content string; a broken path
/// degrades to a broken link, never a render error.
fn image_href(element: &DesignElement, config: &SvgConfig) -> String {
    let Some(content) = element.content.as_deref() else {
        return String::new();
    };
    if !config.embed_images || content.starts_with("http") || content.starts_with("data:") {
        return content.to_string();
    }

    let path = Path::new(content);
    match std::fs::read(path) {
        Ok(bytes) => {
            let mime = match path.extension().and_then(|e| e.to_str()) {
                Some("png") => "image/png",
                Some("jpg") | Some("jpeg") => "image/jpeg",
                Some("gif") => "image/gif",
                Some("svg") => "image/svg+xml",
                _ => "application/octet-stream",
            };
            format!("data:{};base64,{}", mime, BASE64.encode(bytes))
        }
        Err(_) => content.to_string(),
    }
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
