//! SVG visualization of a flow layout.
//!
//! Draws the content area, the header, alternating row bands, and every
//! placed component with its input index, scaled into a fixed-width panel.
//!
//! # Example
//!
//! ```
//! use zenflow::{ComponentBox, ContentBounds, FlowEngine, StandardPolicy, svg::render_flow_svg};
//!
//! let layout = FlowEngine::new(StandardPolicy::new().vertical_margin(8.0))
//!     .layout(
//!         ContentBounds::unbounded(320.0),
//!         None,
//!         &[ComponentBox::plain(320.0, 60.0), ComponentBox::plain(200.0, 40.0)],
//!     )
//!     .unwrap();
//!
//! let svg = render_flow_svg(&layout);
//! // svg is a complete SVG document string
//! ```

#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::string::String;

use crate::geometry::Placement;
use crate::resolver::FlowLayout;

/// Maximum width of the drawn content area.
const MAX_PANEL_W: f32 = 360.0;
/// Margin around the panel.
const MARGIN: f32 = 30.0;
/// Height of the label text area above the panel.
const LABEL_H: f32 = 22.0;

/// Render a complete SVG document showing `layout`.
pub fn render_flow_svg(layout: &FlowLayout) -> String {
    let content_w = layout.bounds.width.max(layout.content_width).max(1.0);
    let content_h = layout
        .bounds
        .height
        .unwrap_or(0.0)
        .max(layout.content_height)
        .max(1.0);
    let scale = MAX_PANEL_W / content_w;
    let panel_w = content_w * scale;
    let panel_h = content_h * scale;
    let total_w = panel_w + 2.0 * MARGIN;
    let total_h = panel_h + 2.0 * MARGIN + LABEL_H;
    let origin_x = MARGIN;
    let origin_y = MARGIN + LABEL_H;

    let mut svg = String::with_capacity(2048 + layout.placements.len() * 160);

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        total_w as u32, total_h as u32, total_w, total_h
    ));
    svg.push('\n');

    svg.push_str(
        r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .label { font-size: 13px; font-weight: bold; fill: #333; }
  .index { font-size: 11px; fill: #fff; }
  .area { fill: #e8e8e8; stroke: #999; stroke-width: 1; }
  .bounds { fill: none; stroke: #c0392b; stroke-width: 1; stroke-dasharray: 4,2; }
  .band { fill: #d6e4f0; }
  .header { fill: #9b8ec4; stroke: #6a5a9e; stroke-width: 1.5; }
  .component { fill: #6ba3d6; stroke: #2c6faa; stroke-width: 1.5; }
  @media (prefers-color-scheme: dark) {
    .label { fill: #e0e0e0; }
    .area { fill: #2d2d2d; stroke: #555; }
    .band { fill: #26384a; }
    .header { fill: #5a4d85; stroke: #8b7cc0; }
    .component { fill: #3a72a4; stroke: #5a9fd4; }
  }
</style>
"##,
    );

    let label = match layout.bounds.height {
        Some(h) => format!(
            "{} components, {} rows  {}×{} in {}×{}",
            layout.placements.len(),
            layout.rows.len(),
            layout.content_width,
            layout.content_height,
            layout.bounds.width,
            h
        ),
        None => format!(
            "{} components, {} rows  {}×{} in {}×∞",
            layout.placements.len(),
            layout.rows.len(),
            layout.content_width,
            layout.content_height,
            layout.bounds.width
        ),
    };
    svg.push_str(&format!(
        r#"<text x="{}" y="{}" class="label" text-anchor="middle">{}</text>"#,
        total_w / 2.0,
        MARGIN + 14.0,
        escape_xml(&label)
    ));
    svg.push('\n');

    rect(&mut svg, "area", origin_x, origin_y, panel_w, panel_h);

    // Row bands: full content width, row's top to its tallest member.
    for (i, range) in layout.rows.iter().enumerate() {
        if i % 2 == 1 {
            continue;
        }
        let members = &layout.placements[range.clone()];
        let top = members.iter().map(|p| p.y).fold(f32::INFINITY, f32::min);
        let bottom = members.iter().map(Placement::max_y).fold(0.0, f32::max);
        rect(
            &mut svg,
            "band",
            origin_x,
            origin_y + top * scale,
            panel_w,
            (bottom - top) * scale,
        );
    }

    if let Some(header) = &layout.header {
        placed(&mut svg, "header", header, origin_x, origin_y, scale);
    }
    for (i, placement) in layout.placements.iter().enumerate() {
        placed(&mut svg, "component", placement, origin_x, origin_y, scale);
        svg.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" class="index" text-anchor="middle">{}</text>"#,
            origin_x + (placement.x + placement.width / 2.0) * scale,
            origin_y + (placement.y + placement.height / 2.0) * scale + 4.0,
            i
        ));
        svg.push('\n');
    }

    if let Some(h) = layout.bounds.height {
        rect(
            &mut svg,
            "bounds",
            origin_x,
            origin_y,
            layout.bounds.width * scale,
            h * scale,
        );
    }

    svg.push_str("</svg>\n");
    svg
}

fn placed(svg: &mut String, class: &str, p: &Placement, ox: f32, oy: f32, scale: f32) {
    rect(
        svg,
        class,
        ox + p.x * scale,
        oy + p.y * scale,
        p.width * scale,
        p.height * scale,
    );
}

fn rect(svg: &mut String, class: &str, x: f32, y: f32, w: f32, h: f32) {
    svg.push_str(&format!(
        r#"<rect x="{x:.1}" y="{y:.1}" width="{w:.1}" height="{h:.1}" class="{class}" rx="1"/>"#
    ));
    svg.push('\n');
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::FlowEngine;
    use crate::geometry::{ComponentBox, ContentBounds};
    use crate::policy::{EdgeInsets, StandardPolicy};

    fn sample(bounds: ContentBounds) -> FlowLayout {
        FlowEngine::new(
            StandardPolicy::new()
                .edge_insets(EdgeInsets::uniform(10.0))
                .vertical_margin(5.0),
        )
        .layout(
            bounds,
            Some(&ComponentBox::plain(300.0, 50.0)),
            &[
                ComponentBox::plain(280.0, 40.0),
                ComponentBox::plain(120.0, 40.0),
                ComponentBox::plain(200.0, 30.0),
            ],
        )
        .unwrap()
    }

    #[test]
    fn svg_is_complete_document() {
        let svg = render_flow_svg(&sample(ContentBounds::unbounded(300.0)));
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>\n"));
        assert!(svg.contains("3 components, 3 rows"));
        assert!(svg.contains("300×∞"));
    }

    #[test]
    fn svg_draws_every_component_and_header() {
        let svg = render_flow_svg(&sample(ContentBounds::unbounded(300.0)));
        assert_eq!(svg.matches(r#"class="component""#).count(), 3);
        assert_eq!(svg.matches(r#"class="header""#).count(), 1);
        // Rows 0 and 2 get a band.
        assert_eq!(svg.matches(r#"class="band""#).count(), 2);
    }

    #[test]
    fn svg_outlines_fixed_bounds() {
        let svg = render_flow_svg(&sample(ContentBounds::fixed(300.0, 150.0)));
        assert!(svg.contains(r#"class="bounds""#));
        assert!(svg.contains("in 300×150"));
    }

    #[test]
    fn svg_empty_layout() {
        let layout = FlowEngine::new(StandardPolicy::new())
            .layout(ContentBounds::unbounded(100.0), None, &[])
            .unwrap();
        let svg = render_flow_svg(&layout);
        assert!(svg.contains("0 components, 0 rows"));
        assert!(!svg.contains(r#"class="component""#));
    }
}
