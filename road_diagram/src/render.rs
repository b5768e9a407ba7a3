//! Turns a finished drawing into markup. Coordinates are written as the layout produced them; a
//! single translation on the drawing group moves everything into the visible canvas.

use anyhow::Result;
use serde::Serialize;

use geom::Bounds;

use crate::{DrawCommand, Drawing, LineStyle};

const STROKE: &str = "black";
const DASH_ARRAY: &str = "10,10";

/// A standalone SVG document sized to exactly fit `bounds`.
pub fn to_svg(drawing: &Drawing, bounds: &Bounds) -> String {
    let (dx, dy) = bounds.translation_to_origin();
    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\">\n",
        fmt_num(bounds.width()),
        fmt_num(bounds.height())
    );
    svg.push_str(&format!(
        "  <g style=\"transform: translate({}px, {}px)\" stroke=\"{}\" fill=\"none\">\n",
        fmt_num(dx),
        fmt_num(dy),
        STROKE
    ));
    for cmd in &drawing.commands {
        match cmd {
            DrawCommand::Circle(circle) => {
                svg.push_str(&format!(
                    "    <circle cx=\"{}\" cy=\"{}\" r=\"{}\" />\n",
                    fmt_num(circle.center.x()),
                    fmt_num(circle.center.y()),
                    fmt_num(circle.radius.inner_meters())
                ));
            }
            DrawCommand::Line { line, style } => {
                svg.push_str(&format!(
                    "    <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"",
                    fmt_num(line.pt1().x()),
                    fmt_num(line.pt1().y()),
                    fmt_num(line.pt2().x()),
                    fmt_num(line.pt2().y())
                ));
                if *style == LineStyle::Dashed {
                    svg.push_str(&format!(" stroke-dasharray=\"{}\"", DASH_ARRAY));
                }
                svg.push_str(" />\n");
            }
        }
    }
    svg.push_str("  </g>\n");
    svg.push_str("</svg>\n");
    svg
}

/// A minimal HTML page embedding the SVG.
pub fn to_html_page(drawing: &Drawing, bounds: &Bounds, title: &str) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n");
    html.push_str("<html>\n");
    html.push_str("<head>\n");
    html.push_str("  <meta charset=\"utf-8\">\n");
    html.push_str(&format!("  <title>{}</title>\n", escape(title)));
    html.push_str("</head>\n");
    html.push_str("<body>\n");
    html.push_str(&to_svg(drawing, bounds));
    html.push_str("</body>\n");
    html.push_str("</html>\n");
    html
}

#[derive(Serialize)]
struct Dump<'a> {
    width: f64,
    height: f64,
    translation: (f64, f64),
    bounds: &'a Bounds,
    commands: &'a [DrawCommand],
}

/// Every draw command plus the canvas size, as JSON. Useful for debugging a layout without
/// opening a browser.
pub fn to_json(drawing: &Drawing, bounds: &Bounds) -> Result<String> {
    Ok(serde_json::to_string_pretty(&Dump {
        width: bounds.width(),
        height: bounds.height(),
        translation: bounds.translation_to_origin(),
        bounds,
        commands: &drawing.commands,
    })?)
}

/// At most 2 decimal places, without trailing zeroes.
fn fmt_num(x: f64) -> String {
    let mut s = format!("{:.2}", x);
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

fn escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
