//! SVG rendering
//!
//! Nodes sit on the grid of the perfect tree with the same height, so every
//! leaf slot of the last level is evenly spaced and each parent is centered
//! above its two child slots.

use std::collections::VecDeque;

use super::SvgOptions;
use crate::node::{NodeRef, NodeValue};

const SVG_HEADER: &str = r##"<style>
    .value {
        font: 300 16px sans-serif;
        text-align: center;
        dominant-baseline: middle;
        text-anchor: middle;
    }
    .node {
        fill: lightgray;
        stroke-width: 1;
    }
</style>
<g stroke="#000000">"##;

/// Placed node: column within its level and depth
struct Slot<R> {
    node: R,
    x: f64,
    y: usize,
}

/// SVG document with one circle and label per node and one line per edge
///
/// The document starts and ends with a newline. Edge lines come first, in
/// reverse breadth-first order, then the nodes in breadth-first order.
pub fn svg<'a, R: NodeRef<'a>>(root: R, options: &SvgOptions) -> String {
    let radius = f64::from(options.node_radius);
    let scale = radius * 3.0;

    let mut slots = Vec::new();
    let mut queue = VecDeque::from([Slot { node: root, x: 0.0, y: 0 }]);
    let mut height = 0;
    while let Some(slot) = queue.pop_front() {
        height = height.max(slot.y);
        if let Some(left) = slot.node.left() {
            queue.push_back(Slot { node: left, x: slot.x * 2.0, y: slot.y + 1 });
        }
        if let Some(right) = slot.node.right() {
            queue.push_back(Slot { node: right, x: slot.x * 2.0 + 1.0, y: slot.y + 1 });
        }
        slots.push(slot);
    }

    let scale_x = |x: f64, y: usize| {
        let diff = (height - y) as i32;
        let column = 2f64.powi(diff + 1) * x + 2f64.powi(diff) - 1.0;
        1.0 + radius + scale * column / 2.0
    };
    let scale_y = |y: usize| scale * (1 + y) as f64;

    let mut xml: VecDeque<String> = VecDeque::with_capacity(slots.len() * 3);
    for slot in &slots {
        let (cx, cy) = (scale_x(slot.x, slot.y), scale_y(slot.y));
        if slot.y > 0 {
            let parent_x = (slot.x / 2.0).floor();
            xml.push_front(format!(
                r#"<line x1="{:?}" y1="{}" x2="{:?}" y2="{}"/>"#,
                scale_x(parent_x, slot.y - 1),
                scale_y(slot.y - 1),
                cx,
                cy,
            ));
        }
        xml.push_back(format!(
            r#"<circle class="node" cx="{:?}" cy="{}" r="{}"/>"#,
            cx, cy, options.node_radius
        ));
        xml.push_back(format!(
            r#"<text class="value" x="{:?}" y="{}">{}</text>"#,
            cx,
            cy,
            escape_xml(&slot.node.value().label())
        ));
    }

    let mut out = String::from("\n");
    out.push_str(&format!(
        r#"<svg width="{}" height="{}" xmlns="http://www.w3.org/2000/svg">"#,
        scale * 2f64.powi(height as i32),
        scale * (2 + height) as f64,
    ));
    out.push('\n');
    out.push_str(SVG_HEADER);
    out.push('\n');
    for line in &xml {
        out.push_str(line);
        out.push('\n');
    }
    out.push_str("</g>\n</svg>\n");
    out
}

/// Replace characters that are markup inside XML text and attributes
fn escape_xml(label: &str) -> String {
    let mut escaped = String::with_capacity(label.len());
    for ch in label.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
