use std::f64::consts::PI;

use crate::config::LayoutConfig;
use crate::topology::ids::IdScheme;
use crate::topology::types::{Node, Topology};

/// Place `count` nodes evenly on a circle centred in the canvas.
///
/// Node `i` sits at angle `2πi/count` and is labelled `scheme.label(i)`.
/// The result has no edges.
pub fn circular_layout(count: usize, scheme: IdScheme, layout: &LayoutConfig) -> Topology {
    let center_x = layout.width / 2.0;
    let center_y = layout.height / 2.0;
    let radius = center_x.min(center_y) * layout.radius_factor;

    let nodes = (0..count)
        .map(|i| {
            let angle = 2.0 * PI * i as f64 / count as f64;
            Node::at(
                scheme.label(i as u64),
                center_x + radius * angle.cos(),
                center_y + radius * angle.sin(),
            )
        })
        .collect();

    Topology::new(nodes, Vec::new())
}
