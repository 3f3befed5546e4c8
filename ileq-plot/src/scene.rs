//! Styled drawing layers built from [`Geometry`].
//!
//! Layers are plain data so their content can be checked without a window.

use eframe::egui::Color32;
use ileq_core::Geometry;

pub const CONE_NAME: &str = "[A]x region";
pub const BAND_NAME: &str = "Target band [b]";
pub const SOLUTION_NAME: &str = "Solution x";

const CONE_FILL: Color32 = Color32::from_rgba_premultiplied(53, 82, 94, 102);
const CONE_EDGE: Color32 = Color32::from_rgb(0, 0, 255);
const BAND_FILL: Color32 = Color32::from_rgba_premultiplied(102, 66, 0, 102);
const BAND_EDGE: Color32 = Color32::from_rgb(255, 0, 0);
const SOLUTION: Color32 = Color32::from_rgb(0, 128, 0);

/// How a line is stroked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stroke {
    Solid,
    Dashed,
    Dotted,
}

/// A single drawable item.
#[derive(Debug, Clone, PartialEq)]
pub enum Layer {
    /// A filled polygon.
    Fill {
        name: &'static str,
        points: Vec<[f64; 2]>,
        color: Color32,
    },
    /// A polyline.
    Line {
        name: Option<&'static str>,
        points: Vec<[f64; 2]>,
        color: Color32,
        width: f32,
        stroke: Stroke,
    },
    /// A text annotation centered on a point.
    Text {
        position: [f64; 2],
        text: String,
        color: Color32,
    },
}

/// Builds the drawing layers for a geometry, back to front.
#[must_use]
pub fn layers(geometry: &Geometry) -> Vec<Layer> {
    let x_max = geometry.x_max;
    let cone = &geometry.cone;
    let band = &geometry.band;

    let mut layers = vec![
        Layer::Fill {
            name: CONE_NAME,
            points: cone.polygon().to_vec(),
            color: CONE_FILL,
        },
        edge(cone.lower.points().to_vec(), CONE_EDGE, Stroke::Dashed),
        edge(cone.upper.points().to_vec(), CONE_EDGE, Stroke::Dashed),
        Layer::Fill {
            name: BAND_NAME,
            points: vec![
                [0.0, band.lower],
                [x_max, band.lower],
                [x_max, band.upper],
                [0.0, band.upper],
            ],
            color: BAND_FILL,
        },
        edge(vec![[0.0, band.lower], [x_max, band.lower]], BAND_EDGE, Stroke::Solid),
        edge(vec![[0.0, band.upper], [x_max, band.upper]], BAND_EDGE, Stroke::Solid),
    ];

    if let Some(marks) = &geometry.solution {
        layers.push(Layer::Line {
            name: Some(SOLUTION_NAME),
            points: marks.segment.points().to_vec(),
            color: SOLUTION,
            width: 8.0,
            stroke: Stroke::Solid,
        });
        for guide in &marks.guides {
            layers.push(edge(guide.points().to_vec(), SOLUTION, Stroke::Dotted));
        }
        for label in &marks.labels {
            layers.push(Layer::Text {
                position: label.position,
                text: label.text.clone(),
                color: SOLUTION,
            });
        }
    }

    layers
}

fn edge(points: Vec<[f64; 2]>, color: Color32, stroke: Stroke) -> Layer {
    Layer::Line {
        name: None,
        points,
        color,
        width: 1.0,
        stroke,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ileq_core::Interval;

    fn interval(lower: f64, upper: f64) -> Interval {
        Interval::new(lower, upper).expect("valid interval")
    }

    fn names(layers: &[Layer]) -> Vec<&'static str> {
        layers
            .iter()
            .filter_map(|layer| match layer {
                Layer::Fill { name, .. } => Some(*name),
                Layer::Line { name, .. } => *name,
                Layer::Text { .. } => None,
            })
            .collect()
    }

    #[test]
    fn without_solution_draws_cone_and_band_only() {
        let geometry = Geometry::derive(interval(1.0, 2.0), interval(4.0, 6.0), None);
        let layers = layers(&geometry);

        assert_eq!(layers.len(), 6);
        assert_eq!(names(&layers), [CONE_NAME, BAND_NAME]);
    }

    #[test]
    fn with_solution_adds_segment_guides_and_labels() {
        let sol = interval(2.0, 6.0);
        let geometry = Geometry::derive(interval(1.0, 2.0), interval(4.0, 6.0), Some(&sol));
        let layers = layers(&geometry);

        assert_eq!(layers.len(), 11);
        assert_eq!(names(&layers), [CONE_NAME, BAND_NAME, SOLUTION_NAME]);

        let dotted = layers
            .iter()
            .filter(|layer| matches!(layer, Layer::Line { stroke: Stroke::Dotted, .. }))
            .count();
        assert_eq!(dotted, 2);

        let texts: Vec<&str> = layers
            .iter()
            .filter_map(|layer| match layer {
                Layer::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, ["2.00", "6.00"]);
    }

    #[test]
    fn band_spans_the_plot_width() {
        let geometry = Geometry::derive(interval(1.0, 2.0), interval(4.0, 6.0), None);
        let layers = layers(&geometry);

        let Layer::Fill { points, .. } = &layers[3] else {
            panic!("expected the band fill");
        };
        assert_eq!(points[0], [0.0, 4.0]);
        assert_eq!(points[2], [9.0, 6.0]);
    }
}
