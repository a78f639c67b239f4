use crate::core::models::EmbeddingNode;
use nalgebra::Point2;
use thiserror::Error;

/// Tuning knobs for the viewport fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitParams {
    /// Margin (in layout units) added to each bounding-box span so points
    /// never touch the viewport edge.
    pub padding: f64,
    /// Fraction of the viewport the layout may occupy along its binding
    /// axis.
    pub target_fraction: f64,
    /// Vertical shift of the layout center, in viewport units.
    pub y_offset: f64,
}

impl Default for FitParams {
    fn default() -> Self {
        Self {
            padding: 50.0,
            target_fraction: 0.85,
            y_offset: 30.0,
        }
    }
}

/// A uniform scale and translation fitting a point set into a viewport,
/// applied as `rendered = position * scale + translate`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportFit {
    pub scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl ViewportFit {
    pub fn apply(&self, position: &Point2<f64>) -> Point2<f64> {
        Point2::new(
            position.x * self.scale + self.translate_x,
            position.y * self.scale + self.translate_y,
        )
    }
}

#[derive(Debug, Error)]
pub enum ProjectionError {
    #[error("Cannot fit an empty point set")]
    EmptyPointSet,
    #[error("Viewport dimensions must be finite and positive, got {width}x{height}")]
    InvalidViewport { width: f64, height: f64 },
    #[error("Node {index} has a non-finite coordinate ({x}, {y})")]
    NonFiniteCoordinate { index: usize, x: f64, y: f64 },
    #[error("Fit parameter '{name}' must be finite and positive, got {value}")]
    InvalidParam { name: &'static str, value: f64 },
}

/// Computes the uniform scale and translation that centers `nodes` inside a
/// viewport while preserving aspect ratio.
///
/// The scale is `target_fraction / max(span_x / width, span_y / height)`
/// where each span is the bounding-box extent plus `padding`, so the larger
/// relative dimension is the binding constraint. Coincident points
/// degenerate to a span of `padding` alone and still yield a finite,
/// positive scale.
///
/// The computation is pure: identical inputs produce bit-identical outputs.
pub fn compute_fit(
    nodes: &[EmbeddingNode],
    viewport_width: f64,
    viewport_height: f64,
    params: &FitParams,
) -> Result<ViewportFit, ProjectionError> {
    if nodes.is_empty() {
        return Err(ProjectionError::EmptyPointSet);
    }
    if !(viewport_width.is_finite() && viewport_width > 0.0)
        || !(viewport_height.is_finite() && viewport_height > 0.0)
    {
        return Err(ProjectionError::InvalidViewport {
            width: viewport_width,
            height: viewport_height,
        });
    }
    check_param("padding", params.padding)?;
    check_param("target_fraction", params.target_fraction)?;
    if !params.y_offset.is_finite() {
        return Err(ProjectionError::InvalidParam {
            name: "y_offset",
            value: params.y_offset,
        });
    }

    let (mut min_x, mut max_x) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut min_y, mut max_y) = (f64::INFINITY, f64::NEG_INFINITY);
    for (index, node) in nodes.iter().enumerate() {
        let (x, y) = (node.position.x, node.position.y);
        if !(x.is_finite() && y.is_finite()) {
            return Err(ProjectionError::NonFiniteCoordinate { index, x, y });
        }
        min_x = min_x.min(x);
        max_x = max_x.max(x);
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }

    let span_x = max_x - min_x + params.padding;
    let span_y = max_y - min_y + params.padding;

    let scale = params.target_fraction / (span_x / viewport_width).max(span_y / viewport_height);

    Ok(ViewportFit {
        scale,
        translate_x: viewport_width / 2.0 - (max_x + min_x) / 2.0 * scale,
        translate_y: viewport_height / 2.0 + params.y_offset - (max_y + min_y) / 2.0 * scale,
    })
}

fn check_param(name: &'static str, value: f64) -> Result<(), ProjectionError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ProjectionError::InvalidParam { name, value });
    }
    Ok(())
}
