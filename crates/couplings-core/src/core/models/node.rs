use nalgebra::Point2;

/// A 2D layout point produced by an external force layout or embedding.
///
/// The projection utility consumes nodes read-only; any category-to-color
/// mapping is owned by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddingNode {
    pub position: Point2<f64>,
    pub category: Option<String>,
}

impl EmbeddingNode {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            position: Point2::new(x, y),
            category: None,
        }
    }

    pub fn with_category(x: f64, y: f64, category: impl Into<String>) -> Self {
        Self {
            position: Point2::new(x, y),
            category: Some(category.into()),
        }
    }
}
