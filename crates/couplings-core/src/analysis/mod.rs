pub mod classification;
pub mod projection;

pub use classification::{
    ClassificationError, ClassificationParams, ClassificationResult, PredictionLimit,
    observed_contacts, predicted_contacts,
};
pub use projection::{FitParams, ProjectionError, ViewportFit, compute_fit};
