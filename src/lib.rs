//! Naive Bayes review classifier.
//!
//! `nblearn` fits a [`Model`] on labelled lines and writes it as JSON;
//! `nbclassify` reads it back and labels unseen lines.

pub mod bayes;
pub mod corpus;
pub mod error;
pub mod label;
pub mod model;
pub mod tokenizer;

pub use bayes::{write_predictions, Classifier, Prediction, Trainer};
pub use corpus::{TestExample, TrainingExample};
pub use error::{Error, Result};
pub use label::Label;
pub use model::Model;

/// Where `nblearn` writes the model and `nbclassify` reads it.
pub const DEFAULT_MODEL_PATH: &str = "nbmodel.txt";

/// Where `nbclassify` writes its predictions.
pub const DEFAULT_OUTPUT_PATH: &str = "nboutput.txt";

/// Installs the stderr log subscriber used by both binaries. Verbosity comes
/// from `RUST_LOG` and defaults to `info`.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
