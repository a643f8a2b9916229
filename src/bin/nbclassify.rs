use anyhow::{Context, Result};
use clap::Parser;
use nb_classifier::{corpus, Classifier, Model, DEFAULT_MODEL_PATH, DEFAULT_OUTPUT_PATH};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "nbclassify")]
#[command(about = "Label review lines with a trained naive bayes model")]
struct Args {
    /// Test file: `<id> <text>...` per line
    input: PathBuf,

    /// Model written by nblearn
    #[arg(short, long, default_value = DEFAULT_MODEL_PATH)]
    model: PathBuf,

    /// Where to write `<id> <label>` lines
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Labelled file to report accuracy against
    #[arg(long)]
    gold: Option<PathBuf>,
}

fn main() -> Result<()> {
    nb_classifier::init_logging();
    let args = Args::parse();

    let model = Model::load(&args.model)
        .with_context(|| format!("failed to load model from {}", args.model.display()))?;
    let classifier = Classifier::new(&model);

    let predictions = classifier
        .classify_file(&args.input, &args.output)
        .with_context(|| format!("failed to classify {}", args.input.display()))?;
    info!(
        examples = predictions.len(),
        "predictions written to {}",
        args.output.display()
    );

    if let Some(gold) = &args.gold {
        let labelled = corpus::read_training_file(gold)
            .with_context(|| format!("failed to read labelled file {}", gold.display()))?;
        info!(
            "accuracy on {}: {:.4}",
            gold.display(),
            classifier.accuracy(&labelled)
        );
    }

    Ok(())
}
