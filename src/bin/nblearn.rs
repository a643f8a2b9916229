use anyhow::{Context, Result};
use clap::Parser;
use nb_classifier::{Trainer, DEFAULT_MODEL_PATH};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "nblearn")]
#[command(about = "Fit a naive bayes model on labelled review lines")]
struct Args {
    /// Training file: `<id> <label word> <label word> <text>...` per line
    input: PathBuf,

    /// Where to write the model
    #[arg(short, long, default_value = DEFAULT_MODEL_PATH)]
    model: PathBuf,
}

fn main() -> Result<()> {
    nb_classifier::init_logging();
    let args = Args::parse();

    let model = Trainer::train_file(&args.input)
        .with_context(|| format!("failed to train on {}", args.input.display()))?;

    model
        .save(&args.model)
        .with_context(|| format!("failed to write model to {}", args.model.display()))?;

    info!(
        vocabulary = model.vocabulary_len(),
        "model written to {}",
        args.model.display()
    );

    Ok(())
}
