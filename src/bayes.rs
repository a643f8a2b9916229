use crate::corpus::{self, TestExample, TrainingExample};
use crate::error::{Error, Result};
use crate::label::Label;
use crate::model::Model;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::{
    collections::{BTreeMap, BTreeSet},
    fs,
    path::Path,
};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Add-one smoothing applied to every (label, vocabulary token) count.
pub const SMOOTHING: u64 = 1;

pub struct Trainer;

impl Trainer {
    /// Parses a training file and fits a model on it.
    pub fn train_file<P: AsRef<Path>>(path: P) -> Result<Model> {
        let examples = corpus::read_training_file(path)?;
        Self::fit(&examples)
    }

    pub fn fit(examples: &[TrainingExample]) -> Result<Model> {
        if examples.is_empty() {
            return Err(Error::EmptyTrainingSet);
        }

        let vocabulary: BTreeSet<String> = examples
            .iter()
            .flat_map(|example| example.tokens.iter().cloned())
            .collect();

        // Every label starts with zero examples and the smoothing count for
        // every vocabulary token:
        let mut label_counts: BTreeMap<Label, u64> = Label::ALL.iter().map(|&l| (l, 0)).collect();
        let mut word_counts: BTreeMap<Label, BTreeMap<&str, u64>> = Label::ALL
            .iter()
            .map(|&label| {
                let counts = vocabulary.iter().map(|w| (w.as_str(), SMOOTHING)).collect();
                (label, counts)
            })
            .collect();

        for example in examples {
            *label_counts.entry(example.label).or_insert(0) += 1;

            let counts = word_counts.entry(example.label).or_default();
            for token in &example.tokens {
                *counts.entry(token.as_str()).or_insert(SMOOTHING) += 1;
            }
        }

        // Calculate all of the priors:
        let num_examples = examples.len() as f64;
        let priors: BTreeMap<Label, f64> = label_counts
            .iter()
            .map(|(&label, &count)| (label, count as f64 / num_examples))
            .collect();

        // The denominator is the smoothed mass over the whole vocabulary, not
        // only the tokens observed under the label:
        let likelihoods: BTreeMap<Label, BTreeMap<String, f64>> = word_counts
            .iter()
            .map(|(&label, counts)| {
                let total = counts.values().sum::<u64>() as f64;
                let table = counts
                    .iter()
                    .map(|(&word, &count)| (word.to_string(), count as f64 / total))
                    .collect();
                (label, table)
            })
            .collect();

        info!(
            examples = examples.len(),
            vocabulary = vocabulary.len(),
            "fitted naive bayes model"
        );
        for (label, count) in &label_counts {
            debug!(%label, count, "training examples per label");
        }

        Ok(Model {
            vocabulary,
            priors,
            likelihoods,
        })
    }
}

/// A single predicted line of output.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub id: String,
    pub label: Label,
}

pub struct Classifier<'m> {
    model: &'m Model,
}

impl<'m> Classifier<'m> {
    pub fn new(model: &'m Model) -> Self {
        Self { model }
    }

    /// Unnormalized posterior of every label, in `Label::ALL` order.
    /// Out-of-vocabulary tokens are skipped.
    pub fn scores(&self, tokens: &[String]) -> [(Label, f64); 4] {
        Label::ALL.map(|label| {
            let score = tokens
                .iter()
                .filter(|token| self.model.contains(token))
                .fold(self.model.prior(label), |acc, token| {
                    match self.model.likelihood(label, token) {
                        Some(p) => acc * p,
                        None => acc,
                    }
                });
            (label, score)
        })
    }

    /// The highest scoring label; exact ties go to the label listed first.
    pub fn predict(&self, tokens: &[String]) -> Label {
        let scores = self.scores(tokens);
        let (best_label, _) = scores[1..].iter().fold(
            scores[0],
            |(best_label, best_score), &(label, score)| {
                if score > best_score {
                    (label, score)
                } else {
                    (best_label, best_score)
                }
            },
        );

        best_label
    }

    pub fn classify(&self, examples: &[TestExample]) -> Vec<Prediction> {
        examples
            .iter()
            .map(|example| {
                if !example.tokens.iter().any(|t| self.model.contains(t)) {
                    debug!(id = %example.id, "no known tokens, classifying by priors");
                }
                Prediction {
                    id: example.id.clone(),
                    label: self.predict(&example.tokens),
                }
            })
            .collect()
    }

    /// Fraction of labelled examples whose prediction matches their label.
    pub fn accuracy(&self, examples: &[TrainingExample]) -> f64 {
        if examples.is_empty() {
            return 0.0;
        }

        let correct = examples
            .iter()
            .filter(|example| self.predict(&example.tokens) == example.label)
            .count();

        correct as f64 / examples.len() as f64
    }

    // Predicts every line of a test file and writes the results to outpath:
    pub fn classify_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        inpath: P,
        outpath: Q,
    ) -> Result<Vec<Prediction>> {
        let examples = corpus::read_test_file(inpath)?;
        let predictions = self.classify(&examples);
        write_predictions(outpath, &predictions)?;

        info!(examples = predictions.len(), "classified test examples");
        Ok(predictions)
    }
}

/// Writes `identifier predicted_label` lines in order. The file only appears
/// once every line has been written.
pub fn write_predictions<P: AsRef<Path>>(path: P, predictions: &[Prediction]) -> Result<()> {
    let path = path.as_ref();
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let mut temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = WriterBuilder::new()
            .delimiter(b' ')
            .quote_style(QuoteStyle::Never)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(temp_file.as_file_mut());

        for prediction in predictions {
            writer.write_record([prediction.id.as_str(), prediction.label.as_str()])?;
        }
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|e| Error::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;
    Ok(())
}
