//! The trained parameters and their JSON document form.

use crate::error::{Error, Result};
use crate::label::Label;
use serde::{Deserialize, Serialize};
use std::{
    collections::{BTreeMap, BTreeSet},
    fs::{self, File},
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};
use tempfile::NamedTempFile;

const PRIOR_SUM_TOLERANCE: f64 = 1e-9;

/// Priors P(label) and smoothed likelihoods P(token | label) over a fixed
/// vocabulary. Ordered containers keep the serialized document byte-stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub vocabulary: BTreeSet<String>,
    pub priors: BTreeMap<Label, f64>,
    pub likelihoods: BTreeMap<Label, BTreeMap<String, f64>>,
}

impl Model {
    pub fn prior(&self, label: Label) -> f64 {
        self.priors.get(&label).copied().unwrap_or(0.0)
    }

    pub fn likelihood(&self, label: Label, token: &str) -> Option<f64> {
        self.likelihoods.get(&label)?.get(token).copied()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.vocabulary.contains(token)
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Checks the invariants the classifier relies on: a prior for every
    /// label summing to one, and a positive likelihood for every
    /// (label, vocabulary token) pair and nothing else.
    pub fn validate(&self) -> Result<()> {
        let mut prior_sum = 0.0;
        for label in Label::ALL {
            let prior = *self
                .priors
                .get(&label)
                .ok_or_else(|| Error::InvalidModel(format!("missing prior for {}", label)))?;
            if !(0.0..=1.0).contains(&prior) {
                return Err(Error::InvalidModel(format!(
                    "prior for {} is {}, outside [0, 1]",
                    label, prior
                )));
            }
            prior_sum += prior;
        }
        if (prior_sum - 1.0).abs() > PRIOR_SUM_TOLERANCE {
            return Err(Error::InvalidModel(format!(
                "priors sum to {}, expected 1",
                prior_sum
            )));
        }

        for label in Label::ALL {
            let table = self
                .likelihoods
                .get(&label)
                .ok_or_else(|| Error::InvalidModel(format!("missing likelihoods for {}", label)))?;

            if table.len() != self.vocabulary.len() {
                return Err(Error::InvalidModel(format!(
                    "{} has {} likelihoods for a vocabulary of {}",
                    label,
                    table.len(),
                    self.vocabulary.len()
                )));
            }

            for token in &self.vocabulary {
                match table.get(token) {
                    Some(&p) if p > 0.0 && p <= 1.0 => {}
                    Some(&p) => {
                        return Err(Error::InvalidModel(format!(
                            "likelihood of {:?} under {} is {}, outside (0, 1]",
                            token, label, p
                        )))
                    }
                    None => {
                        return Err(Error::InvalidModel(format!(
                            "{} has no likelihood for {:?}",
                            label, token
                        )))
                    }
                }
            }
        }

        Ok(())
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let model: Model = serde_json::from_reader(reader)?;
        model.validate()?;
        Ok(model)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn to_writer<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer(writer, self)?;
        Ok(())
    }

    /// Writes the model next to `path` and renames it into place, so a
    /// failed save never leaves a truncated document behind.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let parent_dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent_dir)?;

        let mut temp_file = NamedTempFile::new_in(parent_dir)?;
        {
            let mut writer = BufWriter::new(temp_file.as_file_mut());
            self.to_writer(&mut writer)?;
            writer.flush()?;
        }

        temp_file.persist(path).map_err(|e| Error::Persist {
            path: path.to_path_buf(),
            source: e.error,
        })?;
        Ok(())
    }
}
