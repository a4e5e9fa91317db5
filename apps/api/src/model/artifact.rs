//! Versioned model artifact schema.
//!
//! The artifact is a single JSON document carrying everything the service
//! needs at request time: the canonical skill list, the career class list,
//! the training-sample table used by the reverse skill index, and the
//! classifier weights. An explicit schema replaces opaque binary model dumps
//! so loading can never execute arbitrary code.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const SUPPORTED_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub schema_version: u32,
    /// Canonical skill ids in training column order.
    pub skills: Vec<String>,
    /// Career display names in classifier output order.
    pub careers: Vec<String>,
    pub samples: Vec<TrainingSample>,
    pub classifier: ClassifierWeights,
}

/// One training row: a class label plus a per-skill occurrence count
/// (binary flags in practice, but counts are accepted).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingSample {
    pub career: usize,
    pub skills: Vec<u32>,
}

/// Linear model parameters: one weight row and one intercept per class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierWeights {
    pub weights: Vec<Vec<f64>>,
    pub intercepts: Vec<f64>,
}

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to read model artifact at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse model artifact: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unsupported artifact schema version {found} (supported: {SUPPORTED_SCHEMA_VERSION})")]
    UnsupportedVersion { found: u32 },

    #[error("invalid model artifact: {0}")]
    Invalid(String),
}

impl ModelArtifact {
    /// Parses and validates an artifact from its JSON text.
    pub fn from_json(raw: &str) -> Result<Self, ArtifactError> {
        let artifact: ModelArtifact = serde_json::from_str(raw)?;
        artifact.validate()?;
        Ok(artifact)
    }

    /// Cross-checks every dimension in the bundle. The classifier, samples
    /// and vocabulary all have to agree before the context is built from
    /// them; a mismatch here means the artifact was produced incorrectly.
    fn validate(&self) -> Result<(), ArtifactError> {
        if self.schema_version != SUPPORTED_SCHEMA_VERSION {
            return Err(ArtifactError::UnsupportedVersion {
                found: self.schema_version,
            });
        }

        let num_skills = self.skills.len();
        let num_careers = self.careers.len();

        if num_skills == 0 {
            return Err(ArtifactError::Invalid("skill list is empty".to_string()));
        }
        if num_careers == 0 {
            return Err(ArtifactError::Invalid("career list is empty".to_string()));
        }

        if self.classifier.weights.len() != num_careers {
            return Err(ArtifactError::Invalid(format!(
                "classifier has {} weight rows for {} careers",
                self.classifier.weights.len(),
                num_careers
            )));
        }
        for (class_idx, row) in self.classifier.weights.iter().enumerate() {
            if row.len() != num_skills {
                return Err(ArtifactError::Invalid(format!(
                    "weight row for class {class_idx} has {} columns, expected {num_skills}",
                    row.len()
                )));
            }
        }
        if self.classifier.intercepts.len() != num_careers {
            return Err(ArtifactError::Invalid(format!(
                "classifier has {} intercepts for {} careers",
                self.classifier.intercepts.len(),
                num_careers
            )));
        }

        for (row_idx, sample) in self.samples.iter().enumerate() {
            if sample.career >= num_careers {
                return Err(ArtifactError::Invalid(format!(
                    "sample {row_idx} is labeled with class {} but there are only {num_careers} careers",
                    sample.career
                )));
            }
            if sample.skills.len() != num_skills {
                return Err(ArtifactError::Invalid(format!(
                    "sample {row_idx} has {} skill columns, expected {num_skills}",
                    sample.skills.len()
                )));
            }
        }

        Ok(())
    }
}

/// Read-only table of training rows, used only by the reverse skill index.
#[derive(Debug, Clone)]
pub struct TrainingSampleTable {
    rows: Vec<TrainingSample>,
}

impl TrainingSampleTable {
    pub fn new(rows: Vec<TrainingSample>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[TrainingSample] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_artifact_json() -> String {
        serde_json::json!({
            "schema_version": 1,
            "skills": ["skill_python", "skill_sql"],
            "careers": ["Data Engineer", "Analyst"],
            "samples": [
                {"career": 0, "skills": [1, 1]},
                {"career": 1, "skills": [0, 1]}
            ],
            "classifier": {
                "weights": [[2.0, 1.0], [0.5, 1.5]],
                "intercepts": [0.1, -0.1]
            }
        })
        .to_string()
    }

    #[test]
    fn test_valid_artifact_parses() {
        let artifact = ModelArtifact::from_json(&valid_artifact_json()).unwrap();
        assert_eq!(artifact.skills.len(), 2);
        assert_eq!(artifact.careers.len(), 2);
        assert_eq!(artifact.samples.len(), 2);
    }

    #[test]
    fn test_unsupported_version_rejected() {
        let raw = valid_artifact_json().replace("\"schema_version\":1", "\"schema_version\":99");
        let err = ModelArtifact::from_json(&raw).unwrap_err();
        assert!(matches!(
            err,
            ArtifactError::UnsupportedVersion { found: 99 }
        ));
    }

    #[test]
    fn test_weight_row_length_mismatch_rejected() {
        let raw = valid_artifact_json().replace("[2.0,1.0]", "[2.0,1.0,3.0]");
        let err = ModelArtifact::from_json(&raw).unwrap_err();
        assert!(matches!(err, ArtifactError::Invalid(_)), "got {err:?}");
    }

    #[test]
    fn test_sample_label_out_of_range_rejected() {
        let raw = valid_artifact_json().replace("{\"career\":1,", "{\"career\":7,");
        let err = ModelArtifact::from_json(&raw).unwrap_err();
        assert!(matches!(err, ArtifactError::Invalid(_)), "got {err:?}");
    }

    #[test]
    fn test_sample_column_count_mismatch_rejected() {
        let raw = valid_artifact_json().replace("\"skills\":[0,1]", "\"skills\":[0]");
        let err = ModelArtifact::from_json(&raw).unwrap_err();
        assert!(matches!(err, ArtifactError::Invalid(_)), "got {err:?}");
    }

    #[test]
    fn test_empty_skill_list_rejected() {
        let raw = serde_json::json!({
            "schema_version": 1,
            "skills": [],
            "careers": ["Analyst"],
            "samples": [],
            "classifier": {"weights": [[]], "intercepts": [0.0]}
        })
        .to_string();
        let err = ModelArtifact::from_json(&raw).unwrap_err();
        assert!(matches!(err, ArtifactError::Invalid(_)), "got {err:?}");
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = ModelArtifact::from_json("{not json").unwrap_err();
        assert!(matches!(err, ArtifactError::Parse(_)));
    }
}
