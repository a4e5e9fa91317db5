//! Classifier capability.
//!
//! The ranker only ever sees the `Classifier` trait: a fixed-length 0/1
//! feature vector in, a probability distribution over the career classes
//! out. The default backend is a linear model (softmax over W·x + b) whose
//! parameters come from the versioned artifact; swapping in a different
//! backend means implementing the trait, nothing else.

use thiserror::Error;

use crate::model::artifact::ClassifierWeights;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("expected a feature vector of length {expected}, got {actual}")]
    FeatureLength { expected: usize, actual: usize },

    #[error("classifier produced {actual} probabilities, expected {expected}")]
    OutputLength { expected: usize, actual: usize },

    #[error("classifier produced a non-finite probability at class {index}")]
    NonFinite { index: usize },

    #[error("classifier produced probability {value} outside [0, 1] at class {index}")]
    OutOfRange { index: usize, value: f64 },
}

/// A probability model over the fixed career class set. Implementations must
/// be deterministic: the same feature vector always yields the same output.
pub trait Classifier: Send + Sync {
    fn predict(&self, features: &[f64]) -> Result<Vec<f64>, ClassifierError>;

    fn num_classes(&self) -> usize;
}

/// Softmax-linear classifier over artifact-supplied weights.
#[derive(Debug, Clone)]
pub struct LinearClassifier {
    weights: Vec<Vec<f64>>,
    intercepts: Vec<f64>,
    num_features: usize,
}

impl LinearClassifier {
    /// The weights are assumed dimension-checked by artifact validation.
    pub fn new(params: ClassifierWeights, num_features: usize) -> Self {
        Self {
            weights: params.weights,
            intercepts: params.intercepts,
            num_features,
        }
    }

    pub fn num_features(&self) -> usize {
        self.num_features
    }
}

impl Classifier for LinearClassifier {
    fn predict(&self, features: &[f64]) -> Result<Vec<f64>, ClassifierError> {
        if features.len() != self.num_features {
            return Err(ClassifierError::FeatureLength {
                expected: self.num_features,
                actual: features.len(),
            });
        }

        let logits: Vec<f64> = self
            .weights
            .iter()
            .zip(&self.intercepts)
            .map(|(row, intercept)| {
                row.iter().zip(features).map(|(w, x)| w * x).sum::<f64>() + intercept
            })
            .collect();

        Ok(softmax(&logits))
    }

    fn num_classes(&self) -> usize {
        self.weights.len()
    }
}

/// Numerically stable softmax: shift by the max logit before exponentiating.
fn softmax(logits: &[f64]) -> Vec<f64> {
    let max = logits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = logits.iter().map(|l| (l - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.iter().map(|e| e / sum).collect()
}

/// Guards ranker input against malformed classifier output: wrong length,
/// non-finite values, or values outside [0, 1].
pub fn validate_distribution(
    probabilities: &[f64],
    expected_len: usize,
) -> Result<(), ClassifierError> {
    if probabilities.len() != expected_len {
        return Err(ClassifierError::OutputLength {
            expected: expected_len,
            actual: probabilities.len(),
        });
    }
    for (index, &value) in probabilities.iter().enumerate() {
        if !value.is_finite() {
            return Err(ClassifierError::NonFinite { index });
        }
        if !(0.0..=1.0).contains(&value) {
            return Err(ClassifierError::OutOfRange { index, value });
        }
    }
    Ok(())
}
