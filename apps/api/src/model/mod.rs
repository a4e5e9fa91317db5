//! Model context: everything loaded from the artifact, shared read-only
//! across requests for the lifetime of the process.

pub mod artifact;
pub mod classifier;
pub mod vocabulary;

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::info;

use crate::model::artifact::{ArtifactError, ModelArtifact, TrainingSampleTable};
use crate::model::classifier::LinearClassifier;
use crate::model::vocabulary::{CareerSet, SkillVocabulary};
use crate::recommend::skill_index::CareerSkillIndex;

/// The immutable bundle every request handler borrows: vocabulary, career
/// set, training samples, classifier, and the precomputed reverse skill
/// index. Built once per successful artifact load.
#[derive(Debug)]
pub struct ModelContext {
    pub vocabulary: SkillVocabulary,
    pub careers: CareerSet,
    pub samples: TrainingSampleTable,
    pub classifier: LinearClassifier,
    pub skill_index: CareerSkillIndex,
}

impl ModelContext {
    pub fn from_artifact(artifact: ModelArtifact) -> Self {
        let num_features = artifact.skills.len();
        let vocabulary = SkillVocabulary::new(artifact.skills);
        let careers = CareerSet::new(artifact.careers);
        let samples = TrainingSampleTable::new(artifact.samples);
        let classifier = LinearClassifier::new(artifact.classifier, num_features);
        let skill_index = CareerSkillIndex::build(&careers, &samples, &vocabulary);

        Self {
            vocabulary,
            careers,
            samples,
            classifier,
            skill_index,
        }
    }
}

/// Guarded lazy holder for the model context.
///
/// The mutex serializes concurrent first use so the artifact is read and
/// parsed exactly once. A failed load leaves the slot empty and is retried
/// on the next call; it never poisons the process.
pub struct LazyModel {
    artifact_path: PathBuf,
    slot: Mutex<Option<Arc<ModelContext>>>,
}

impl LazyModel {
    pub fn new(artifact_path: impl Into<PathBuf>) -> Self {
        Self {
            artifact_path: artifact_path.into(),
            slot: Mutex::new(None),
        }
    }

    /// Returns the loaded context, loading it from the artifact file first
    /// if necessary.
    pub async fn get_or_load(&self) -> Result<Arc<ModelContext>, ArtifactError> {
        let mut slot = self.slot.lock().await;
        if let Some(ctx) = slot.as_ref() {
            return Ok(ctx.clone());
        }

        let raw = tokio::fs::read_to_string(&self.artifact_path)
            .await
            .map_err(|source| ArtifactError::Io {
                path: self.artifact_path.display().to_string(),
                source,
            })?;
        let artifact = ModelArtifact::from_json(&raw)?;
        let ctx = Arc::new(ModelContext::from_artifact(artifact));

        info!(
            skills = ctx.vocabulary.len(),
            careers = ctx.careers.len(),
            samples = ctx.samples.len(),
            "Model artifact loaded"
        );

        *slot = Some(ctx.clone());
        Ok(ctx)
    }

    /// Returns the context only if a previous load already succeeded.
    pub async fn get(&self) -> Option<Arc<ModelContext>> {
        self.slot.lock().await.clone()
    }

    pub async fn is_loaded(&self) -> bool {
        self.slot.lock().await.is_some()
    }
}
