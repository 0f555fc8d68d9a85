/// Scene registry — the immutable, validated set of scenes in a story.

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::core::validate::{validate, StoryDefect};
use crate::schema::scene::{Scene, SceneId};
use crate::schema::story::StoryDocument;

/// A lookup for a scene ID that the registry does not define.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown scene: '{0}'")]
pub struct UnknownSceneError(pub SceneId);

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("invalid story: {0}")]
    Invalid(#[from] StoryDefect),
}

/// Registry of every scene in a story, keyed by ID.
///
/// A registry can only be obtained through validation, so every choice
/// target in it is guaranteed to resolve and the start scene exists.
#[derive(Debug, Clone)]
pub struct SceneRegistry {
    title: String,
    start: SceneId,
    scenes: FxHashMap<SceneId, Scene>,
    /// Authoring order.
    order: Vec<SceneId>,
}

/// Builder for constructing a `SceneRegistry` in code.
pub struct SceneRegistryBuilder {
    title: String,
    start: SceneId,
    scenes: Vec<Scene>,
}

impl SceneRegistry {
    pub fn builder() -> SceneRegistryBuilder {
        SceneRegistryBuilder {
            title: String::new(),
            start: SceneId::from("start"),
            scenes: Vec::new(),
        }
    }

    /// Parse and validate a story from RON source.
    pub fn parse_ron(input: &str) -> Result<SceneRegistry, RegistryError> {
        let doc = StoryDocument::parse_ron(input)?;
        Self::from_document(doc)
    }

    /// Validate a story document and freeze it into a registry.
    ///
    /// Fails on the first fatal defect. Unreachable scenes and dead
    /// ends are logged as warnings.
    pub fn from_document(doc: StoryDocument) -> Result<SceneRegistry, RegistryError> {
        let report = validate(&doc);
        if let Some(defect) = report.first_defect() {
            tracing::error!(
                story = %doc.title,
                defects = report.defects.len(),
                "story failed validation: {}",
                defect
            );
            return Err(RegistryError::Invalid(defect.clone()));
        }
        for id in &report.unreachable {
            tracing::warn!(scene = %id, "scene is unreachable from the start scene");
        }
        for id in &report.dead_ends {
            tracing::warn!(scene = %id, "scene has no choices");
        }

        let mut scenes = FxHashMap::default();
        let mut order = Vec::with_capacity(doc.scenes.len());
        for scene in doc.scenes {
            order.push(scene.id.clone());
            scenes.insert(scene.id.clone(), scene);
        }

        tracing::debug!(story = %doc.title, scenes = order.len(), "scene registry built");

        Ok(SceneRegistry {
            title: doc.title,
            start: doc.start,
            scenes,
            order,
        })
    }

    /// Look up a scene by ID.
    pub fn get(&self, id: &SceneId) -> Result<&Scene, UnknownSceneError> {
        self.scenes
            .get(id)
            .ok_or_else(|| UnknownSceneError(id.clone()))
    }

    /// Returns true if the registry defines the given scene.
    pub fn contains(&self, id: &SceneId) -> bool {
        self.scenes.contains_key(id)
    }

    /// All scene IDs in authoring order.
    pub fn all_ids(&self) -> impl Iterator<Item = &SceneId> {
        self.order.iter()
    }

    /// All scenes in authoring order.
    pub fn scenes(&self) -> impl Iterator<Item = &Scene> {
        self.order.iter().filter_map(|id| self.scenes.get(id))
    }

    pub fn start_id(&self) -> &SceneId {
        &self.start
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl SceneRegistryBuilder {
    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Set the start scene. Defaults to `"start"`.
    pub fn start(mut self, id: &str) -> Self {
        self.start = SceneId::from(id);
        self
    }

    pub fn scene(mut self, scene: Scene) -> Self {
        self.scenes.push(scene);
        self
    }

    pub fn build(self) -> Result<SceneRegistry, RegistryError> {
        SceneRegistry::from_document(StoryDocument {
            title: self.title,
            start: self.start,
            scenes: self.scenes,
        })
    }
}
