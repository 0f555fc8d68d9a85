use serde::{Deserialize, Serialize};

use super::scene::{Choice, Scene, SceneId};

/// An unvalidated story: every scene as authored, plus the scene the
/// story opens on.
///
/// A `StoryDocument` may contain dangling targets or duplicate IDs;
/// it only becomes trustworthy once it has been turned into a
/// `SceneRegistry`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryDocument {
    pub title: String,
    pub start: SceneId,
    pub scenes: Vec<Scene>,
}

// RON authoring shape. Choices are written as `(text, target)` tuples
// to keep the story file readable, so it differs from `Scene`.

#[derive(Debug, Deserialize)]
#[serde(rename = "Story")]
struct RonStory {
    title: String,
    start: String,
    scenes: Vec<RonScene>,
}

#[derive(Debug, Deserialize)]
struct RonScene {
    id: String,
    label: String,
    body: String,
    #[serde(default)]
    backdrop: Option<String>,
    #[serde(default)]
    choices: Vec<(String, String)>,
}

impl StoryDocument {
    /// Parse a story from its RON source.
    pub fn parse_ron(input: &str) -> Result<StoryDocument, ron::error::SpannedError> {
        let raw: RonStory = ron::from_str(input)?;
        let scenes = raw
            .scenes
            .into_iter()
            .map(|s| Scene {
                id: SceneId(s.id),
                label: s.label,
                body: s.body,
                backdrop: s.backdrop,
                choices: s
                    .choices
                    .into_iter()
                    .map(|(text, target)| Choice::new(text, target))
                    .collect(),
            })
            .collect();

        Ok(StoryDocument {
            title: raw.title,
            start: SceneId(raw.start),
            scenes,
        })
    }

    /// Find a scene by ID with a linear scan. Duplicates resolve to
    /// the first occurrence.
    pub fn scene(&self, id: &SceneId) -> Option<&Scene> {
        self.scenes.iter().find(|s| &s.id == id)
    }
}
