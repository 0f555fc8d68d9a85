//! Built-in story content, compiled into the binary.

use crate::core::registry::{RegistryError, SceneRegistry};
use crate::schema::story::StoryDocument;

/// RON source of "Heidi's Adventure".
pub const HEIDI_STORY: &str = include_str!("../story_data/heidi.ron");

/// Parse the built-in story without validating it.
pub fn heidi_document() -> Result<StoryDocument, RegistryError> {
    Ok(StoryDocument::parse_ron(HEIDI_STORY)?)
}

/// The validated registry for "Heidi's Adventure".
pub fn heidi_registry() -> Result<SceneRegistry, RegistryError> {
    SceneRegistry::parse_ron(HEIDI_STORY)
}
