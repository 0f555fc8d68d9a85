use serde::{Deserialize, Serialize};
use std::fmt;

/// Newtype wrapper for scene IDs.
///
/// Scene IDs are stable string tokens such as `"start"` or `"ending_brave"`.
/// They are the node keys of the scene graph and the targets of choices.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SceneId(pub String);

impl SceneId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SceneId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for SceneId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl PartialEq<str> for SceneId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SceneId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A labeled edge from one scene to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub text: String,
    pub target: SceneId,
}

impl Choice {
    pub fn new(text: impl Into<String>, target: impl Into<SceneId>) -> Self {
        Self {
            text: text.into(),
            target: target.into(),
        }
    }
}

/// A single narrative unit: a heading, a block of text, and the
/// choices leading out of it.
///
/// Choice order is display order. A scene with no choices is a dead end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    pub id: SceneId,
    pub label: String,
    pub body: String,
    /// Backdrop color hint (`#rrggbb`) drawn behind the label.
    #[serde(default)]
    pub backdrop: Option<String>,
    pub choices: Vec<Choice>,
}

impl Scene {
    pub fn new(id: impl Into<SceneId>, label: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            body: body.into(),
            backdrop: None,
            choices: Vec::new(),
        }
    }

    pub fn with_backdrop(mut self, color: impl Into<String>) -> Self {
        self.backdrop = Some(color.into());
        self
    }

    pub fn with_choice(mut self, text: impl Into<String>, target: impl Into<SceneId>) -> Self {
        self.choices.push(Choice::new(text, target));
        self
    }

    /// Returns true if the scene offers no way out.
    pub fn is_dead_end(&self) -> bool {
        self.choices.is_empty()
    }

    /// Iterates over choice targets in display order. A target appears
    /// once per choice that leads to it.
    pub fn targets(&self) -> impl Iterator<Item = &SceneId> {
        self.choices.iter().map(|c| &c.target)
    }
}
