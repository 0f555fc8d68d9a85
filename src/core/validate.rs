/// Story validation — referential integrity and reachability checks
/// run before any scene is shown.

use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;
use thiserror::Error;

use crate::schema::scene::SceneId;
use crate::schema::story::StoryDocument;

/// A content defect that makes a story unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoryDefect {
    #[error("story has no scenes")]
    EmptyStory,
    #[error("scene '{0}' is defined more than once")]
    DuplicateScene(SceneId),
    #[error("start scene '{0}' is not defined")]
    MissingStart(SceneId),
    #[error("choice {choice} of scene '{scene}' targets undefined scene '{target}'")]
    DanglingTarget {
        scene: SceneId,
        choice: usize,
        target: SceneId,
    },
}

/// Outcome of validating a story document.
///
/// `defects` are fatal. `unreachable` and `dead_ends` are authoring
/// smells and only warrant a warning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub defects: Vec<StoryDefect>,
    /// Scenes that cannot be reached from the start scene, in authoring order.
    pub unreachable: Vec<SceneId>,
    /// Scenes with no outgoing choices, in authoring order.
    pub dead_ends: Vec<SceneId>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.defects.is_empty()
    }

    pub fn warning_count(&self) -> usize {
        self.unreachable.len() + self.dead_ends.len()
    }

    /// Returns the first defect, if any.
    pub fn first_defect(&self) -> Option<&StoryDefect> {
        self.defects.first()
    }
}

/// Validate a story document.
///
/// Checks that the story is non-empty, that scene IDs are unique, that
/// the start scene exists, and that every choice target resolves. Then
/// walks the graph breadth-first from the start scene to find orphans.
pub fn validate(doc: &StoryDocument) -> ValidationReport {
    let mut report = ValidationReport::default();

    if doc.scenes.is_empty() {
        report.defects.push(StoryDefect::EmptyStory);
        return report;
    }

    // First occurrence wins for graph traversal
    let mut index: FxHashMap<&SceneId, usize> = FxHashMap::default();
    for (i, scene) in doc.scenes.iter().enumerate() {
        if index.contains_key(&scene.id) {
            report
                .defects
                .push(StoryDefect::DuplicateScene(scene.id.clone()));
        } else {
            index.insert(&scene.id, i);
        }
    }

    let has_start = index.contains_key(&doc.start);
    if !has_start {
        report
            .defects
            .push(StoryDefect::MissingStart(doc.start.clone()));
    }

    for scene in &doc.scenes {
        for (i, choice) in scene.choices.iter().enumerate() {
            if !index.contains_key(&choice.target) {
                report.defects.push(StoryDefect::DanglingTarget {
                    scene: scene.id.clone(),
                    choice: i,
                    target: choice.target.clone(),
                });
            }
        }
        if scene.is_dead_end() {
            report.dead_ends.push(scene.id.clone());
        }
    }

    let visited = if has_start {
        reachable_from(doc, &index, &doc.start)
    } else {
        FxHashSet::default()
    };

    let mut reported: FxHashSet<&SceneId> = FxHashSet::default();
    for scene in &doc.scenes {
        if !visited.contains(&scene.id) && reported.insert(&scene.id) {
            report.unreachable.push(scene.id.clone());
        }
    }

    report
}

fn reachable_from<'a>(
    doc: &'a StoryDocument,
    index: &FxHashMap<&'a SceneId, usize>,
    start: &'a SceneId,
) -> FxHashSet<&'a SceneId> {
    let mut visited = FxHashSet::default();
    let mut queue = VecDeque::new();
    visited.insert(start);
    queue.push_back(start);

    while let Some(id) = queue.pop_front() {
        let Some(&i) = index.get(id) else {
            continue;
        };
        for target in doc.scenes[i].targets() {
            if visited.insert(target) {
                queue.push_back(target);
            }
        }
    }

    visited
}
