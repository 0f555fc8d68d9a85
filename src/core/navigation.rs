/// The navigation engine: owns the current-scene pointer and drives
/// the renderer.
///
/// The engine holds no history. Every navigation is a pure function of
/// the target ID: the previous scene never influences the next one.

use thiserror::Error;

use crate::core::registry::{SceneRegistry, UnknownSceneError};
use crate::schema::scene::{Scene, SceneId};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Other(String),
}

#[derive(Debug, Error)]
pub enum NavigationError {
    #[error(transparent)]
    UnknownScene(#[from] UnknownSceneError),
    #[error("scene '{scene}' has no choice {index} (it offers {available})")]
    NoSuchChoice {
        scene: SceneId,
        index: usize,
        available: usize,
    },
    #[error("render error: {0}")]
    Render(#[from] RenderError),
}

/// The presentation collaborator.
///
/// A renderer displays one fully resolved scene at a time. It should
/// show the label and body, then one control per choice in order,
/// wiring each control back to `NavigationEngine::on_choice_selected`
/// with that choice's target.
pub trait Renderer {
    fn render(&mut self, scene: &Scene) -> Result<(), RenderError>;
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render(&mut self, scene: &Scene) -> Result<(), RenderError> {
        (**self).render(scene)
    }
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&mut self, scene: &Scene) -> Result<(), RenderError> {
        (**self).render(scene)
    }
}

/// Holds the single current-scene pointer for one viewer.
pub struct NavigationEngine<R> {
    registry: SceneRegistry,
    current: SceneId,
    renderer: R,
    transitions: u64,
}

impl<R: Renderer> NavigationEngine<R> {
    /// Create an engine positioned on the registry's start scene.
    ///
    /// Nothing is rendered until `on_launch` is called.
    pub fn new(registry: SceneRegistry, renderer: R) -> Self {
        let current = registry.start_id().clone();
        Self {
            registry,
            current,
            renderer,
            transitions: 0,
        }
    }

    /// Show the start scene for the first time.
    pub fn on_launch(&mut self) -> Result<&Scene, NavigationError> {
        tracing::info!(story = %self.registry.title(), "launching story");
        let start = self.registry.start_id().clone();
        self.navigate(&start)
    }

    /// Entry point for a viewer selecting a choice.
    pub fn on_choice_selected(&mut self, target: &SceneId) -> Result<&Scene, NavigationError> {
        self.navigate(target)
    }

    /// Move to `target` and render it.
    ///
    /// An unknown target leaves the current scene untouched. The pointer
    /// is updated before the renderer runs, so a render failure still
    /// leaves the engine on the new scene.
    pub fn navigate(&mut self, target: &SceneId) -> Result<&Scene, NavigationError> {
        let scene = match self.registry.get(target) {
            Ok(scene) => scene,
            Err(e) => {
                tracing::error!(from = %self.current, target = %target, "navigation to unknown scene");
                return Err(e.into());
            }
        };

        tracing::debug!(from = %self.current, to = %target, "navigate");
        self.current = scene.id.clone();
        self.renderer.render(scene)?;
        self.transitions += 1;
        Ok(scene)
    }

    /// Follow the `index`-th choice (zero-based) of the current scene.
    pub fn choose(&mut self, index: usize) -> Result<&Scene, NavigationError> {
        let scene = self.current_scene();
        let Some(choice) = scene.choices.get(index) else {
            return Err(NavigationError::NoSuchChoice {
                scene: scene.id.clone(),
                index,
                available: scene.choices.len(),
            });
        };
        let target = choice.target.clone();
        self.navigate(&target)
    }

    /// Go back to the start scene.
    pub fn restart(&mut self) -> Result<&Scene, NavigationError> {
        tracing::info!("restarting story");
        let start = self.registry.start_id().clone();
        self.navigate(&start)
    }

    /// Render the current scene again without moving.
    pub fn redraw(&mut self) -> Result<(), NavigationError> {
        let scene = self
            .registry
            .get(&self.current)
            .map_err(NavigationError::from)?;
        self.renderer.render(scene)?;
        Ok(())
    }

    /// The scene currently on display.
    pub fn current_scene(&self) -> &Scene {
        // `current` is only ever assigned IDs taken from the registry.
        match self.registry.get(&self.current) {
            Ok(scene) => scene,
            Err(_) => unreachable!("current scene '{}' missing from registry", self.current),
        }
    }

    pub fn current_id(&self) -> &SceneId {
        &self.current
    }

    pub fn registry(&self) -> &SceneRegistry {
        &self.registry
    }

    /// Number of successful navigations so far.
    pub fn transitions(&self) -> u64 {
        self.transitions
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
