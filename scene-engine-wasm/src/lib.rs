//! WASM bindings for scene-engine — lets a browser page act as the renderer.
//!
//! The page calls `launch`, `choose`, `go_to` or `restart` and redraws
//! from the JSON scene view each call returns.

use wasm_bindgen::prelude::*;

use scene_engine::content::heidi_registry;
use scene_engine::core::navigation::{NavigationEngine, RenderError, Renderer};
use scene_engine::schema::scene::{Scene, SceneId};

// ---------------------------------------------------------------------------
// JSON view types for communication across the WASM boundary
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
struct ChoiceView {
    index: usize,
    text: String,
    target: String,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
struct SceneView {
    id: String,
    label: String,
    body: String,
    backdrop: Option<String>,
    choices: Vec<ChoiceView>,
}

impl SceneView {
    fn from_scene(scene: &Scene) -> Self {
        SceneView {
            id: scene.id.to_string(),
            label: scene.label.clone(),
            body: scene.body.clone(),
            backdrop: scene.backdrop.clone(),
            choices: scene
                .choices
                .iter()
                .enumerate()
                .map(|(index, c)| ChoiceView {
                    index,
                    text: c.text.clone(),
                    target: c.target.to_string(),
                })
                .collect(),
        }
    }
}

/// Keeps the most recently rendered scene for the page to pick up.
#[derive(Default)]
struct ViewRenderer {
    last: Option<SceneView>,
}

impl Renderer for ViewRenderer {
    fn render(&mut self, scene: &Scene) -> Result<(), RenderError> {
        self.last = Some(SceneView::from_scene(scene));
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// StoryPlayer — the main exported struct
// ---------------------------------------------------------------------------
#[wasm_bindgen]
pub struct StoryPlayer {
    engine: NavigationEngine<ViewRenderer>,
}

#[wasm_bindgen]
impl StoryPlayer {
    /// Create a player for the built-in story. Nothing is shown until `launch`.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<StoryPlayer, JsError> {
        let registry =
            heidi_registry().map_err(|e| JsError::new(&format!("Story load error: {e}")))?;
        Ok(StoryPlayer {
            engine: NavigationEngine::new(registry, ViewRenderer::default()),
        })
    }

    /// Story title, for the page heading.
    pub fn title(&self) -> String {
        self.engine.registry().title().to_string()
    }

    /// Show the start scene. Returns the scene view as JSON.
    ///
    /// ```json
    /// {
    ///   "id": "start",
    ///   "label": "Heidi's Adventure",
    ///   "body": "Sponsored by RunMyModel.org",
    ///   "backdrop": "#2c4a3e",
    ///   "choices": [{ "index": 0, "text": "Start Adventure", "target": "scene_1" }]
    /// }
    /// ```
    pub fn launch(&mut self) -> Result<String, JsError> {
        self.engine
            .on_launch()
            .map_err(|e| JsError::new(&format!("Navigation error: {e}")))?;
        self.last_view()
    }

    /// Follow the choice at `index` (zero-based) of the current scene.
    pub fn choose(&mut self, index: usize) -> Result<String, JsError> {
        self.engine
            .choose(index)
            .map_err(|e| JsError::new(&format!("Navigation error: {e}")))?;
        self.last_view()
    }

    /// Jump to a scene by ID, as a choice control wired to its target would.
    pub fn go_to(&mut self, target: &str) -> Result<String, JsError> {
        self.engine
            .on_choice_selected(&SceneId::from(target))
            .map_err(|e| JsError::new(&format!("Navigation error: {e}")))?;
        self.last_view()
    }

    /// Back to the start scene.
    pub fn restart(&mut self) -> Result<String, JsError> {
        self.engine
            .restart()
            .map_err(|e| JsError::new(&format!("Navigation error: {e}")))?;
        self.last_view()
    }

    /// The current scene as JSON, without rendering.
    pub fn current(&self) -> Result<String, JsError> {
        to_json(&SceneView::from_scene(self.engine.current_scene()))
    }

    /// Return JSON array of every scene ID in the story.
    pub fn scene_ids(&self) -> String {
        let ids: Vec<&str> = self.engine.registry().all_ids().map(|id| id.as_str()).collect();
        serde_json::to_string(&ids).unwrap_or_else(|_| "[]".to_string())
    }
}

// Private helpers
impl StoryPlayer {
    fn last_view(&self) -> Result<String, JsError> {
        match &self.engine.renderer().last {
            Some(view) => to_json(view),
            None => Err(JsError::new("nothing has been rendered yet")),
        }
    }
}

fn to_json(view: &SceneView) -> Result<String, JsError> {
    serde_json::to_string(view).map_err(|e| JsError::new(&format!("Serialization error: {e}")))
}
