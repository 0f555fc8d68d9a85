/// Navigation integration tests — the built-in story played end to end.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use scene_engine::content::heidi_registry;
use scene_engine::core::console::run_autoplay;
use scene_engine::core::navigation::{NavigationEngine, NavigationError, RenderError, Renderer};
use scene_engine::core::registry::UnknownSceneError;
use scene_engine::core::terminal::TerminalRenderer;
use scene_engine::core::walk::random_walk;
use scene_engine::schema::scene::{Scene, SceneId};

/// Records every scene handed to it.
#[derive(Default)]
struct Recorder {
    shown: Vec<Scene>,
}

impl Renderer for Recorder {
    fn render(&mut self, scene: &Scene) -> Result<(), RenderError> {
        self.shown.push(scene.clone());
        Ok(())
    }
}

fn launched() -> NavigationEngine<Recorder> {
    let mut engine = NavigationEngine::new(heidi_registry().unwrap(), Recorder::default());
    engine.on_launch().unwrap();
    engine
}

fn go(engine: &mut NavigationEngine<Recorder>, id: &str) {
    engine.navigate(&SceneId::from(id)).unwrap();
}

#[test]
fn main_branch_a_and_restart() {
    let mut engine = launched();
    go(&mut engine, "scene_1");
    go(&mut engine, "stay_alps");
    go(&mut engine, "ending_brave");
    assert_eq!(engine.current_scene().id, "ending_brave");

    go(&mut engine, "start");
    assert_eq!(engine.current_scene().id, "start");
    assert_eq!(engine.current_scene().label, "Heidi's Adventure");

    let shown: Vec<&str> = engine
        .renderer()
        .shown
        .iter()
        .map(|s| s.id.as_str())
        .collect();
    assert_eq!(
        shown,
        vec!["start", "scene_1", "stay_alps", "ending_brave", "start"]
    );
}

#[test]
fn main_branch_b() {
    let mut engine = launched();
    go(&mut engine, "scene_1");
    go(&mut engine, "travel_frankfurt");
    go(&mut engine, "ending_writer");
    assert_eq!(engine.current_scene().id, "ending_writer");
    assert!(engine.current_scene().body.contains("ENDING C: Heidi the Writer"));
}

#[test]
fn four_endings_two_steps_from_scene_1() {
    let registry = heidi_registry().unwrap();
    let scene_1 = registry.get(&SceneId::from("scene_1")).unwrap();

    let mut endings = Vec::new();
    for branch in &scene_1.choices {
        let middle = registry.get(&branch.target).unwrap();
        for leaf in &middle.choices {
            endings.push(leaf.target.clone());
        }
    }

    let expected: Vec<SceneId> = ["ending_brave", "ending_heart", "ending_writer", "ending_dreamer"]
        .into_iter()
        .map(SceneId::from)
        .collect();
    assert_eq!(endings, expected);

    for id in &endings {
        let ending = registry.get(id).unwrap();
        assert!(ending.choices.len() <= 1);
        for choice in &ending.choices {
            assert_eq!(&choice.target, registry.start_id());
        }
    }
}

#[test]
fn every_ending_reachable_by_choice_position() {
    for (first, second, ending) in [
        (0, 0, "ending_brave"),
        (0, 1, "ending_heart"),
        (1, 0, "ending_writer"),
        (1, 1, "ending_dreamer"),
    ] {
        let mut engine = launched();
        engine.choose(0).unwrap();
        engine.choose(first).unwrap();
        engine.choose(second).unwrap();
        assert_eq!(engine.current_id(), &SceneId::from(ending));

        // The single restart choice closes the loop
        engine.choose(0).unwrap();
        assert_eq!(engine.current_id(), engine.registry().start_id());
    }
}

#[test]
fn navigate_ignores_prior_state() {
    let registry = heidi_registry().unwrap();
    let ids: Vec<SceneId> = registry.all_ids().cloned().collect();
    let mut engine = launched();
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..200 {
        let target = &ids[rng.gen_range(0..ids.len())];
        let scene = engine.navigate(target).unwrap();
        assert_eq!(&scene.id, target);
        assert_eq!(engine.current_id(), target);
    }
}

#[test]
fn current_scene_reads_are_stable() {
    let mut engine = launched();
    go(&mut engine, "travel_frankfurt");
    let first = engine.current_scene().clone();
    let second = engine.current_scene().clone();
    assert_eq!(first, second);
    assert_eq!(engine.renderer().shown.len(), 2);
}

#[test]
fn bad_target_fails_without_moving() {
    let mut engine = launched();
    go(&mut engine, "stay_alps");
    let before = engine.current_scene().clone();

    let err = engine.navigate(&SceneId::from("nonexistent-id")).unwrap_err();
    assert!(matches!(
        err,
        NavigationError::UnknownScene(UnknownSceneError(ref id)) if id == "nonexistent-id"
    ));
    assert_eq!(engine.current_scene(), &before);
    assert_eq!(engine.renderer().shown.len(), 2);
}

#[test]
fn render_receives_full_scene() {
    let engine = {
        let mut engine = launched();
        go(&mut engine, "scene_1");
        engine
    };
    let shown = &engine.renderer().shown[1];
    assert_eq!(shown.label, "🏔️ Swiss Alps 🏔️");
    assert!(shown.body.starts_with("Heidi lives high in the Swiss Alps"));
    assert_eq!(shown.backdrop.as_deref(), Some("#7FB3D3"));
    let texts: Vec<&str> = shown.choices.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "Stay in the Alps with Grandfather",
            "Travel to Frankfurt to visit Clara"
        ]
    );
}

#[test]
fn long_random_walk_stays_on_valid_scenes() {
    let mut engine = launched();
    let mut rng = StdRng::seed_from_u64(42);
    let steps = random_walk(&mut engine, 500, &mut rng).unwrap();

    assert_eq!(steps.len(), 500);
    assert!(steps.iter().all(|s| s.choice.is_some()));
    for step in &steps {
        assert!(engine.registry().contains(&step.to));
    }
    // Every ending loops back, so the walk keeps returning to the title
    assert!(steps.iter().any(|s| s.to == "start"));
}

#[test]
fn terminal_renderer_plays_branch_b() {
    let renderer = TerminalRenderer::new(Vec::new()).width(60);
    let mut engine = NavigationEngine::new(heidi_registry().unwrap(), renderer);
    engine.on_launch().unwrap();
    engine.choose(0).unwrap();
    engine.choose(1).unwrap();
    engine.choose(1).unwrap();

    let out = String::from_utf8(engine.into_renderer().into_inner()).unwrap();
    assert!(out.contains("1) Start Adventure"));
    assert!(out.contains("2) Travel to Frankfurt to visit Clara"));
    assert!(out.contains("ENDING D: Heidi the Dreamer"));
    assert!(out.contains("1) Restart Adventure"));
}

#[test]
fn autoplay_prints_the_pick_before_each_scene() {
    let mut engine = NavigationEngine::new(heidi_registry().unwrap(), Recorder::default());
    let mut out = Vec::new();
    let summary = run_autoplay(&mut engine, 8, &mut StdRng::seed_from_u64(2024), &mut out).unwrap();
    assert_eq!(summary.transitions, 9);

    let out = String::from_utf8(out).unwrap();
    let picks: Vec<&str> = out
        .lines()
        .filter_map(|line| line.strip_prefix("> "))
        .collect();
    assert_eq!(picks.len(), 8);
    assert_eq!(picks[0], "Start Adventure");

    // Each pick is a choice of the scene shown before it and leads to the next one
    let shown = &engine.renderer().shown;
    for (i, pick) in picks.iter().enumerate() {
        let choice = shown[i]
            .choices
            .iter()
            .find(|c| c.text == *pick)
            .unwrap();
        assert_eq!(choice.target, shown[i + 1].id);
    }
    assert_eq!(&shown[8].id, engine.current_id());
}
