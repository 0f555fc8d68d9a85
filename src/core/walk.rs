/// Random walks through the scene graph, for autoplay and soak tests.

use rand::Rng;

use crate::core::navigation::{NavigationEngine, NavigationError, RenderError, Renderer};
use crate::schema::scene::{Scene, SceneId};

/// One move made during a walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkStep {
    pub from: SceneId,
    /// Zero-based choice taken, or `None` when a dead end forced a restart.
    pub choice: Option<usize>,
    /// Text of the choice taken. `None` for restarts.
    pub text: Option<String>,
    pub to: SceneId,
}

/// Pick a choice index uniformly at random. `None` for dead ends.
pub fn pick_choice<G: Rng + ?Sized>(scene: &Scene, rng: &mut G) -> Option<usize> {
    if scene.choices.is_empty() {
        None
    } else {
        Some(rng.gen_range(0..scene.choices.len()))
    }
}

/// Take `steps` random choices starting from wherever the engine is.
///
/// Dead ends restart the story rather than stopping the walk.
pub fn random_walk<R, G>(
    engine: &mut NavigationEngine<R>,
    steps: usize,
    rng: &mut G,
) -> Result<Vec<WalkStep>, NavigationError>
where
    R: Renderer,
    G: Rng + ?Sized,
{
    random_walk_with(engine, steps, rng, |_| Ok(()))
}

/// Like `random_walk`, but calls `announce` with each step before the
/// engine moves, so a presenter can show the pick ahead of the next scene.
pub fn random_walk_with<R, G, F>(
    engine: &mut NavigationEngine<R>,
    steps: usize,
    rng: &mut G,
    mut announce: F,
) -> Result<Vec<WalkStep>, NavigationError>
where
    R: Renderer,
    G: Rng + ?Sized,
    F: FnMut(&WalkStep) -> Result<(), RenderError>,
{
    let mut taken = Vec::with_capacity(steps);
    for _ in 0..steps {
        let scene = engine.current_scene();
        let choice = pick_choice(scene, rng);
        let step = match choice {
            Some(index) => WalkStep {
                from: scene.id.clone(),
                choice,
                text: Some(scene.choices[index].text.clone()),
                to: scene.choices[index].target.clone(),
            },
            None => WalkStep {
                from: scene.id.clone(),
                choice,
                text: None,
                to: engine.registry().start_id().clone(),
            },
        };

        announce(&step)?;
        match step.choice {
            Some(index) => engine.choose(index)?,
            None => engine.restart()?,
        };
        taken.push(step);
    }
    Ok(taken)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::registry::SceneRegistry;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    struct Silent;

    impl Renderer for Silent {
        fn render(&mut self, _scene: &Scene) -> Result<(), RenderError> {
            Ok(())
        }
    }

    fn engine() -> NavigationEngine<Silent> {
        let registry = SceneRegistry::builder()
            .scene(
                Scene::new("start", "S", "s")
                    .with_choice("a", "a")
                    .with_choice("b", "b"),
            )
            .scene(Scene::new("a", "A", "a").with_choice("back", "start"))
            .scene(Scene::new("b", "B", "b"))
            .build()
            .unwrap();
        NavigationEngine::new(registry, Silent)
    }

    #[test]
    fn walk_steps_chain_together() {
        let mut engine = engine();
        engine.on_launch().unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let steps = random_walk(&mut engine, 50, &mut rng).unwrap();
        assert_eq!(steps.len(), 50);
        for pair in steps.windows(2) {
            assert_eq!(pair[0].to, pair[1].from);
        }
        assert_eq!(&steps[49].to, engine.current_id());
    }

    #[test]
    fn dead_end_restarts() {
        let mut engine = engine();
        engine.navigate(&SceneId::from("b")).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let steps = random_walk(&mut engine, 1, &mut rng).unwrap();
        assert_eq!(
            steps[0],
            WalkStep {
                from: SceneId::from("b"),
                choice: None,
                text: None,
                to: SceneId::from("start"),
            }
        );
    }

    #[test]
    fn same_seed_same_walk() {
        let mut first = engine();
        let mut second = engine();
        let a = random_walk(&mut first, 20, &mut StdRng::seed_from_u64(99)).unwrap();
        let b = random_walk(&mut second, 20, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn announce_sees_each_step_before_the_move() {
        let mut engine = engine();
        engine.on_launch().unwrap();
        let mut seen = Vec::new();
        let steps = random_walk_with(&mut engine, 10, &mut StdRng::seed_from_u64(3), |step| {
            seen.push(step.clone());
            Ok(())
        })
        .unwrap();
        assert_eq!(seen, steps);
        for step in steps.iter().filter(|s| s.choice.is_some()) {
            let text = step.text.as_deref().unwrap();
            assert!(text == "a" || text == "b" || text == "back");
        }
    }

    #[test]
    fn failed_announce_stops_before_moving() {
        let mut engine = engine();
        engine.on_launch().unwrap();
        let result = random_walk_with(&mut engine, 3, &mut StdRng::seed_from_u64(5), |_| {
            Err(RenderError::Other("closed".to_string()))
        });
        assert!(matches!(result, Err(NavigationError::Render(_))));
        assert_eq!(engine.current_id(), &SceneId::from("start"));
    }
}
