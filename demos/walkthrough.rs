/// Walkthrough example — plays one route through "Heidi's Adventure"
/// without reading input.
///
/// Route: title → Swiss Alps → stay with Grandfather → go for help → restart.
///
/// Run with: cargo run --example walkthrough

use scene_engine::content::heidi_registry;
use scene_engine::core::navigation::NavigationEngine;
use scene_engine::core::terminal::TerminalRenderer;
use scene_engine::schema::scene::SceneId;

fn main() {
    let registry = heidi_registry().expect("Failed to load built-in story");
    let renderer = TerminalRenderer::new(std::io::stdout()).width(64);
    let mut engine = NavigationEngine::new(registry, renderer);

    engine.on_launch().expect("Failed to show title scene");

    for target in ["scene_1", "stay_alps", "ending_brave"] {
        let choice = engine
            .current_scene()
            .choices
            .iter()
            .find(|c| c.target == target)
            .map(|c| c.text.clone())
            .expect("route should follow an offered choice");
        println!("\n> {}", choice);
        engine
            .on_choice_selected(&SceneId::from(target))
            .expect("navigation failed");
    }

    println!("\n> Restart Adventure");
    engine.restart().expect("restart failed");

    println!(
        "\n--- {} scenes shown, ended on '{}' ---",
        engine.transitions(),
        engine.current_id()
    );
}
