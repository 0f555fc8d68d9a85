/// Story Linter — validates the built-in story's scene graph.
///
/// Usage: story_linter [--dot]
///
/// Checks referential integrity and reachability. With `--dot`, prints
/// the scene graph in Graphviz DOT form instead of the report.

use scene_engine::content::heidi_document;
use scene_engine::core::validate::{validate, ValidationReport};
use scene_engine::schema::story::StoryDocument;
use std::process;

fn main() {
    let mut dot = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--dot" => dot = true,
            "--help" | "-h" => {
                println!("Usage: story_linter [--dot]");
                process::exit(0);
            }
            other => {
                eprintln!("ERROR: unknown argument '{}'", other);
                process::exit(2);
            }
        }
    }

    let doc = match heidi_document() {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("ERROR: Failed to parse story: {}", e);
            process::exit(1);
        }
    };

    if dot {
        print!("{}", to_dot(&doc));
        return;
    }

    println!("Loaded '{}' with {} scenes", doc.title, doc.scenes.len());

    let report = validate(&doc);
    print_report(&doc, &report);

    if report.is_valid() {
        process::exit(0);
    } else {
        process::exit(1);
    }
}

fn print_report(doc: &StoryDocument, report: &ValidationReport) {
    println!("\n=== Story Lint Report ===\n");

    if report.is_valid() && report.warning_count() == 0 {
        println!("All checks passed!");
    }

    for id in &report.unreachable {
        println!("WARNING: scene '{}' is unreachable from '{}'", id, doc.start);
    }
    for id in &report.dead_ends {
        println!("WARNING: scene '{}' has no choices", id);
    }
    for defect in &report.defects {
        println!("ERROR: {}", defect);
    }

    let choices: usize = doc.scenes.iter().map(|s| s.choices.len()).sum();
    let endings = doc
        .scenes
        .iter()
        .filter(|s| s.choices.len() == 1 && s.choices[0].target == doc.start)
        .count();
    println!(
        "\nGraph: {} scenes, {} choices, {} restart endings",
        doc.scenes.len(),
        choices,
        endings
    );
    println!(
        "Summary: {} errors, {} warnings",
        report.defects.len(),
        report.warning_count()
    );
}

fn to_dot(doc: &StoryDocument) -> String {
    let mut out = String::from("digraph story {\n    rankdir=LR;\n");
    for scene in &doc.scenes {
        let shape = if scene.id == doc.start {
            "doublecircle"
        } else if scene.is_dead_end() {
            "octagon"
        } else {
            "box"
        };
        out.push_str(&format!(
            "    \"{}\" [shape={}, label=\"{}\"];\n",
            escape(scene.id.as_str()),
            shape,
            escape(&scene.label)
        ));
    }
    for scene in &doc.scenes {
        for choice in &scene.choices {
            out.push_str(&format!(
                "    \"{}\" -> \"{}\" [label=\"{}\"];\n",
                escape(scene.id.as_str()),
                escape(choice.target.as_str()),
                escape(&choice.text)
            ));
        }
    }
    out.push_str("}\n");
    out
}

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
