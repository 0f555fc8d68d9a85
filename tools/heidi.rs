/// Heidi — play "Heidi's Adventure" in the terminal.
///
/// Usage: heidi [--width <n>] [--show-ids] [--autoplay <seed>] [--steps <n>] [--log <filter>]
///
/// Commands during play:
///   <n>      — pick choice n
///   restart  — back to the title scene
///   look     — show the current scene again
///   help     — list commands
///   quit     — exit

use rand::rngs::StdRng;
use rand::SeedableRng;
use scene_engine::content::heidi_registry;
use scene_engine::core::config::PresenterConfig;
use scene_engine::core::console::{run_autoplay, run_session, SessionSummary};
use scene_engine::core::navigation::NavigationEngine;
use scene_engine::core::terminal::TerminalRenderer;
use std::io;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let config = match PresenterConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            print_usage();
            process::exit(2);
        }
    };

    if config.help {
        print_usage();
        return;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_writer(io::stderr)
        .init();

    // Nothing is shown until the story has passed validation
    let registry = match heidi_registry() {
        Ok(registry) => registry,
        Err(e) => {
            tracing::error!("failed to load built-in story: {}", e);
            eprintln!("ERROR: {}", e);
            process::exit(1);
        }
    };

    let renderer = TerminalRenderer::new(io::stdout())
        .width(config.width)
        .show_ids(config.show_ids);
    let mut engine = NavigationEngine::new(registry, renderer);

    let result = match config.autoplay {
        Some(seed) => {
            tracing::info!(seed, steps = config.steps, "autoplay");
            let mut rng = StdRng::seed_from_u64(seed);
            run_autoplay(&mut engine, config.steps, &mut rng, io::stdout())
                .map(|summary| log_summary(&summary))
                .map_err(|e| e.to_string())
        }
        None => {
            println!("{}", engine.registry().title());
            println!("Type a choice number and press Enter. Type 'help' for commands.");
            let stdin = io::stdin();
            run_session(&mut engine, stdin.lock(), io::stdout())
                .map(|summary| log_summary(&summary))
                .map_err(|e| e.to_string())
        }
    };

    if let Err(e) = result {
        tracing::error!("{}", e);
        eprintln!("ERROR: {}", e);
        process::exit(1);
    }
}

fn log_summary(summary: &SessionSummary) {
    tracing::info!(
        final_scene = %summary.final_scene,
        transitions = summary.transitions,
        "session finished"
    );
}

fn print_usage() {
    println!("Usage: heidi [options]");
    println!();
    println!("Options:");
    println!("  --width <n>        wrap text at n columns (default 72, minimum 20)");
    println!("  --show-ids         show scene ids and choice targets");
    println!("  --autoplay <seed>  make random choices instead of reading input");
    println!("  --steps <n>        number of autoplay choices (default 12)");
    println!("  --log <filter>     log filter when RUST_LOG is unset (default warn)");
    println!("  -h, --help         show this message");
}
