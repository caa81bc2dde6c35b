// Demonstration: run the catcher environment and evaluate a baseline policy.
//
// Build/run from this repo root:
//   RUST_LOG=ballcatch=debug cargo run --example catch_demo -- --policy chase --episodes 20 --preset lean

use std::env;

use ballcatch::catcher::{
    ActionSpace, CatcherConfig, ChasePolicy, EvaluationMetrics, Policy, RandomPolicy,
};
use ballcatch::world::{CatchScene, LaunchConfig};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    let policy_name = arg_value(&args, "--policy").unwrap_or("chase");
    let episodes: usize = arg_value(&args, "--episodes")
        .and_then(|s| s.parse().ok())
        .unwrap_or(25);
    let seed: u64 = arg_value(&args, "--seed")
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);
    let max_steps: u32 = arg_value(&args, "--max-steps")
        .and_then(|s| s.parse().ok())
        .unwrap_or(1500);

    let mut config = match arg_value(&args, "--preset").unwrap_or("rich") {
        "rich" => CatcherConfig::rich(),
        "lean" => CatcherConfig::lean(),
        other => {
            eprintln!("Unknown --preset '{}'; expected 'rich' or 'lean'.", other);
            std::process::exit(2);
        }
    };
    if args.iter().any(|a| a == "--discrete") {
        config.action_space = ActionSpace::Discrete;
    }

    let scene = CatchScene {
        launch: LaunchConfig {
            seed,
            ..LaunchConfig::default()
        },
        ..CatchScene::default()
    };
    let mut controller = match scene.build(config.clone()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to build scene: {}", e);
            std::process::exit(1);
        }
    };

    let mut policy: Box<dyn Policy> = match policy_name {
        "random" => Box::new(RandomPolicy::new(config.action_space, seed)),
        "chase" => Box::new(ChasePolicy::new(config.action_space)),
        other => {
            eprintln!("Unknown --policy '{}'; expected 'chase' or 'random'.", other);
            std::process::exit(2);
        }
    };

    match EvaluationMetrics::evaluate(
        &mut controller,
        policy.as_mut(),
        episodes,
        max_steps,
        CatchScene::DT,
    ) {
        Ok(metrics) => {
            println!("Policy: {}", policy.name());
            println!("{}", metrics);
            println!("{}", controller.aggregator());
        }
        Err(e) => {
            eprintln!("Evaluation failed: {}", e);
            std::process::exit(1);
        }
    }
}

fn arg_value<'a>(args: &'a [String], key: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == key)
        .and_then(|i| args.get(i + 1))
        .map(|s| s.as_str())
}
