//! promptevo: evolve worker instructions for a labeled dataset
//!
//! ```bash
//! # Evolve instructions for a BBH task using the default `claude` CLI client
//! promptevo --data bbh/word_sorting.json --task word_sorting --seed 7
//!
//! # Use a config file and dump every generation as JSON
//! promptevo --config promptevo.toml --data train.csv --json
//! ```

use anyhow::Context;
use clap::Parser;
use promptevo::config::ConfigManager;
use promptevo::data::{bbh, load_examples};
use promptevo::engines::generation::{EvolutionEngine, LogProgressCallback};
use promptevo::model::ModelRegistry;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "promptevo")]
#[command(about = "Evolve natural-language instructions for a worker model")]
struct Args {
    /// Dataset file (.csv or .json)
    #[arg(long)]
    data: PathBuf,

    /// Config file (toml or json); PROMPTEVO__SECTION__KEY env vars override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for eval sampling and tie-breaking
    #[arg(long)]
    seed: Option<u64>,

    /// Number of generations
    #[arg(long)]
    generations: Option<usize>,

    /// Model provider registered in the model registry
    #[arg(long)]
    provider: Option<String>,

    /// Model name handed to the provider
    #[arg(long)]
    model: Option<String>,

    /// BIG-Bench-Hard task id used to normalize inputs
    #[arg(long)]
    task: Option<String>,

    /// Print the full run (all generations) as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let manager = ConfigManager::new();
    if let Some(path) = &args.config {
        manager
            .load_from_file(path)
            .with_context(|| format!("Loading config from {}", path.display()))?;
    }
    manager.update(|config| {
        if let Some(seed) = args.seed {
            config.evolution.seed = Some(seed);
        }
        if let Some(generations) = args.generations {
            config.evolution.num_generations = generations;
        }
        if let Some(provider) = &args.provider {
            config.model.provider = provider.clone();
        }
        if let Some(model) = &args.model {
            config.model.model_name = model.clone();
        }
        if let Some(task) = &args.task {
            config.task.task_name = Some(task.clone());
        }
    })?;
    let config = manager.get();

    let mut examples = load_examples(&args.data, &config.task.required_fields())
        .with_context(|| format!("Loading dataset from {}", args.data.display()))?;
    if let Some(task) = &config.task.task_name {
        log::info!("Normalizing inputs for task {} ({:?})", task, bbh::TaskCategory::of(task));
        bbh::prepare_examples(&mut examples, task, &config.task.input_fields)?;
    }
    log::info!("Loaded {} examples", examples.len());

    let model = ModelRegistry::with_builtins().create(&config.model)?;
    let mut engine = EvolutionEngine::new(config.evolution.clone(), &config.task, model)?;
    let result = engine.run(&examples, LogProgressCallback)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("Best accuracy: {:.4}", result.best_score);
        println!("Best instructions:");
        println!("{}", result.best.to_bullets());
    }

    Ok(())
}
