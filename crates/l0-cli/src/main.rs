mod report;
#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fitness_adapter::FeatureAdapter;
use fitness_metrics::{render, FeatureMetrics};
use l0_core::{Model, DEFAULT_SAMPLES};
use prometheus::Registry;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(name = "l0-fitness", about = "Score L0 model snapshots and derive fitness channels")]
struct Cli {
    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a model's prediction at 0.5 and its approximation error.
    Evaluate {
        #[arg(long)]
        snapshot: PathBuf,
        #[arg(long, default_value_t = DEFAULT_SAMPLES)]
        samples: usize,
    },
    /// Derive the four fitness channels for a model.
    Adapt {
        #[arg(long)]
        current: PathBuf,
        #[arg(long)]
        previous: Option<PathBuf>,
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        run_id: Option<String>,
        /// Also print the Prometheus exposition for the run.
        #[arg(long)]
        metrics: bool,
    },
    /// Print a snapshot for the given weights.
    Snapshot {
        #[arg(long, allow_hyphen_values = true)]
        w1: f64,
        #[arg(long, allow_hyphen_values = true)]
        w2: f64,
        #[arg(long, allow_hyphen_values = true)]
        w3: f64,
        #[arg(long, default_value_t = 0)]
        generation: u64,
    },
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    match cli.command {
        Command::Evaluate { snapshot, samples } => {
            let model = report::load_model(&snapshot)?;
            println!("Model: {model}");
            println!("Prediction at x=0.5: {:.4}", model.predict(0.5));
            println!("Error: {:.4}", model.evaluate_error(samples));
        }
        Command::Adapt {
            current,
            previous,
            config,
            run_id,
            metrics,
        } => {
            let cfg = report::load_config(config.as_deref())?;
            let current = report::load_model(&current)?;
            let previous = previous
                .as_deref()
                .map(report::load_model)
                .transpose()?;
            let run_id = run_id.unwrap_or_else(|| Uuid::new_v4().to_string());
            tracing::info!(%run_id, generation = current.generation, "adapting model");

            let adapter = FeatureAdapter::new(cfg);
            let out = report::build_report(&adapter, run_id, &current, previous.as_ref());
            println!("{}", serde_json::to_string_pretty(&out)?);

            if metrics {
                let registry = Registry::new();
                let gauges = FeatureMetrics::new(&registry)?;
                gauges.observe(&out.run_id, out.generation, &out.features)?;
                print!("{}", render(&registry)?);
            }
        }
        Command::Snapshot {
            w1,
            w2,
            w3,
            generation,
        } => {
            let model = Model::new(w1, w2, w3).with_generation(generation);
            println!("{}", model.to_json()?);
        }
    }
    Ok(())
}
