//! Sampling Studio command-line driver
//!
//! Loads or composes a signal, samples it at a multiple of its reference
//! frequency, and exports the raw, reconstructed and error series as CSV.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use sampling_studio::core::RenderFrame;
use sampling_studio::engine::{Cycle, PipelineParams, SamplingRatio, Session, SignalMode};
use sampling_studio::sources::{ImportedSignal, SignalComponent};
use sampling_studio::storage::{CompositionFile, ConfigManager, SessionConfig};

#[derive(Parser)]
#[command(name = "sampling-studio")]
#[command(about = "Sample, reconstruct and compare signals", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Session config file (created with defaults if missing)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SamplingArgs {
    /// Sampling ratio relative to the reference frequency (0-8)
    #[arg(short, long, default_value = "2")]
    ratio: u8,

    /// Add Gaussian noise at this SNR in dB
    #[arg(long, value_name = "DB")]
    snr: Option<f64>,

    /// Directory for per-series CSV exports
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample a signal imported from a `time,values` CSV file
    Import {
        /// Input CSV file
        #[arg(short, long)]
        input: PathBuf,

        #[command(flatten)]
        sampling: SamplingArgs,
    },

    /// Sample a mixture of sinusoids
    Compose {
        /// Component as AMPLITUDE,FREQUENCY,PHASE (repeatable)
        #[arg(short, long = "component", value_name = "A,F,P")]
        components: Vec<String>,

        /// Merge a saved composition before adding components
        #[arg(long, value_name = "FILE")]
        load: Option<PathBuf>,

        /// Remove a component by key after loading and adding
        #[arg(long = "remove", value_name = "KEY")]
        remove: Vec<u32>,

        /// Save the resulting composition
        #[arg(long, value_name = "FILE")]
        save: Option<PathBuf>,

        #[command(flatten)]
        sampling: SamplingArgs,
    },
}

fn parse_component(text: &str) -> Result<SignalComponent> {
    let parts: Vec<f64> = text
        .split(',')
        .map(|s| s.trim().parse::<f64>())
        .collect::<std::result::Result<Vec<f64>, _>>()
        .context(format!("Invalid component '{}'", text))?;

    match parts.as_slice() {
        [amplitude, frequency, phase] => Ok(SignalComponent::new(*amplitude, *frequency, *phase)),
        [amplitude, frequency] => Ok(SignalComponent::new(*amplitude, *frequency, 0.0)),
        _ => bail!("Component '{}' must be AMPLITUDE,FREQUENCY[,PHASE]", text),
    }
}

fn write_frame(frame: &RenderFrame, dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).context(format!("Failed to create {:?}", dir))?;

    for (name, series) in &frame.series {
        let file_name = format!("{}.csv", name.replace(['/', ' '], "_"));
        let path = dir.join(file_name);
        let mut wtr = csv::Writer::from_path(&path)
            .context(format!("Failed to create {:?}", path))?;
        wtr.write_record(["x", "y"])?;
        for (x, y) in series.x.iter().zip(&series.y) {
            wtr.write_record(&[x.to_string(), y.to_string()])?;
        }
        wtr.flush()?;
    }
    Ok(())
}

fn report(cycle: &Cycle) {
    println!("Signal:             {}", cycle.source_name);
    println!("Ratio:              {}x", cycle.ratio.value());
    println!("Sampling frequency: {}Hz", cycle.plan.sampling_frequency);
    println!("Sample count:       {}", cycle.plan.sample_count);
    if let Some(params) = &cycle.parameters {
        println!("Reference freq:     {} Hz", params.max_frequency);
        println!("Duration:           {} s", params.duration);
    }
    match cycle.error_summary() {
        Some(summary) => {
            println!("Error RMS:          {:.6}", summary.rms);
            println!("Error peak:         {:.6}", summary.peak);
        }
        None => println!("No samples drawn; raw signal only"),
    }
}

async fn load_config(path: Option<&Path>) -> Result<SessionConfig> {
    match path {
        Some(path) => ConfigManager::new(path.to_path_buf()).load().await,
        None => Ok(SessionConfig::default()),
    }
}

fn run_cycle(session: &mut Session, mode: SignalMode, sampling: &SamplingArgs) -> Result<()> {
    let ratio = SamplingRatio::bounded(sampling.ratio, session.config().max_ratio)?;
    let mut params = PipelineParams::new(mode, ratio);
    if let Some(snr) = sampling.snr {
        params = params.with_snr(snr);
    }

    let cycle = session.recompute(&params).context("Sampling cycle failed")?;
    report(&cycle);

    if let Some(dir) = &sampling.output {
        write_frame(&cycle.to_frame(session.sequence_id()), dir)?;
        println!("Series written to {:?}", dir);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = load_config(cli.config.as_deref()).await?;
    let mut session = Session::new(config);

    match cli.command {
        Commands::Import { input, sampling } => {
            let signal = ImportedSignal::from_path(&input)?;
            session.load_signal(signal);
            run_cycle(&mut session, SignalMode::Imported, &sampling)?;
        }
        Commands::Compose {
            components,
            load,
            remove,
            save,
            sampling,
        } => {
            if let Some(path) = load {
                let file = CompositionFile::new(path);
                file.load_into(session.store_mut()).await?;
                println!("Composition:        {}", file.display_name());
            }
            for entry in &components {
                session.add_component(parse_component(entry)?)?;
            }
            for key in remove {
                if session.remove_component(key).is_none() {
                    log::warn!("No component with key {}", key);
                }
            }
            if let Some(path) = save {
                CompositionFile::new(path).save(session.store()).await?;
            }
            run_cycle(&mut session, SignalMode::Composed, &sampling)?;
        }
    }

    Ok(())
}
