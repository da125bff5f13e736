use anyhow::{Context, Result};
use clap::Parser;
use genedrift::config::{AppConfig, ConfigManager};
use genedrift::engines::genetics::{LoggingObserver, MixingEngine};
use genedrift::engines::{Driver, RunOptions};
use genedrift::render::{Renderer, SceneContext, TerminalRenderer};
use genedrift::types::RunSummary;
use signal_hook::consts::{SIGINT, SIGTERM};
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

/// Watch a grid of objects drift as they swap genes with each other
#[derive(Parser, Debug)]
#[command(name = "genedrift", version, about)]
struct Cli {
    /// TOML config file; GENEDRIFT__<SECTION>__<KEY> variables override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Frames to run (0 = until Ctrl-C); overrides display.frames
    #[arg(short, long)]
    frames: Option<usize>,

    /// Random seed; overrides mixing.seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Skip terminal drawing and only log progress
    #[arg(long)]
    headless: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// Print a JSON description of every config field and exit
    #[arg(long)]
    describe_config: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let manager = ConfigManager::new();
    manager
        .load_layered(cli.config.as_deref())
        .context("loading configuration")?;
    manager.update(|config| {
        if let Some(frames) = cli.frames {
            config.display.frames = frames;
        }
        if cli.seed.is_some() {
            config.mixing.seed = cli.seed;
        }
    })?;

    if cli.print_config {
        println!("{}", manager.to_toml()?);
        return Ok(());
    }

    if cli.describe_config {
        println!("{}", serde_json::to_string_pretty(&AppConfig::describe())?);
        return Ok(());
    }
    let config = manager.get()?;

    let stop = Arc::new(AtomicBool::new(false));
    for signal in [SIGINT, SIGTERM] {
        signal_hook::flag::register(signal, Arc::clone(&stop))
            .context("installing signal handler")?;
    }
    let options = RunOptions::frames(config.display.frames)
        .with_interval(Duration::from_millis(config.display.frame_interval_ms))
        .with_stop(stop);

    let scene = SceneContext::create(&config.display);
    let summary = if cli.headless {
        let (summary, scene) = simulate(&config, &options, scene)?;
        scene.dispose();
        summary
    } else {
        let terminal = TerminalRenderer::new(scene, std::io::stdout(), config.display.redraw_every)
            .with_clear_screen(true);
        let (summary, terminal) = simulate(&config, &options, terminal)?;
        let (scene, _) = terminal.into_parts();
        scene.dispose();
        summary
    };

    log::info!(
        "Finished {} frames: {} crossovers, {} mutations",
        summary.frames,
        summary.crossovers,
        summary.mutations
    );
    Ok(())
}

fn simulate<R: Renderer>(
    config: &AppConfig,
    options: &RunOptions,
    renderer: R,
) -> Result<(RunSummary, R)> {
    let mut engine = MixingEngine::new(config.mixing.clone());
    let population = engine.seed_population(config.population.grid_size);
    let mut driver = Driver::new(population, engine, renderer);
    let mut observer = LoggingObserver::new(config.display.redraw_every as u64 * 10);

    log::info!(
        "Running {} members, crossover rate {}, mutation rate {}",
        driver.population().len(),
        config.mixing.crossover_rate,
        config.mixing.mutation_rate
    );

    let summary = driver
        .run(options, &mut observer)
        .context("rendering frame")?;

    let (_, renderer) = driver.into_parts();
    Ok((summary, renderer))
}
