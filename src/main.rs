//! Terminal driver for the Game of Life engine

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::{Duration, Instant};
use toroidal_life::{
    build_simulator,
    config::{default_config_path, CliOverrides, OutputFormat, Settings},
    utils::{ColorOutput, GridFormatter, RunReport},
    SeedPattern, Simulator,
};

#[derive(Parser)]
#[command(name = "toroidal_life")]
#[command(about = "Runs Conway's Game of Life simulation.")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Animate a simulation in the terminal
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Grid side length (overrides config)
        #[arg(short = 'n', long)]
        grid_size: Option<usize>,

        /// Frame interval in milliseconds (overrides config)
        #[arg(short, long)]
        interval: Option<u64>,

        /// Initial pattern (overrides config)
        #[arg(short, long, value_enum)]
        pattern: Option<SeedPattern>,

        /// Start from a single glider
        #[arg(long)]
        glider: bool,

        /// Start from a Gosper glider gun
        #[arg(long)]
        gosper: bool,

        /// Stop after this many generations
        #[arg(short, long)]
        generations: Option<usize>,

        /// Seed for the random fill
        #[arg(long)]
        seed: Option<u64>,

        /// Compute each step on the rayon thread pool
        #[arg(long)]
        parallel: bool,

        /// Skip frame rendering and only print the summary
        #[arg(long)]
        no_frames: bool,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Create default and preset configuration files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

/// Options of the `run` subcommand after flag resolution
struct RunOptions {
    config: PathBuf,
    overrides: CliOverrides,
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", ColorOutput::error(&format!("❌ {:#}", err)));
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Run {
            config, grid_size, interval, pattern, glider, gosper,
            generations, seed, parallel, no_frames, json, verbose,
        } => {
            let overrides = CliOverrides {
                grid_size,
                pattern: resolve_pattern(pattern, glider, gosper),
                interval_ms: interval,
                generations,
                seed,
                parallel,
                no_frames,
                format: json.then_some(OutputFormat::Json),
            };
            let mut stdout = std::io::stdout().lock();
            run_command(RunOptions { config, overrides, verbose }, &mut stdout)
        }
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

/// `--glider` takes precedence over `--gosper`, which takes precedence over `--pattern`
fn resolve_pattern(pattern: Option<SeedPattern>, glider: bool, gosper: bool) -> Option<SeedPattern> {
    if glider {
        Some(SeedPattern::Glider)
    } else if gosper {
        Some(SeedPattern::GosperGun)
    } else {
        pattern
    }
}

fn load_settings(config_path: &Path) -> Result<Settings> {
    if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))
    } else {
        println!("{}", ColorOutput::warning(&format!(
            "Config file {} not found, using defaults", config_path.display()
        )));
        Ok(Settings::default())
    }
}

fn run_command<W: Write>(options: RunOptions, out: &mut W) -> Result<()> {
    let mut settings = load_settings(&options.config)?;
    settings.merge_with_cli(&options.overrides);

    settings.validate().context("Configuration validation failed")?;

    if options.verbose {
        println!("Configuration:");
        println!("  Grid size: {}", settings.simulation.grid_size);
        println!("  Pattern: {}", settings.simulation.pattern);
        println!("  Alive probability: {}", settings.simulation.alive_probability);
        match settings.simulation.generations {
            Some(limit) => println!("  Generations: {}", limit),
            None => println!("  Generations: unlimited"),
        }
        println!("  Interval: {}ms", settings.display.interval_ms);
        println!("  Parallel: {}", settings.simulation.parallel);
        println!();
    }

    let mut simulator = build_simulator(&settings).context("Failed to initialize simulation")?;

    println!("{}", ColorOutput::info(&format!(
        "🔄 Starting {}x{} simulation ({}{})",
        settings.simulation.grid_size,
        settings.simulation.grid_size,
        settings.simulation.pattern,
        if simulator.is_parallel() { ", parallel" } else { "" }
    )));

    let display = &settings.display;
    let interval = Duration::from_millis(display.interval_ms);
    let start_time = Instant::now();

    if display.show_frames {
        write_frame(out, &simulator, display.clear_screen)?;
    }

    while settings
        .simulation
        .generations
        .map_or(true, |limit| simulator.generation() < limit)
    {
        simulator.step();

        if display.show_frames {
            write_frame(out, &simulator, display.clear_screen)?;
            std::thread::sleep(interval);
        }
    }

    let elapsed_ms = start_time.elapsed().as_millis() as u64;
    let report = RunReport::from_simulator(&settings, &simulator, elapsed_ms);
    writeln!(out, "{}", report.render(settings.output.format)?)
        .context("Failed to write run summary")?;

    if simulator.grid().is_empty() {
        println!("{}", ColorOutput::warning("All cells died out"));
    }
    println!("{}", ColorOutput::success(&format!(
        "✅ Simulated {} generation(s)", simulator.generation()
    )));

    Ok(())
}

fn write_frame<W: Write>(out: &mut W, simulator: &Simulator, clear_screen: bool) -> Result<()> {
    let frame = GridFormatter::format_frame(simulator.generation(), simulator.grid(), clear_screen);
    out.write_all(frame.as_bytes()).context("Failed to write frame")?;
    out.flush().context("Failed to flush frame")?;
    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("🛠️  Writing configuration files..."));

    let config_path = default_config_path(&directory);
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    let presets_dir = directory.join("config/presets");

    let mut glider = Settings::default();
    glider.simulation.pattern = SeedPattern::Glider;
    glider.simulation.grid_size = 20;
    glider.display.interval_ms = 100;
    glider.to_file(&presets_dir.join("glider.yaml"))?;

    let mut gun = Settings::default();
    gun.simulation.pattern = SeedPattern::GosperGun;
    gun.simulation.grid_size = 60;
    gun.to_file(&presets_dir.join("gosper_gun.yaml"))?;

    println!("Created presets in: {}", presets_dir.display());
    println!("\n{}", ColorOutput::success("✅ Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit {}", config_path.display());
    println!("2. Run: cargo run -- run --config {}", config_path.display());

    Ok(())
}
