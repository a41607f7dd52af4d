use std::fs::{self, File};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use canvas_snake::canvas::CellCanvas;
use canvas_snake::config::{Settings, default_log_path};
use canvas_snake::engine::Engine;
use canvas_snake::error::AppError;
use canvas_snake::game::Step;
use canvas_snake::grid::Grid;
use canvas_snake::input::{HostCommand, poll_command};
use canvas_snake::renderer;
use canvas_snake::terminal_runtime::{TerminalSession, install_panic_hook};
use canvas_snake::ui::hud::HudInfo;
use clap::Parser;
use log::{LevelFilter, info};
use simplelog::{Config, WriteLogger};

#[derive(Debug, Parser)]
#[command(version, about = "Snake on a fixed-size canvas, hosted in the terminal")]
struct Cli {
    /// Pixels per grid cell.
    #[arg(long)]
    cell_size: Option<u32>,

    /// Canvas side in pixels; must be a multiple of the cell size.
    #[arg(long)]
    canvas_size: Option<u32>,

    /// Host frames per simulation tick.
    #[arg(long)]
    frame_divisor: Option<u32>,

    /// Smallest frames-per-tick value reached by acceleration.
    #[arg(long)]
    min_frame_divisor: Option<u32>,

    /// Frames-per-tick decrease per food eaten (0 keeps the pace fixed).
    #[arg(long)]
    speedup_step: Option<u32>,

    /// Seed for reproducible food placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Host frame rate.
    #[arg(long)]
    fps: Option<u32>,

    /// Colour theme: classic, ocean or neon.
    #[arg(long)]
    theme: Option<String>,

    /// Settings file (JSON); defaults to the per-user config file.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Log file; defaults to the per-user data directory.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log every tick.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Applies CLI overrides on top of file settings.
    fn merge_into(&self, mut settings: Settings) -> Settings {
        if let Some(cell_size) = self.cell_size {
            settings.cell_size = cell_size;
        }
        if let Some(canvas_size) = self.canvas_size {
            settings.canvas_size = canvas_size;
        }
        if let Some(divisor) = self.frame_divisor {
            settings.frame_divisor = divisor;
        }
        if let Some(divisor) = self.min_frame_divisor {
            settings.min_frame_divisor = divisor;
        }
        if let Some(step) = self.speedup_step {
            settings.speedup_step = step;
        }
        if let Some(fps) = self.fps {
            settings.fps = fps;
        }
        if let Some(theme) = &self.theme {
            settings.theme.clone_from(theme);
        }
        settings.seed = self.seed.or(settings.seed);
        settings
    }
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    init_logger(&cli)?;

    let settings = cli.merge_into(Settings::load(cli.settings.as_deref())?);
    info!("starting with {settings:?}");

    install_panic_hook();
    run(&settings)
}

fn init_logger(cli: &Cli) -> Result<(), AppError> {
    let path = cli.log_file.clone().unwrap_or_else(default_log_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    WriteLogger::init(level, Config::default(), File::create(path)?)?;
    Ok(())
}

fn new_engine(settings: &Settings) -> Result<Engine<CellCanvas>, AppError> {
    let grid = Grid::new(settings.cell_size, settings.canvas_size)?;
    let canvas = CellCanvas::new(grid, settings.theme());
    Ok(Engine::with_settings(canvas, settings)?)
}

fn run(settings: &Settings) -> Result<(), AppError> {
    let mut engine = new_engine(settings)?;
    let mut session = TerminalSession::enter()?;
    let frame_interval = Duration::from_secs(1) / settings.fps.max(1);
    let mut paused = false;

    loop {
        let frame_start = Instant::now();

        if paused {
            engine.render();
        } else if let Some(Step::Ended(outcome)) = engine.play().step {
            info!("final score {} ({outcome:?})", engine.score());
        }

        let snapshot = engine.snapshot();
        let info = HudInfo {
            theme: settings.theme(),
            paused,
            frame_divisor: engine.pacing().divisor(),
        };
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, engine.surface(), &snapshot, &info))?;

        let deadline = frame_start + frame_interval;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                break;
            }
            let Some(command) = poll_command(remaining)? else {
                continue;
            };

            match command {
                HostCommand::Quit => return Ok(()),
                HostCommand::Pause if !engine.is_over() => paused = !paused,
                HostCommand::Pause => {}
                HostCommand::Restart if engine.is_over() => {
                    info!("restarting");
                    engine = new_engine(settings)?;
                    paused = false;
                }
                HostCommand::Restart => {}
                HostCommand::Key(key) if !paused => engine.control(&key),
                HostCommand::Key(_) => {}
            }
        }
    }
}
