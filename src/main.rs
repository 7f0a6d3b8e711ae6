/* 3rd party libraries */
use clap::Parser;
use crossbeam_channel as cbc;
use log::info;
use std::io;
use std::path::PathBuf;
use std::thread::Builder;

/* Custom libraries */
use elevator::Dispatcher;
use menu::Console;
use renderer::TerminalRenderer;
use shared::RenderEvent;

/* Modules */
mod config;
mod elevator;
mod menu;
mod menu_tests;
mod renderer;
mod shared;

#[derive(Parser, Debug)]
#[clap(about = "Single elevator dispatch simulation")]
struct Args {
    /// Path to the configuration file
    #[clap(long, short, default_value = "config.toml")]
    config: PathBuf,

    /// Number of floors, overrides the configuration file
    #[clap(long, short)]
    floors: Option<u8>,

    /// Pause between animation frames in milliseconds
    #[clap(long)]
    step_delay: Option<u64>,

    /// Print moves only, without drawing the shaft
    #[clap(long)]
    no_animation: bool,
}

/* Main */
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    // Load the configuration
    let mut config = unwrap_or_exit!(config::load_config(&args.config));
    if let Some(floors) = args.floors {
        config.elevator.n_floors = floors;
    }
    if let Some(step_delay) = args.step_delay {
        config.renderer.step_delay_ms = step_delay;
    }
    if args.no_animation {
        config.renderer.animate = false;
    }
    unwrap_or_exit!(config.validate());
    info!("Starting with {:?}", config);

    // Initialize channels
    let (render_tx, render_rx) = cbc::unbounded::<RenderEvent>();
    let (render_done_tx, render_done_rx) = cbc::unbounded::<()>();

    // Start the renderer
    let renderer = TerminalRenderer::new(
        &config.renderer,
        config.elevator.n_floors,
        io::stdout(),
        render_rx,
        render_done_tx,
    );
    let renderer_thread = unwrap_or_exit!(Builder::new()
        .name("renderer".into())
        .spawn(move || renderer.run()));

    // Run the menu on this thread
    let dispatcher = Dispatcher::new(&config.elevator, render_tx);
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout(), dispatcher, Some(render_done_rx));
    let result = console.run();
    info!("Shutting down in state {:?}", console.dispatcher().state());

    // Dropping the console closes the render channel and lets the renderer finish
    drop(console);
    if renderer_thread.join().is_err() {
        log::error!("Renderer thread panicked");
    }
    unwrap_or_exit!(result);
}
