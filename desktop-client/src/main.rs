mod config;
mod observer;
mod state;
mod ui;

use clap::Parser;
use engine::config::ConfigManager;
use engine::game::{GameSession, SessionCommand};
use engine::{log, logger};
use tokio::sync::mpsc;

use config::Config;
use observer::SessionObserver;
use state::SharedState;
use ui::SnakeApp;

#[derive(Parser)]
#[command(name = "grid_snake_client")]
struct Args {
    /// Path to the YAML config; defaults apply when the file is absent.
    #[arg(long, default_value = "grid_snake.yaml")]
    config: String,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager: ConfigManager<Config> = ConfigManager::from_yaml_file(&args.config);
    let config = config_manager.get_config()?;
    let settings = config.to_settings();

    let seed: u64 = rand::random();
    let shared_state = SharedState::new();
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    let session = GameSession::new(settings, seed);
    let observer = SessionObserver::new(shared_state.clone());

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.spawn(session.run(observer, command_rx));

    log!(
        "starting on a {}x{} grid at {:?} (seed {})",
        settings.grid.extent,
        settings.grid.extent,
        settings.difficulty,
        seed
    );

    let canvas = settings.grid.canvas_size() as f32;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(egui::vec2(canvas + 20.0, canvas + 100.0))
            .with_resizable(false),
        ..Default::default()
    };

    let app = SnakeApp::new(shared_state, command_tx.clone(), settings);
    eframe::run_native("Grid Snake", options, Box::new(move |_cc| Ok(Box::new(app))))?;

    let _ = command_tx.send(SessionCommand::Quit);
    log!("shut down");
    Ok(())
}
