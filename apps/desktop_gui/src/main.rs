mod backend_bridge;
mod controller;
mod ui;

use backend_bridge::commands::BackendCommand;
use clap::Parser;
use controller::events::UiEvent;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;
use ui::{StartupConfig, WorldFormApp};

#[derive(Parser, Debug)]
#[command(name = "mindcraft", about = "Describe a world or roll a random one, then start the adventure")]
struct Args {
    /// Base URL of the world generation service.
    #[arg(long, env = "MINDCRAFT_API_BASE_URL", default_value = client_core::DEFAULT_API_BASE_URL)]
    api_base_url: String,
    /// Prefill the hero name field.
    #[arg(long, default_value = "")]
    player_name: String,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = Args::parse();
    tracing::info!(api_base_url = %args.api_base_url, "starting MindCraft world form");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    backend_bridge::runtime::launch(cmd_rx, ui_tx, args.api_base_url.clone());

    let startup = StartupConfig {
        api_base_url: args.api_base_url,
        player_name: args.player_name,
    };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("MindCraft")
            .with_inner_size([1080.0, 720.0])
            .with_min_inner_size([760.0, 520.0]),
        ..Default::default()
    };
    eframe::run_native(
        "MindCraft",
        options,
        Box::new(move |_cc| Ok(Box::new(WorldFormApp::bootstrap(cmd_tx, ui_rx, startup)))),
    )
}
