//! Gobang entry point
//!
//! `gobang` opens the graphical board; `gobang play` runs the terminal game.

use anyhow::anyhow;
use clap::{Parser, Subcommand};

use gobang::engine::DEFAULT_DEPTH;
use gobang::ui::GobangApp;

/// Gobang: play five-in-a-row against a search engine
#[derive(Parser)]
#[command(name = "gobang")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the graphical board (the default)
    Gui,
    /// Play on the terminal
    Play {
        /// Search depth in plies
        #[arg(long, default_value_t = DEFAULT_DEPTH)]
        depth: u8,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Play { depth }) => gobang::cli::run(depth),
        Some(Commands::Gui) | None => run_gui(),
    }
}

fn run_gui() -> anyhow::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([760.0, 560.0])
            .with_title("Gobang"),
        ..Default::default()
    };

    eframe::run_native(
        "Gobang",
        options,
        Box::new(|cc| Ok(Box::new(GobangApp::new(cc)))),
    )
    .map_err(|err| anyhow!("failed to start the gui: {err}"))
}
