//! Gomoku GUI
//!
//! A graphical interface for playing Gomoku against an agent, another
//! player, or watching two agents.

use clap::Parser;
use gomoku::logger::init_logger;
use gomoku::ui::{GameState, GomokuApp};
use gomoku::GameArgs;

#[derive(Parser, Debug)]
#[command(name = "gomoku", version, about = "Gomoku with minimax agents")]
struct Cli {
    #[command(flatten)]
    game: GameArgs,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logger(Some("gui".to_string()), cli.game.log_level);

    let config = cli.game.resolve()?;
    let state = GameState::new(config)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(|cc| Ok(Box::new(GomokuApp::new(cc, state)))),
    )?;
    Ok(())
}
