mod cli;
mod engine;
mod logging;
mod tui;
mod wordbank;

use cli::parse_cli;
use engine::GuessEngine;
use tui::TuiApp;
use wordbank::WordBank;

fn main() {
    logging::init();
    let cli = parse_cli();

    let bank = if let Some(word) = &cli.goal_word {
        WordBank::from_lines(word)
    } else if let Some(path) = &cli.wordbank_path {
        match WordBank::from_file(path) {
            Ok(bank) => bank,
            Err(e) => {
                eprintln!("Failed to load word bank from '{path}': {e}");
                std::process::exit(1);
            }
        }
    } else {
        WordBank::embedded()
    };

    let engine = match GuessEngine::new(bank) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Cannot start a game: {e}");
            std::process::exit(1);
        }
    };

    let mut app = match TuiApp::new(engine) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Failed to initialize terminal: {e}");
            std::process::exit(1);
        }
    };
    if let Err(e) = app.run() {
        eprintln!("Terminal error: {e}");
        std::process::exit(1);
    }
}
