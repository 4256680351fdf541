use anyhow::Result;
use kanterm::{config::GlobalConfig, logging, tui};

fn main() -> Result<()> {
    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();

    if matches!(args.get(1).map(|s| s.as_str()), Some("-h" | "--help")) {
        print_usage();
        return Ok(());
    }

    let config_result = GlobalConfig::load();

    // Logging goes to a file; keep the guard alive until exit so lines are flushed
    let _log_guard = GlobalConfig::data_dir()
        .and_then(|dir| logging::init(&dir))
        .ok();

    match GlobalConfig::ensure_default() {
        Ok(true) => tracing::info!("Wrote default config"),
        Ok(false) => {}
        Err(e) => tracing::warn!("Could not write default config: {:#}", e),
    }

    let mut config = config_result.unwrap_or_else(|e| {
        tracing::warn!("Using default config: {:#}", e);
        GlobalConfig::default()
    });

    // Optional positional argument overrides the board file
    if let Some(path) = args.get(1) {
        config = config.with_board_file(path);
    }

    tracing::info!(
        board = %config.board_file.display(),
        backup = %config.backup_file.display(),
        "Starting kanterm"
    );

    let mut app = tui::App::new(&config)?;
    app.run()?;

    Ok(())
}

fn print_usage() {
    println!("kanterm - terminal kanban board");
    println!();
    println!("Usage: kanterm [BOARD_FILE]");
    println!();
    println!("  BOARD_FILE  board file to open (default: board.json in the current directory)");
    println!();
    println!("Config: ~/.config/kanterm/config.toml   Logs: set KANTERM_LOG=debug");
}
