//! Status command implementation

use colored::Colorize;

use crate::cli::GlobalOptions;
use crate::config::Config;
use crate::error::Result;
use crate::session::{FileTokenStore, Session, SessionState};

/// Run the status command to display configuration and session status.
///
/// Reads local files only.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "promoadmin status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    let config = Config::load_from(&config_path)?;

    if config_path.exists() {
        println!("Config file: {}", config_path.display().to_string().cyan());
    } else {
        println!(
            "Config file: {} {}",
            config_path.display().to_string().cyan(),
            "(not found, using defaults)".dimmed()
        );
    }
    println!("API URL: {}", config.api_url(opts.api_url_ref()).cyan());
    println!("Base path: {}", display_base_path(&config.base_path()));
    println!();

    let store = FileTokenStore::in_dir(&Config::state_dir(opts.config_ref())?);
    let token_path = store.path().display().to_string();
    let mut session = Session::new(store);

    match session.resolve() {
        SessionState::Authenticated => {
            println!("{} Logged in (token at {})", "✓".green(), token_path);
        }
        SessionState::Unauthenticated | SessionState::Loading => {
            println!("{} Not logged in", "✗".red());
            println!("  → Run 'promoadmin login' to log in");
        }
    }

    println!();
    Ok(())
}

fn display_base_path(base_path: &str) -> &str {
    if base_path.is_empty() { "/" } else { base_path }
}
