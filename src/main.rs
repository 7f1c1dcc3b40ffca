//! promoadmin - terminal administration console for restaurant promotions

use clap::{CommandFactory, Parser};

mod cli;
mod client;
mod config;
mod error;
mod flow;
mod models;
mod output;
mod route;
mod session;

use cli::{Cli, Commands, GlobalOptions, PromotionCommands};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// `--debug` raises the default filter; `RUST_LOG` still wins
fn init_logging(debug: bool) {
    let default_filter = if debug { "promoadmin=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let opts = GlobalOptions::from_cli(&cli);

    init_logging(opts.debug);
    log::debug!("Options: {:?}", opts);

    match cli.command {
        Commands::Login { username, password } => cli::login::run(&opts, username, password).await,
        Commands::Logout => cli::logout::run(&opts).await,
        Commands::Status => cli::status::run(&opts),
        Commands::Console { path } => cli::console::run(&opts, &path).await,
        Commands::Promotion(cmd) => match cmd {
            PromotionCommands::List => cli::promotion::list(&opts).await,
            PromotionCommands::Get { id } => cli::promotion::get(&opts, &id).await,
            PromotionCommands::Preview { id, output } => {
                cli::promotion::preview(&opts, &id, output.as_deref()).await
            }
            PromotionCommands::Create { name, meals } => {
                cli::promotion::create(&opts, name, meals).await
            }
            PromotionCommands::Edit {
                id,
                name,
                meals,
                publish,
            } => cli::promotion::edit(&opts, &id, name, meals, publish).await,
            PromotionCommands::Delete { id, yes } => {
                cli::promotion::delete(&opts, &id, yes).await
            }
        },
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
        Commands::Version => {
            println!("promoadmin version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
