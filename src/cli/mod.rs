//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod console;
pub mod context;
pub mod login;
pub mod logout;
pub mod progress;
pub mod prompt;
pub mod promotion;
pub mod status;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

use crate::flow::MealDraft;

/// promoadmin - terminal administration console for restaurant promotions
#[derive(Parser, Debug)]
#[command(name = "promoadmin")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "PROMOADMIN_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "PROMOADMIN_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Promotion backend URL
    #[arg(long, global = true, env = "PROMOADMIN_API_URL", hide_env = true)]
    pub api_url: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "PROMOADMIN_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and store the access token
    Login {
        /// Administrator username (prompted if omitted)
        #[arg(long, short = 'u')]
        username: Option<String>,

        /// Password (prompted if omitted)
        #[arg(long, env = "PROMOADMIN_PASSWORD", hide_env = true)]
        password: Option<String>,
    },

    /// Forget the stored access token
    Logout,

    /// Show configuration and session status
    Status,

    /// Open the interactive console
    Console {
        /// Console path to start at, e.g. /admin/login
        #[arg(default_value = "/")]
        path: String,
    },

    /// Manage promotions
    #[command(subcommand)]
    Promotion(PromotionCommands),

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   promoadmin completion bash > /etc/bash_completion.d/promoadmin
  zsh:    promoadmin completion zsh > \"${fpath[1]}/_promoadmin\"
  fish:   promoadmin completion fish > ~/.config/fish/completions/promoadmin.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Display version information
    Version,
}

/// Promotion management subcommands
#[derive(Subcommand, Debug)]
pub enum PromotionCommands {
    /// List all promotions
    List,

    /// Show one promotion with its meals
    Get {
        /// Promotion ID
        id: String,
    },

    /// Show or save the rendered promotion image
    Preview {
        /// Promotion ID
        id: String,

        /// Write an embedded image to this file
        #[arg(long, short = 'o')]
        output: Option<String>,
    },

    /// Create a promotion
    #[command(after_help = "\
Meals are given as NAME=PRICE[;DESCRIPTION[;ADDITIONALS]], e.g.
  promoadmin promotion create --name Lunch --meal 'Burger=12.50;Beef;fries'")]
    Create {
        /// Promotion name
        #[arg(long)]
        name: String,

        /// Meal, repeatable
        #[arg(long = "meal", required = true, value_parser = args::parse_meal_spec)]
        meals: Vec<MealDraft>,
    },

    /// Edit a promotion
    Edit {
        /// Promotion ID
        id: String,

        /// New promotion name
        #[arg(long)]
        name: Option<String>,

        /// Replace all meals, repeatable
        #[arg(long = "meal", value_parser = args::parse_meal_spec)]
        meals: Vec<MealDraft>,

        /// Publish the saved promotion to Facebook
        #[arg(long)]
        publish: bool,
    },

    /// Delete a promotion
    Delete {
        /// Promotion ID
        id: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_create_with_meals() {
        let cli = Cli::try_parse_from([
            "promoadmin",
            "promotion",
            "create",
            "--name",
            "Lunch",
            "--meal",
            "Burger=12.5",
            "--meal",
            "Soup=8;Tomato",
        ])
        .unwrap();

        match cli.command {
            Commands::Promotion(PromotionCommands::Create { name, meals }) => {
                assert_eq!(name, "Lunch");
                assert_eq!(meals.len(), 2);
                assert_eq!(meals[1].description, "Tomato");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_create_requires_a_meal() {
        assert!(Cli::try_parse_from(["promoadmin", "promotion", "create", "--name", "X"]).is_err());
    }

    #[test]
    fn test_bad_meal_spec_is_rejected() {
        let result = Cli::try_parse_from([
            "promoadmin",
            "promotion",
            "create",
            "--name",
            "X",
            "--meal",
            "Burger",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "promoadmin",
            "promotion",
            "list",
            "--format",
            "json",
            "--api-url",
            "http://backend:3000",
        ])
        .unwrap();

        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(cli.api_url.as_deref(), Some("http://backend:3000"));
    }
}
