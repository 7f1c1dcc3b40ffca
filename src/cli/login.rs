//! Login command implementation

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};

use crate::cli::{CommandContext, GlobalOptions, progress};
use crate::config::Config;
use crate::error::Result;

/// Prompt for whichever credential was not given on the command line
pub fn credentials(
    username: Option<String>,
    password: Option<String>,
) -> Result<(String, String)> {
    let theme = ColorfulTheme::default();

    let username = match username {
        Some(username) => username,
        None => Input::<String>::with_theme(&theme)
            .with_prompt("Username")
            .interact_text()?,
    };
    let password = match password {
        Some(password) => password,
        None => Password::with_theme(&theme)
            .with_prompt("Password")
            .interact()?,
    };

    Ok((username, password))
}

/// Run the login command
///
/// An `--api-url` given here is remembered in the config file so later
/// commands talk to the same backend.
pub async fn run(
    opts: &GlobalOptions,
    username: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let mut ctx = CommandContext::open(opts).await?;
    let (username, password) = credentials(username, password)?;

    let spinner = progress::spinner("Logging in...");
    let result = ctx.session.login(&ctx.client, &username, &password).await;
    spinner.finish_and_clear();
    result?;

    if let Some(url) = opts.api_url_ref()
        && ctx.config.api_url.as_deref() != Some(url)
    {
        ctx.config.api_url = Some(url.to_string());
        ctx.config.save_to(&Config::resolve_path(opts.config_ref())?)?;
    }

    println!(
        "{} Logged in as {} at {}",
        "✓".green(),
        username.bold(),
        ctx.client.base_url().cyan()
    );

    Ok(())
}
