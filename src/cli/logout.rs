//! Logout command implementation

use colored::Colorize;

use crate::cli::{CommandContext, GlobalOptions};
use crate::error::Result;

/// Run the logout command. Local only: the backend is not contacted.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let mut ctx = CommandContext::open(opts).await?;
    let was_logged_in = ctx.session.state().is_authenticated();

    ctx.session.logout(&ctx.client).await?;

    if was_logged_in {
        println!("{} Logged out", "✓".green());
    } else {
        println!("{} Not logged in", "○".dimmed());
    }

    Ok(())
}
