//! Command execution context
//!
//! Loads the config, resolves the session from the persisted token and
//! builds the API client with that token attached.

use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::PromoClient;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::route::{Admission, Route, guard};
use crate::session::{FileTokenStore, Session};

/// Context for command execution containing config, session, client and
/// output preferences.
pub struct CommandContext {
    /// Loaded configuration (defaults when no file exists)
    pub config: Config,
    /// Session resolved from the token store
    pub session: Session<FileTokenStore>,
    /// API client carrying the session token
    pub client: PromoClient,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Build a context whatever the session state.
    ///
    /// No request is sent; the persisted token alone decides whether the
    /// session counts as authenticated.
    pub async fn open(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?;
        let format = opts.resolve_format(&config);

        let mut session = Session::new(FileTokenStore::in_dir(&Config::state_dir(
            opts.config_ref(),
        )?));
        session.resolve();

        let client = PromoClient::new(config.api_url(opts.api_url_ref()))?;
        session.attach(&client).await;

        Ok(Self {
            config,
            session,
            client,
            format,
        })
    }

    /// Build a context for a command that needs a logged-in administrator.
    ///
    /// Runs the same guard as the console's promotion view.
    pub async fn authenticated(opts: &GlobalOptions) -> Result<Self> {
        let ctx = Self::open(opts).await?;

        match guard(Route::Promotions, ctx.session.state()) {
            Admission::Admit(_) => Ok(ctx),
            Admission::Redirect(_) | Admission::Wait => Err(Error::NotAuthenticated),
        }
    }

    /// Currency label for displayed prices
    pub fn currency(&self) -> &str {
        &self.config.preferences.currency
    }
}
