//! Application start-up around a settings service.

use crate::config::ConfigService;
use crate::Error;

/// Application context holding an initialized [`ConfigService`].
///
/// Building the context runs [`ConfigService::init`], so code holding an
/// `AppContext` can always read settings synchronously. A source that cannot
/// be loaded fails the build and should abort start-up.
///
/// ## Example
///
/// ```no_run
/// use boot_config::{AppContext, ConfigService};
///
/// # async fn run() -> Result<(), boot_config::Error> {
/// let ctx = AppContext::builder()
///     .with_config(
///         ConfigService::builder()
///             .with_endpoint("https://example.com/config.json")
///             .build(),
///     )
///     .build()
///     .await?;
///
/// let locale = ctx.config().setting("i18n", "locale")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct AppContext {
    config: ConfigService,
}

impl AppContext {
    /// Creates a new builder for constructing an `AppContext`.
    pub fn builder() -> AppContextBuilder<()> {
        AppContextBuilder { config: () }
    }

    pub fn config(&self) -> &ConfigService {
        &self.config
    }

    /// Hands the initialized service back, e.g. to share it behind an `Arc`.
    pub fn into_config(self) -> ConfigService {
        self.config
    }
}

/// Builder for constructing an [`AppContext`].
///
/// The builder starts without a service (`AppContextBuilder<()>`) and only
/// gains [`build`](AppContextBuilder::build) once
/// [`with_config`](AppContextBuilder::with_config) has attached one.
#[derive(Debug)]
#[must_use = "builders do nothing until .build() is called"]
pub struct AppContextBuilder<S> {
    config: S,
}

impl AppContextBuilder<()> {
    /// Attaches the settings service to initialize during start-up.
    pub fn with_config(self, config: ConfigService) -> AppContextBuilder<ConfigService> {
        AppContextBuilder { config }
    }
}

impl AppContextBuilder<ConfigService> {
    /// Initializes the attached service and builds the `AppContext`.
    ///
    /// Returns an error if the service's settings could not be loaded.
    pub async fn build(self) -> Result<AppContext, Error> {
        let mut config = self.config;
        config.init().await?;
        tracing::debug!("application context ready");
        Ok(AppContext { config })
    }
}
