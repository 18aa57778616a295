use url::Url;

use super::service::ConfigService;
use super::source::{ConfigLoader, StaticLoader};
use super::transport::{HttpTransport, Transport};

/// Builder for a [`ConfigService`].
///
/// The default loader resolves the relative address `/config.json`, which
/// the default HTTP transport can only fetch once it knows the application's
/// origin. Set it with [`with_base_url`](Self::with_base_url), or use an
/// absolute endpoint. Without either, `init` fails with
/// [`SourceUnreachable`](super::ConfigError::SourceUnreachable) and sends no
/// request.
///
/// ```no_run
/// use boot_config::ConfigService;
/// use url::Url;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let mut config = ConfigService::builder()
///     .with_base_url(Url::parse("http://localhost:8000")?)
///     .build();
/// config.init().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
#[must_use = "builders do nothing until .build() is called"]
pub struct ConfigServiceBuilder {
    loader: Option<Box<dyn ConfigLoader>>,
    transport: Option<Box<dyn Transport>>,
    base_url: Option<Url>,
}

impl ConfigServiceBuilder {
    /// Sets the loader that resolves the source address.
    ///
    /// Replaces any address set with [`with_endpoint`](Self::with_endpoint).
    pub fn with_loader(mut self, loader: impl ConfigLoader + 'static) -> Self {
        self.loader = Some(Box::new(loader));
        self
    }

    /// Fetches settings from a fixed address.
    ///
    /// Shorthand for `with_loader(StaticLoader::new(address))`.
    pub fn with_endpoint(self, address: impl Into<String>) -> Self {
        self.with_loader(StaticLoader::new(address))
    }

    pub fn with_transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Box::new(transport));
        self
    }

    /// Sets the origin relative addresses are fetched from.
    ///
    /// Applies to the default HTTP transport only; a transport passed to
    /// [`with_transport`](Self::with_transport) keeps its own settings.
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    pub fn build(self) -> ConfigService {
        let loader = self
            .loader
            .unwrap_or_else(|| Box::new(StaticLoader::default()));
        let base_url = self.base_url;
        let transport = self.transport.unwrap_or_else(|| {
            let http = HttpTransport::new();
            Box::new(match base_url {
                Some(base_url) => http.with_base_url(base_url),
                None => http,
            })
        });
        ConfigService::new(loader, transport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::env::EnvLoader;
    use crate::config::service::LoadState;
    use crate::config::ConfigError;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_defaults() {
        let config = ConfigServiceBuilder::default().build();

        assert_eq!(config.loader().resolve_source(), "/config.json");
        assert_eq!(config.state(), LoadState::Uninitialized);
    }

    #[test]
    fn test_with_endpoint() {
        let config = ConfigService::builder()
            .with_endpoint("https://example.com/app.json")
            .build();

        assert_eq!(
            config.loader().resolve_source(),
            "https://example.com/app.json"
        );
    }

    #[test]
    fn test_custom_loader() {
        let config = ConfigService::builder()
            .with_loader(
                EnvLoader::from_lookup("APP_CONFIG_SOURCE", |_| None)
                    .with_fallback("/fallback.json"),
            )
            .build();

        assert_eq!(config.loader().resolve_source(), "/fallback.json");
    }

    #[test]
    fn test_last_loader_wins() {
        let config = ConfigService::builder()
            .with_endpoint("/first.json")
            .with_loader(StaticLoader::new("/second.json"))
            .build();

        assert_eq!(config.loader().resolve_source(), "/second.json");
    }

    #[tokio::test]
    async fn test_relative_default_needs_base_url() {
        let mut config = ConfigService::builder().build();

        assert!(matches!(
            config.init().await,
            Err(ConfigError::SourceUnreachable)
        ));
        assert_eq!(config.state(), LoadState::Failed);
    }

    #[tokio::test]
    async fn test_default_address_with_base_url() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/config.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"i18n":{"locale":"en"}}"#))
            .expect(1)
            .mount(&server)
            .await;

        let mut config = ConfigService::builder()
            .with_base_url(Url::parse(&server.uri()).unwrap())
            .build();
        config.init().await.unwrap();

        assert_eq!(config.setting("i18n", "locale").unwrap(), "en");
    }
}
