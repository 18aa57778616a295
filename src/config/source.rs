//! Source address resolution.

/// Address used when no source address is configured.
pub const DEFAULT_SOURCE: &str = "/config.json";

/// Resolves where the settings document lives.
///
/// Implementations must be pure: the same loader always resolves the same
/// address for the same construction-time state. Implement this trait to
/// compute the address dynamically, e.g. per deployment environment.
pub trait ConfigLoader: Send + Sync + std::fmt::Debug {
    fn resolve_source(&self) -> String;
}

/// A loader that always resolves one fixed address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticLoader {
    address: String,
}

impl StaticLoader {
    /// Creates a loader for `address`.
    ///
    /// An empty address falls back to [`DEFAULT_SOURCE`].
    pub fn new(address: impl Into<String>) -> Self {
        let address = address.into();
        if address.is_empty() {
            return Self::default();
        }
        Self { address }
    }

    pub fn address(&self) -> &str {
        &self.address
    }
}

impl Default for StaticLoader {
    fn default() -> Self {
        Self {
            address: DEFAULT_SOURCE.to_string(),
        }
    }
}

impl ConfigLoader for StaticLoader {
    fn resolve_source(&self) -> String {
        self.address.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_address() {
        assert_eq!(StaticLoader::default().resolve_source(), "/config.json");
    }

    #[test]
    fn test_empty_address_uses_default() {
        assert_eq!(StaticLoader::new("").resolve_source(), DEFAULT_SOURCE);
    }

    #[test]
    fn test_custom_address() {
        let loader = StaticLoader::new("https://cdn.example.com/settings.json");
        assert_eq!(loader.address(), "https://cdn.example.com/settings.json");
        assert_eq!(
            loader.resolve_source(),
            "https://cdn.example.com/settings.json"
        );
    }

    #[test]
    fn test_custom_loader_behind_trait_object() {
        #[derive(Debug)]
        struct Versioned(u32);

        impl ConfigLoader for Versioned {
            fn resolve_source(&self) -> String {
                format!("/config.v{}.json", self.0)
            }
        }

        let loader: Box<dyn ConfigLoader> = Box::new(Versioned(3));
        assert_eq!(loader.resolve_source(), "/config.v3.json");
    }
}
