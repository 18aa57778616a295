use super::source::{ConfigLoader, DEFAULT_SOURCE};

/// A loader that takes the source address from an environment variable.
///
/// The variable is read once, when the loader is built. When it is unset or
/// blank the fallback address is used instead. Surrounding whitespace is
/// trimmed from the variable's value.
#[derive(Debug, Clone)]
pub struct EnvLoader {
    var: String,
    value: Option<String>,
    fallback: String,
}

impl EnvLoader {
    pub fn new(var: impl Into<String>) -> Self {
        Self::from_lookup(var, |name| std::env::var(name).ok())
    }

    /// Builds the loader with `lookup` standing in for the process
    /// environment.
    pub fn from_lookup(
        var: impl Into<String>,
        lookup: impl FnOnce(&str) -> Option<String>,
    ) -> Self {
        let var = var.into();
        let value = lookup(&var)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());
        Self {
            var,
            value,
            fallback: DEFAULT_SOURCE.to_string(),
        }
    }

    /// Replaces the fallback address. An empty fallback is ignored.
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        let fallback = fallback.into();
        if !fallback.is_empty() {
            self.fallback = fallback;
        }
        self
    }

    pub fn var(&self) -> &str {
        &self.var
    }
}

impl ConfigLoader for EnvLoader {
    fn resolve_source(&self) -> String {
        self.value.clone().unwrap_or_else(|| self.fallback.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    fn lookup_in(vars: &[(&str, &str)]) -> impl FnOnce(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_reads_variable() {
        let loader = EnvLoader::from_lookup(
            "APP_CONFIG_SOURCE",
            lookup_in(&[("APP_CONFIG_SOURCE", "https://example.com/app.json")]),
        );
        assert_eq!(loader.var(), "APP_CONFIG_SOURCE");
        assert_eq!(loader.resolve_source(), "https://example.com/app.json");
    }

    #[test]
    fn test_address_fixed_at_construction() {
        let env = RefCell::new(HashMap::from([("APP_CONFIG_SOURCE", "/a.json")]));
        let loader = EnvLoader::from_lookup("APP_CONFIG_SOURCE", |name| {
            env.borrow().get(name).map(|v| v.to_string())
        });

        let first = loader.resolve_source();
        env.borrow_mut().insert("APP_CONFIG_SOURCE", "/b.json");
        let second = loader.resolve_source();

        assert_eq!(first, "/a.json");
        assert_eq!(second, "/a.json");
    }

    #[test]
    fn test_unset_variable_uses_default() {
        let loader = EnvLoader::from_lookup("APP_CONFIG_SOURCE", lookup_in(&[]));
        assert_eq!(loader.resolve_source(), "/config.json");
    }

    #[test]
    fn test_blank_variable_uses_fallback() {
        let loader = EnvLoader::from_lookup(
            "APP_CONFIG_SOURCE",
            lookup_in(&[("APP_CONFIG_SOURCE", "   ")]),
        )
        .with_fallback("/settings.json");
        assert_eq!(loader.resolve_source(), "/settings.json");
    }

    #[test]
    fn test_value_is_trimmed() {
        let loader = EnvLoader::from_lookup(
            "APP_CONFIG_SOURCE",
            lookup_in(&[("APP_CONFIG_SOURCE", " /x.json \n")]),
        );
        assert_eq!(loader.resolve_source(), "/x.json");
    }

    #[test]
    fn test_empty_fallback_ignored() {
        let loader =
            EnvLoader::from_lookup("APP_CONFIG_SOURCE", lookup_in(&[])).with_fallback("");
        assert_eq!(loader.resolve_source(), DEFAULT_SOURCE);
    }

    #[test]
    fn test_new_reads_process_environment() {
        // Only reads; nothing in the test suite sets this variable.
        let loader = EnvLoader::new("BOOT_CONFIG_TEST_SOURCE_UNSET");
        assert_eq!(loader.resolve_source(), DEFAULT_SOURCE);
    }
}
