//! Store configuration.

/// Configuration for a [`Store`](crate::Store)
///
/// # Example
///
/// ```
/// use statecraft_runtime::StoreConfig;
///
/// let config = StoreConfig::default().with_name("todos");
/// assert_eq!(config.name, "todos");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Name used in tracing spans and as the `store` metric label
    pub name: String,
}

impl StoreConfig {
    /// Create a configuration with the given store name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Set the store name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: "store".to_string(),
        }
    }
}
