//! Configuration builders and loading.

use std::fs;
use std::path::Path;

use extrapolation_spi::{Configuration, ExtrapolationError, Method};
use thiserror::Error;

/// Errors raised while loading a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse a configuration from JSON. Missing fields take their defaults.
pub fn from_json_str(json: &str) -> Result<Configuration, ConfigError> {
    Ok(serde_json::from_str(json)?)
}

/// Load a JSON configuration file.
pub fn from_path(path: impl AsRef<Path>) -> Result<Configuration, ConfigError> {
    let contents = fs::read_to_string(path)?;
    from_json_str(&contents)
}

/// Builder for [`Configuration`].
#[derive(Debug, Default)]
pub struct ConfigurationBuilder {
    x_label: Option<String>,
    y_label: Option<String>,
    method: Option<Method>,
    method_name: Option<String>,
    subset_size: Option<usize>,
    target_x: Option<f64>,
}

impl ConfigurationBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_config(config: &Configuration) -> Self {
        Self {
            x_label: Some(config.x_label.clone()),
            y_label: Some(config.y_label.clone()),
            method: Some(config.method),
            method_name: None,
            subset_size: Some(config.subset_size),
            target_x: config.target_x,
        }
    }

    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = Some(label.into());
        self
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self.method_name = None;
        self
    }

    /// Set the method from user text; parsed in [`build`](Self::build).
    pub fn method_name(mut self, name: impl Into<String>) -> Self {
        self.method_name = Some(name.into());
        self.method = None;
        self
    }

    pub fn subset_size(mut self, size: usize) -> Self {
        self.subset_size = Some(size);
        self
    }

    pub fn target_x(mut self, target_x: f64) -> Self {
        self.target_x = Some(target_x);
        self
    }

    /// Build the configuration.
    ///
    /// Fails with `UnknownMethod` if a method name was given that does not parse.
    pub fn build(self) -> Result<Configuration, ExtrapolationError> {
        let defaults = Configuration::default();
        let method = match self.method_name {
            Some(name) => name.parse()?,
            None => self.method.unwrap_or(defaults.method),
        };

        Ok(Configuration {
            x_label: self.x_label.unwrap_or(defaults.x_label),
            y_label: self.y_label.unwrap_or(defaults.y_label),
            method,
            subset_size: self.subset_size.unwrap_or(defaults.subset_size),
            target_x: self.target_x.or(defaults.target_x),
        })
    }
}
