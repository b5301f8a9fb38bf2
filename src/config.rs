//! Configuration to acknowledge user preferences as well as set defaults.
//!
//! Specifically, we try to find a ramify.toml, and if present we load settings
//! from there. This provides the snapshot location and quit behaviour.

use facet::Facet;
use std::fs;

#[derive(Facet, Clone)]
/// User preferences loaded from ramify.toml or falling back to defaults.
pub struct Config {
    #[facet(default = "outline.json".to_string())]
    /// Where the outline snapshot is read from and written to.
    pub snapshot: String,
    #[facet(default = true)]
    /// Write the snapshot automatically when quitting with 'q' or ':q'.
    pub autosave_on_quit: bool,
}

impl Config {
    #[must_use]
    /// Load configuration from ramify.toml if present.
    ///
    /// # Panics
    ///
    /// Panics if the default configuration cannot be parsed.
    pub fn load() -> Self {
        if let Ok(contents) = fs::read_to_string("ramify.toml") {
            if let Ok(config) = facet_toml::from_str::<Self>(&contents) {
                return config;
            }
        }
        facet_toml::from_str::<Self>("").unwrap()
    }
}
