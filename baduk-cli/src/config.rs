use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use baduk_engine::{AlphaBeta, Engine, RandomEngine, Stone};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    AlphaBeta,
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    White,
}

impl From<Color> for Stone {
    fn from(color: Color) -> Stone {
        match color {
            Color::Black => Stone::Black,
            Color::White => Stone::White,
        }
    }
}

/// Runtime configuration. Every field has a default, so a config file may
/// set any subset of them.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Search depth for the alpha-beta engine.
    pub depth: u8,
    /// Engine the human plays against; first engine in `compare`.
    pub engine: EngineKind,
    /// Second engine in `compare`.
    pub opponent: EngineKind,
    /// Color the human takes in `play`.
    pub human: Color,
    /// Move cap per game in `compare`.
    pub max_moves: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            depth: 4,
            engine: EngineKind::AlphaBeta,
            opponent: EngineKind::Random,
            human: Color::Black,
            max_moves: 200,
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Config::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("parsing config file {}", path.display()))
    }

    pub fn build_engine(&self, kind: EngineKind) -> Box<dyn Engine> {
        match kind {
            EngineKind::AlphaBeta => Box::new(AlphaBeta::with_depth(self.depth)),
            EngineKind::Random => Box::new(RandomEngine::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_config_parses() {
        let config: Config = serde_json::from_str(
            r#"{
                "depth": 3,
                "engine": "alphabeta",
                "opponent": "random",
                "human": "white",
                "max_moves": 120
            }"#,
        )
        .unwrap();
        assert_eq!(config.depth, 3);
        assert_eq!(config.engine, EngineKind::AlphaBeta);
        assert_eq!(config.opponent, EngineKind::Random);
        assert_eq!(config.human, Color::White);
        assert_eq!(config.max_moves, 120);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config: Config = serde_json::from_str(r#"{"depth": 2}"#).unwrap();
        assert_eq!(config.depth, 2);
        assert_eq!(config.human, Color::Black);
        assert_eq!(config.max_moves, 200);
    }

    #[test]
    fn no_file_means_defaults() {
        let config = Config::load(None).unwrap();
        assert_eq!(config.depth, 4);
    }
}
