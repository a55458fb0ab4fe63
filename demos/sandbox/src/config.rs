use glam::Vec2;
use physbox_engine::GameConfig;
use serde::de::Error as _;
use serde::{Deserialize, Serialize};

/// Tunables for the sandbox. Every field has a default, so a JSON document
/// only needs the keys it wants to change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    pub tick_rate: f32,
    pub world_width: f32,
    pub world_height: f32,
    /// Y-down: positive y pulls toward the floor.
    pub gravity: Vec2,
    pub title: String,
    /// Spawn radius after start-up and after every reset.
    pub initial_radius: f32,
    /// The wheel can never shrink the radius below this.
    pub min_radius: f32,
    /// Text rasterized onto labeled boxes.
    pub label_text: String,
    /// Typing exactly this word flips the background and title.
    /// Its letters are the only ones the watermark accepts.
    pub target_word: String,
    /// End of the line tool relative to the click.
    pub segment_offset: Vec2,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            tick_rate: 60.0,
            world_width: 800.0,
            world_height: 600.0,
            gravity: Vec2::new(0.0, 900.0),
            title: "2D Physics Sandbox".into(),
            initial_radius: 25.0,
            min_radius: 5.0,
            label_text: "Pusat".into(),
            target_word: "QRKLY".into(),
            segment_offset: Vec2::new(50.0, 0.0),
        }
    }
}

impl SandboxConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), serde_json::Error> {
        if !(self.tick_rate > 0.0) {
            return Err(serde_json::Error::custom("tick_rate must be positive"));
        }
        if !(self.min_radius > 3.0) {
            // Hollow circles cut a 3-unit ring out of the radius.
            return Err(serde_json::Error::custom("min_radius must be greater than 3"));
        }
        if self.initial_radius < self.min_radius {
            return Err(serde_json::Error::custom("initial_radius is below min_radius"));
        }
        if self.label_text.is_empty() {
            return Err(serde_json::Error::custom("label_text must not be empty"));
        }
        if self.segment_offset == Vec2::ZERO {
            return Err(serde_json::Error::custom("segment_offset must not be zero"));
        }
        if !self.target_word.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(serde_json::Error::custom("target_word must be uppercase ASCII letters"));
        }
        Ok(())
    }

    /// Engine settings derived from this config.
    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            tick_rate: self.tick_rate,
            world_width: self.world_width,
            world_height: self.world_height,
            gravity: self.gravity,
            title: self.title.clone(),
            ..GameConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = SandboxConfig::from_json(r#"{ "initial_radius": 40.0, "gravity": [0.0, 300.0] }"#)
            .unwrap();
        assert_eq!(config.initial_radius, 40.0);
        assert_eq!(config.gravity, Vec2::new(0.0, 300.0));
        assert_eq!(config.min_radius, 5.0);
        assert_eq!(config.label_text, "Pusat");
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(SandboxConfig::from_json("{}").unwrap(), SandboxConfig::default());
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(SandboxConfig::from_json(r#"{ "min_radius": 2.0 }"#).is_err());
        assert!(SandboxConfig::from_json(r#"{ "initial_radius": 4.0 }"#).is_err());
        assert!(SandboxConfig::from_json(r#"{ "tick_rate": 0.0 }"#).is_err());
        assert!(SandboxConfig::from_json(r#"{ "target_word": "qrkly" }"#).is_err());
        assert!(SandboxConfig::from_json("[1, 2]").is_err());
    }

    #[test]
    fn game_config_carries_world_settings() {
        let config = SandboxConfig {
            tick_rate: 30.0,
            ..SandboxConfig::default()
        };
        let game = config.game_config();
        assert_eq!(game.tick_rate, 30.0);
        assert_eq!(game.gravity, Vec2::new(0.0, 900.0));
        assert_eq!(game.world_width, 800.0);
    }
}
