//! Game balance tunables
//!
//! Loaded once at startup (defaults or a JSON document) and validated before
//! any world is built. Nothing here changes while a round is running.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Inclusive `[min, max]` range used for random platform parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: f32,
    pub max: f32,
}

impl Bounds {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }
}

/// Every number the simulation reads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Viewport ===
    pub viewport_width: f32,
    pub viewport_height: f32,

    // === Body ===
    pub gravity: f32,
    pub player_speed: f32,
    pub player_accel: f32,
    pub jump_velocity: f32,
    pub max_fall_speed: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub spawn_x: f32,
    pub spawn_y: f32,

    // === Ground ===
    pub ground_x: f32,
    pub ground_y: f32,
    pub ground_width: f32,
    pub ground_height: f32,

    // === Generation ===
    pub platform_height: f32,
    pub platform_width_range: Bounds,
    pub platform_gap_range: Bounds,
    pub platform_y_range: Bounds,
    /// Largest vertical step between consecutive platforms (either direction)
    pub platform_max_step: f32,
    pub fallback_last_y: f32,
    pub lookahead_distance: f32,
    pub cleanup_behind_distance: f32,

    // === Temporary platforms ===
    pub temp_platform_chance: f64,
    pub temp_platform_lifetime: f32,
    pub temp_platform_timer_start: f32,

    // === Round ===
    pub death_y: f32,
    pub lateral_death_y: f32,

    // === Camera ===
    pub camera_lead: f32,
    pub camera_smooth_rate: f32,
    pub score_unit: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,

            gravity: GRAVITY,
            player_speed: PLAYER_SPEED,
            player_accel: PLAYER_ACCEL,
            jump_velocity: PLAYER_JUMP_VELOCITY,
            max_fall_speed: MAX_FALL_SPEED,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            spawn_x: SPAWN_X,
            spawn_y: SPAWN_Y,

            ground_x: GROUND_X,
            ground_y: GROUND_Y,
            ground_width: GROUND_WIDTH,
            ground_height: GROUND_HEIGHT,

            platform_height: PLATFORM_HEIGHT,
            platform_width_range: Bounds::new(PLATFORM_MIN_WIDTH, PLATFORM_MAX_WIDTH),
            platform_gap_range: Bounds::new(PLATFORM_MIN_GAP, PLATFORM_MAX_GAP),
            platform_y_range: Bounds::new(PLATFORM_MIN_Y, PLATFORM_MAX_Y),
            platform_max_step: PLATFORM_MAX_STEP,
            fallback_last_y: FALLBACK_LAST_Y,
            lookahead_distance: GEN_AHEAD,
            cleanup_behind_distance: CLEANUP_BEHIND,

            temp_platform_chance: TEMP_PLATFORM_CHANCE,
            temp_platform_lifetime: TEMP_PLATFORM_LIFETIME,
            temp_platform_timer_start: TEMP_PLATFORM_TIMER_START,

            death_y: DEATH_Y,
            lateral_death_y: LATERAL_DEATH_Y,

            camera_lead: CAMERA_LEAD,
            camera_smooth_rate: CAMERA_SMOOTH_RATE,
            score_unit: SCORE_UNIT,
        }
    }
}

impl Tuning {
    /// Parse a JSON document (missing fields take their defaults) and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject configurations the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scalars: [(&'static str, f32); 27] = [
            ("viewport_width", self.viewport_width),
            ("viewport_height", self.viewport_height),
            ("gravity", self.gravity),
            ("player_speed", self.player_speed),
            ("player_accel", self.player_accel),
            ("jump_velocity", self.jump_velocity),
            ("max_fall_speed", self.max_fall_speed),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("spawn_x", self.spawn_x),
            ("spawn_y", self.spawn_y),
            ("ground_x", self.ground_x),
            ("ground_y", self.ground_y),
            ("ground_width", self.ground_width),
            ("ground_height", self.ground_height),
            ("platform_height", self.platform_height),
            ("platform_max_step", self.platform_max_step),
            ("fallback_last_y", self.fallback_last_y),
            ("lookahead_distance", self.lookahead_distance),
            ("cleanup_behind_distance", self.cleanup_behind_distance),
            ("temp_platform_lifetime", self.temp_platform_lifetime),
            ("temp_platform_timer_start", self.temp_platform_timer_start),
            ("death_y", self.death_y),
            ("lateral_death_y", self.lateral_death_y),
            ("camera_lead", self.camera_lead),
            ("camera_smooth_rate", self.camera_smooth_rate),
            ("score_unit", self.score_unit),
        ];
        for (field, value) in scalars {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
        }
        if !self.temp_platform_chance.is_finite() {
            return Err(ConfigError::NonFinite {
                field: "temp_platform_chance",
            });
        }

        let ranges = [
            ("platform_width_range", self.platform_width_range),
            ("platform_gap_range", self.platform_gap_range),
            ("platform_y_range", self.platform_y_range),
        ];
        for (field, range) in ranges {
            if !range.min.is_finite() || !range.max.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
            if range.min > range.max {
                return Err(ConfigError::InvertedRange {
                    field,
                    min: range.min as f64,
                    max: range.max as f64,
                });
            }
        }

        let positive = [
            ("viewport_width", self.viewport_width),
            ("viewport_height", self.viewport_height),
            ("max_fall_speed", self.max_fall_speed),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("platform_height", self.platform_height),
            ("platform_width_range.min", self.platform_width_range.min),
            ("score_unit", self.score_unit),
        ];
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::OutOfRange {
                    field,
                    value: value as f64,
                    expected: "> 0",
                });
            }
        }

        let non_negative = [
            ("player_speed", self.player_speed),
            ("player_accel", self.player_accel),
            ("jump_velocity", self.jump_velocity),
            ("platform_gap_range.min", self.platform_gap_range.min),
            ("platform_max_step", self.platform_max_step),
            ("lookahead_distance", self.lookahead_distance),
            ("cleanup_behind_distance", self.cleanup_behind_distance),
            ("temp_platform_lifetime", self.temp_platform_lifetime),
            ("temp_platform_timer_start", self.temp_platform_timer_start),
            ("camera_smooth_rate", self.camera_smooth_rate),
        ];
        for (field, value) in non_negative {
            if value < 0.0 {
                return Err(ConfigError::OutOfRange {
                    field,
                    value: value as f64,
                    expected: ">= 0",
                });
            }
        }

        if !(0.0..=1.0).contains(&self.temp_platform_chance) {
            return Err(ConfigError::OutOfRange {
                field: "temp_platform_chance",
                value: self.temp_platform_chance,
                expected: "0..=1",
            });
        }

        // A side hit parks the body here; it has to read as dead
        if self.lateral_death_y <= self.death_y {
            return Err(ConfigError::OutOfRange {
                field: "lateral_death_y",
                value: self.lateral_death_y as f64,
                expected: "> death_y",
            });
        }

        Ok(())
    }

    /// Camera x that puts the body at the configured lead position
    pub fn camera_target(&self, body_x: f32) -> f32 {
        body_x - self.viewport_width * self.camera_lead
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(Tuning::default().validate(), Ok(()));
    }

    #[test]
    fn test_inverted_width_range_rejected() {
        let tuning = Tuning {
            platform_width_range: Bounds::new(300.0, 60.0),
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::InvertedRange {
                field: "platform_width_range",
                ..
            })
        ));
    }

    #[test]
    fn test_negative_lifetime_rejected() {
        let tuning = Tuning {
            temp_platform_lifetime: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::OutOfRange {
                field: "temp_platform_lifetime",
                ..
            })
        ));
    }

    #[test]
    fn test_nan_rejected() {
        let tuning = Tuning {
            gravity: f32::NAN,
            ..Default::default()
        };
        assert_eq!(
            tuning.validate(),
            Err(ConfigError::NonFinite { field: "gravity" })
        );
    }

    #[test]
    fn test_chance_outside_unit_interval_rejected() {
        let tuning = Tuning {
            temp_platform_chance: 1.5,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_lateral_death_must_be_below_death_line() {
        for lateral_death_y in [0.0, DEATH_Y] {
            let tuning = Tuning {
                lateral_death_y,
                ..Default::default()
            };
            assert!(matches!(
                tuning.validate(),
                Err(ConfigError::OutOfRange {
                    field: "lateral_death_y",
                    expected: "> death_y",
                    ..
                })
            ));
        }
    }

    #[test]
    fn test_from_json_partial_document() {
        let tuning = Tuning::from_json(r#"{ "gravity": 1500.0, "temp_platform_chance": 0.5 }"#)
            .expect("valid document");
        assert_eq!(tuning.gravity, 1500.0);
        assert_eq!(tuning.temp_platform_chance, 0.5);
        assert_eq!(tuning.player_speed, PLAYER_SPEED);
    }

    #[test]
    fn test_from_json_rejects_bad_values() {
        let err = Tuning::from_json(r#"{ "platform_gap_range": { "min": 200.0, "max": 100.0 } }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvertedRange { .. }));

        let err = Tuning::from_json("not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
