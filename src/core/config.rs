// Runtime parameters for the background field and the scroll tracker.
//
// Defaults come from the constant tables; the web layer may override a few
// of them from `data-*` attributes on the canvas.

use super::constants::{SCROLL_EASE, SECTION_ACTIVATION_FRACTION};
use thiserror::Error;

pub const DEFAULT_MOBILE_BREAKPOINT: f32 = 768.0;
pub const DEFAULT_MOBILE_COUNT: usize = 50;
pub const DEFAULT_DESKTOP_COUNT: usize = 200;
// Upper bound for count overrides; the link pass is quadratic.
pub const MAX_PARTICLE_COUNT: usize = 2000;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown parameter `{0}`")]
    UnknownKey(String),
    #[error("invalid value `{value}` for `{key}`")]
    InvalidValue { key: String, value: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldParams {
    /// Viewports narrower than this use `mobile_count`.
    pub mobile_breakpoint: f32,
    pub mobile_count: usize,
    pub desktop_count: usize,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            mobile_breakpoint: DEFAULT_MOBILE_BREAKPOINT,
            mobile_count: DEFAULT_MOBILE_COUNT,
            desktop_count: DEFAULT_DESKTOP_COUNT,
        }
    }
}

impl FieldParams {
    pub const KEYS: [&'static str; 3] = ["desktop-count", "mobile-count", "breakpoint"];

    pub fn particle_count(&self, viewport_width: f32) -> usize {
        if viewport_width < self.mobile_breakpoint {
            self.mobile_count
        } else {
            self.desktop_count
        }
    }

    /// Apply a single `key=value` override, leaving `self` untouched on error.
    pub fn apply_override(&mut self, key: &str, raw: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            key: key.to_string(),
            value: raw.to_string(),
        };
        match key {
            "desktop-count" | "mobile-count" => {
                let n: usize = raw.trim().parse().map_err(|_| invalid())?;
                if n > MAX_PARTICLE_COUNT {
                    return Err(invalid());
                }
                if key == "desktop-count" {
                    self.desktop_count = n;
                } else {
                    self.mobile_count = n;
                }
            }
            "breakpoint" => {
                let v: f32 = raw.trim().parse().map_err(|_| invalid())?;
                if !v.is_finite() || v < 0.0 {
                    return Err(invalid());
                }
                self.mobile_breakpoint = v;
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollParams {
    pub ease: f32,
    pub activation_fraction: f32,
}

impl Default for ScrollParams {
    fn default() -> Self {
        Self {
            ease: SCROLL_EASE,
            activation_fraction: SECTION_ACTIVATION_FRACTION,
        }
    }
}
