use std::path::Path;

use anyhow::{Context as _, Result};
use serde::Deserialize;

use gradfill_engine::host::Context;

/// Which control a scenario drives.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Deserialize)]
pub enum ControlKind {
    #[default]
    GradientFill,
    RadialGradientFill,
}

/// A scripted run: one control, mounted once, then fed `updates` in order.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub control: ControlKind,
    pub updates: Vec<Context>,
}

impl Scenario {
    pub fn from_json(src: &str) -> Result<Self> {
        let scenario: Self = serde_json::from_str(src).context("invalid scenario json")?;
        anyhow::ensure!(!scenario.updates.is_empty(), "scenario has no updates");
        Ok(scenario)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let src = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario {}", path.display()))?;
        Self::from_json(&src).with_context(|| format!("in {}", path.display()))
    }

    /// Scenario used when no file is given on the command line.
    pub fn builtin() -> Result<Self> {
        Self::from_json(include_str!("../scenarios/demo.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_scenario_parses() {
        let s = Scenario::builtin().unwrap();
        assert_eq!(s.control, ControlKind::GradientFill);
        assert_eq!(s.updates.len(), 3);
        assert!(s.updates[0].data_set().loading);
        assert_eq!(s.updates[2].parameters.control_width(), None);
        assert_eq!(s.updates[2].parameters.rotation(), Some(45.0));
    }

    #[test]
    fn control_defaults_to_gradient_fill() {
        let s = Scenario::from_json(r#"{ "updates": [{}] }"#).unwrap();
        assert_eq!(s.control, ControlKind::GradientFill);
    }

    #[test]
    fn empty_update_list_is_rejected() {
        let err = Scenario::from_json(r#"{ "control": "RadialGradientFill", "updates": [] }"#).unwrap_err();
        assert!(err.to_string().contains("no updates"));
    }

    #[test]
    fn unknown_control_is_rejected() {
        assert!(Scenario::from_json(r#"{ "control": "Sparkles", "updates": [{}] }"#).is_err());
    }
}
