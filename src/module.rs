//! Plugin adapter for automation hosts.
//!
//! The host hands over a JSON argument document and expects a single JSON
//! result object on stdout. Arguments may be flat (`{"text": "..."}`) or
//! wrapped in the `ANSIBLE_MODULE_ARGS` envelope; check-mode is accepted
//! either as `check_mode` or `_ansible_check_mode`.
//!
//! Rendering has no side effects, so check mode still renders and only adds
//! a warning. `changed` is always false.

use crate::cow::{self, CowsayError};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::path::Path;

pub const CHECK_MODE_WARNING: &str = "Module 'cowsay' is running in 'check' mode";

const ENVELOPE_KEY: &str = "ANSIBLE_MODULE_ARGS";
const HOST_CHECK_MODE_KEY: &str = "_ansible_check_mode";

/// Parameters the host passes to the module.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ModuleArgs {
    pub text: String,
    #[serde(default)]
    pub check_mode: bool,
}

impl ModuleArgs {
    /// Parse a flat or enveloped argument document.
    ///
    /// The host's own check-mode flag is folded into `check_mode` before
    /// deserializing, so both spellings may appear side by side.
    pub fn from_json(doc: &str) -> Result<Self, CowsayError> {
        let mut value: Value = serde_json::from_str(doc)?;
        if let Some(inner) = value.as_object_mut().and_then(|obj| obj.remove(ENVELOPE_KEY)) {
            value = inner;
        }
        let host_check_mode = value
            .as_object_mut()
            .and_then(|obj| obj.remove(HOST_CHECK_MODE_KEY))
            .and_then(|flag| flag.as_bool())
            .unwrap_or(false);
        let mut args = ModuleArgs::deserialize(value)?;
        args.check_mode |= host_check_mode;
        Ok(args)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CowsayError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }
}

/// Result object reported back to the host.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ModuleResult {
    pub changed: bool,
    pub message: Vec<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub failed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl ModuleResult {
    pub fn failure(err: &CowsayError) -> Self {
        Self {
            failed: true,
            msg: Some(err.to_string()),
            ..Default::default()
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            json!({
                "changed": false,
                "failed": true,
                "msg": format!("Failed to serialize module result: {e}"),
            })
            .to_string()
        })
    }
}

/// Render the requested text and package the outcome for the host.
pub fn run_module(args: &ModuleArgs) -> ModuleResult {
    let mut warnings = Vec::new();
    if args.check_mode {
        tracing::warn!("{}", CHECK_MODE_WARNING);
        warnings.push(CHECK_MODE_WARNING.to_string());
    }
    match cow::render(&args.text) {
        Ok(message) => ModuleResult {
            message,
            warnings,
            ..Default::default()
        },
        Err(e) => {
            tracing::info!("cowsay failed: {}", e);
            ModuleResult {
                warnings,
                ..ModuleResult::failure(&e)
            }
        }
    }
}
