//! Init options for the code copy binder
//!
//! Every field is optional on the JS side; the defaults match the markup the
//! Hugo book theme renders (`<pre><code>…</code></pre>`).

use serde::{Deserialize, Serialize};

use crate::error::{BindError, BindResult};

pub const DEFAULT_CODE_SELECTOR: &str = "pre code";
pub const DEFAULT_CONTAINER_SELECTOR: &str = "pre";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct BinderConfig {
    /// Selects the code elements that receive a click handler
    pub code_selector: String,
    /// Ancestor whose full text is copied, resolved with `closest`
    pub container_selector: String,
    /// "error", "warn", "info", "debug" or "trace"
    pub log_level: String,
}

impl Default for BinderConfig {
    fn default() -> Self {
        Self {
            code_selector: DEFAULT_CODE_SELECTOR.to_string(),
            container_selector: DEFAULT_CONTAINER_SELECTOR.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl BinderConfig {
    /// Parse the configured log level
    pub fn level(&self) -> BindResult<log::Level> {
        self.log_level
            .parse::<log::Level>()
            .map_err(|_| BindError::InvalidConfig(format!("unknown log level '{}'", self.log_level)))
    }

    /// Reject options that would bind nothing meaningful
    pub fn validate(&self) -> BindResult<()> {
        if self.code_selector.trim().is_empty() {
            return Err(BindError::InvalidConfig("codeSelector is empty".to_string()));
        }
        if self.container_selector.trim().is_empty() {
            return Err(BindError::InvalidConfig("containerSelector is empty".to_string()));
        }
        self.level().map(|_| ())
    }

    /// Read options passed from JS. `undefined` and `null` give the defaults.
    pub fn from_js(value: wasm_bindgen::JsValue) -> BindResult<Self> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        let config: Self = serde_wasm_bindgen::from_value(value)
            .map_err(|e| BindError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
