//! Gate configuration from build-time environment variables with an optional
//! runtime override read from `window.VENUE_CONFIG` in the browser, so static
//! deployments can tune the customer wait policy without rebuilding.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use crate::error::GateError;

const TIMEOUT_KEY: &str = "VENUE_CUSTOMER_AUTH_TIMEOUT_MS";

/// Tunables for the route gates.
///
/// The default waits indefinitely for the customer provider to resolve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GateConfig {
    /// How long `CustomerAuthGate` may stay in its loading state before it
    /// treats the visitor as unauthenticated. `None` waits forever.
    pub customer_wait_timeout: Option<Duration>,
}

impl GateConfig {
    /// Loads config from the build-time environment and applies runtime overrides.
    ///
    /// Unparsable values are logged and ignored.
    pub fn load() -> Self {
        let mut config = Self::default();
        if let Some(raw) = option_env!("VENUE_CUSTOMER_AUTH_TIMEOUT_MS") {
            config.apply_timeout(raw);
        }
        if let Some(raw) = runtime_timeout_ms() {
            config.apply_timeout(&raw);
        }
        config
    }

    /// Parses a millisecond timeout. Blank input yields `Ok(None)` and so
    /// does `0`, which disables the timeout.
    pub fn parse_timeout_ms(raw: &str) -> Result<Option<Duration>, GateError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        let ms: u64 = trimmed.parse().map_err(|_| GateError::InvalidConfig {
            key: TIMEOUT_KEY,
            value: trimmed.to_owned(),
        })?;
        Ok((ms > 0).then(|| Duration::from_millis(ms)))
    }

    fn apply_timeout(&mut self, raw: &str) {
        if raw.trim().is_empty() {
            return;
        }
        match Self::parse_timeout_ms(raw) {
            Ok(timeout) => self.customer_wait_timeout = timeout,
            Err(err) => log::warn!("ignoring config override: {err}"),
        }
    }
}

#[cfg(feature = "hydrate")]
fn runtime_timeout_ms() -> Option<String> {
    use js_sys::Reflect;
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("VENUE_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let value = Reflect::get(&config, &JsValue::from_str("customer_auth_timeout_ms")).ok()?;
    value
        .as_string()
        .or_else(|| value.as_f64().map(|ms| format!("{}", ms.max(0.0).trunc())))
}

#[cfg(not(feature = "hydrate"))]
fn runtime_timeout_ms() -> Option<String> {
    None
}
