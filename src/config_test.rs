use super::*;

#[test]
fn default_waits_indefinitely() {
    assert_eq!(GateConfig::default().customer_wait_timeout, None);
}

#[test]
fn parse_timeout_ms_trims_and_accepts_millis() {
    assert_eq!(
        GateConfig::parse_timeout_ms("  1500 "),
        Ok(Some(Duration::from_millis(1500)))
    );
}

#[test]
fn parse_timeout_ms_treats_blank_and_zero_as_disabled() {
    assert_eq!(GateConfig::parse_timeout_ms(""), Ok(None));
    assert_eq!(GateConfig::parse_timeout_ms("   "), Ok(None));
    assert_eq!(GateConfig::parse_timeout_ms("0"), Ok(None));
}

#[test]
fn parse_timeout_ms_rejects_garbage() {
    assert_eq!(
        GateConfig::parse_timeout_ms("soon"),
        Err(GateError::InvalidConfig { key: TIMEOUT_KEY, value: "soon".to_owned() })
    );
    assert!(GateConfig::parse_timeout_ms("-5").is_err());
}

#[test]
fn apply_timeout_ignores_invalid_values() {
    let mut config = GateConfig { customer_wait_timeout: Some(Duration::from_secs(3)) };
    config.apply_timeout("nope");
    assert_eq!(config.customer_wait_timeout, Some(Duration::from_secs(3)));
    config.apply_timeout("  ");
    assert_eq!(config.customer_wait_timeout, Some(Duration::from_secs(3)));
}

#[test]
fn apply_timeout_overwrites_when_valid() {
    let mut config = GateConfig::default();
    config.apply_timeout("250");
    assert_eq!(config.customer_wait_timeout, Some(Duration::from_millis(250)));
    config.apply_timeout("0");
    assert_eq!(config.customer_wait_timeout, None);
}

#[test]
fn load_without_overrides_is_default() {
    if option_env!("VENUE_CUSTOMER_AUTH_TIMEOUT_MS").is_none() {
        assert_eq!(GateConfig::load(), GateConfig::default());
    }
}
