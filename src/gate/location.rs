//! Requested-location capture and post-login return targets.

#[cfg(test)]
#[path = "location_test.rs"]
mod location_test;

use serde::{Deserialize, Serialize};

/// The location a visitor tried to reach before being sent to a login page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestedLocation {
    pub pathname: String,
    /// Query string including the leading `?`, or empty.
    #[serde(default)]
    pub search: String,
    /// Fragment including the leading `#`, or empty.
    #[serde(default)]
    pub hash: String,
}

impl RequestedLocation {
    pub fn new(pathname: impl Into<String>, search: impl Into<String>, hash: impl Into<String>) -> Self {
        Self { pathname: pathname.into(), search: search.into(), hash: hash.into() }
    }

    /// Splits a relative href into path, query and fragment.
    pub fn from_href(href: &str) -> Self {
        let (rest, hash) = match href.find('#') {
            Some(idx) => (&href[..idx], &href[idx..]),
            None => (href, ""),
        };
        let (pathname, search) = match rest.find('?') {
            Some(idx) => (&rest[..idx], &rest[idx..]),
            None => (rest, ""),
        };
        Self::new(pathname, search, hash)
    }

    pub fn href(&self) -> String {
        format!("{}{}{}", self.pathname, self.search, self.hash)
    }
}

/// Navigation state attached to a login redirect.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarriedState<T> {
    pub from: T,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CarriedFrom {
    Location(RequestedLocation),
    Path(String),
}

#[derive(Deserialize)]
struct AnyCarried {
    from: CarriedFrom,
}

/// Where a login flow should send the visitor after a successful sign-in.
///
/// Accepts the JSON state attached by either gate: a full location object
/// from `AuthGate` or a bare path from `CustomerAuthGate`. Anything missing,
/// malformed or not a same-origin absolute path yields `"/"`.
pub fn post_login_target(carried: Option<&str>) -> String {
    let Some(raw) = carried else {
        return "/".to_owned();
    };
    let target = match serde_json::from_str::<AnyCarried>(raw) {
        Ok(AnyCarried { from: CarriedFrom::Location(location) }) => location.href(),
        Ok(AnyCarried { from: CarriedFrom::Path(path) }) => path,
        Err(_) => return "/".to_owned(),
    };
    if is_local_path(&target) { target } else { "/".to_owned() }
}

fn is_local_path(target: &str) -> bool {
    let bytes = target.as_bytes();
    match bytes {
        [b'/'] => true,
        [b'/', second, ..] => *second != b'/' && *second != b'\\',
        _ => false,
    }
}
