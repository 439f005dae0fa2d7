//! Translation of console commands into camera API URLs.

use std::fmt;

use url::form_urlencoded;

use super::CliError;

/// Key prefixes the camera prints in `getConfig` output but rejects on input.
const SCRUBBED_PREFIXES: [&str; 2] = ["table.All.", "table."];

/// `configManager.cgi` action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    GetConfig,
    SetConfig,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::GetConfig => "getConfig",
            Action::SetConfig => "setConfig",
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyValue {
    pub key: String,
    pub value: String,
}

impl KeyValue {
    pub fn new<K: Into<String>, V: Into<String>>(key: K, value: V) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Split on the first `=` and trim both halves. The flag is true when an
    /// `=` was present, i.e. the command sets a value.
    pub fn parse(s: &str) -> (Self, bool) {
        match s.split_once('=') {
            Some((k, v)) => (Self::new(k.trim(), v.trim()), true),
            None => (Self::new(s.trim(), ""), false),
        }
    }
}

/// Strip the first matching table prefix from a property name.
pub fn scrub_key(key: &str) -> &str {
    SCRUBBED_PREFIXES
        .iter()
        .find_map(|prefix| key.strip_prefix(prefix))
        .unwrap_or(key)
}

/// Form-encode `params`, skipping pairs with an empty key.
pub fn encode_params(params: &[KeyValue]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for kv in params.iter().filter(|kv| !kv.key.is_empty()) {
        serializer.append_pair(&kv.key, &kv.value);
    }
    serializer.finish()
}

pub fn config_manager_url(host: &str, action: Action, params: &[KeyValue]) -> String {
    let url = format!("{}/cgi-bin/configManager.cgi?action={}", host, action);
    let extra = encode_params(params);
    if extra.is_empty() {
        url
    } else {
        format!("{}&{}", url, extra)
    }
}

/// Turn one console command into a request URL under `host`.
///
/// - `/path?query` is forwarded raw.
/// - `Name=Value` sets a property.
/// - `Name` reads a property.
pub fn command_to_url(host: &str, cmd: &str) -> Result<String, CliError> {
    if cmd.starts_with('/') {
        return Ok(format!("{}{}", host, cmd));
    }

    let (kv, set) = KeyValue::parse(cmd);
    if kv.key.is_empty() {
        return Err(CliError::EmptyKey);
    }

    let url = if set {
        config_manager_url(
            host,
            Action::SetConfig,
            &[KeyValue::new(scrub_key(&kv.key), kv.value)],
        )
    } else {
        config_manager_url(
            host,
            Action::GetConfig,
            &[KeyValue::new("name", scrub_key(&kv.key))],
        )
    };
    Ok(url)
}
