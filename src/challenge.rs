use std::collections::HashMap;
use std::str::FromStr;

use http::{header::WWW_AUTHENTICATE, HeaderMap};
use log::trace;

use crate::error::{DigestError, Result};

/// Directive key under which the realm lands when the scheme word is left
/// attached to the first directive.
const MERGED_REALM_KEY: &str = "Digest realm";

/// How the leading auth-scheme token of a challenge is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Split on `,` and `=` only. The scheme word stays glued to the first
    /// directive name (`"Digest realm"`), and the realm is read from that key.
    /// Matches what deployed cameras have been answered with so far.
    #[default]
    Compatible,
    /// Strip the scheme token first so every directive is keyed by its own
    /// name, whatever order the server sends them in.
    SchemeAware,
}

/// Directives of one `WWW-Authenticate` challenge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    directives: HashMap<String, String>,
    mode: ParseMode,
}

impl Challenge {
    /// Parse a challenge in [`ParseMode::Compatible`] mode.
    pub fn parse(www_authenticate: &str) -> Result<Self> {
        Self::parse_with(www_authenticate, ParseMode::Compatible)
    }

    /// Parse a challenge value into its directive map.
    ///
    /// Segments without `=`, or whose value is not a valid quoted-string, are
    /// dropped. Fails with [`DigestError::EmptyChallenge`] when nothing is left.
    pub fn parse_with(www_authenticate: &str, mode: ParseMode) -> Result<Self> {
        let input = match mode {
            ParseMode::Compatible => www_authenticate,
            ParseMode::SchemeAware => strip_scheme(www_authenticate),
        };

        let mut directives = HashMap::new();
        for segment in input.split(',') {
            let Some((name, value)) = segment.trim().split_once('=') else {
                continue;
            };
            if let Some(value) = unquote(value) {
                directives.insert(name.to_owned(), value);
            }
        }
        trace!("parsed {} challenge directive(s)", directives.len());

        if directives.is_empty() {
            return Err(DigestError::EmptyChallenge {
                challenge: www_authenticate.to_owned(),
            });
        }
        Ok(Self { directives, mode })
    }

    /// Parse the first `WWW-Authenticate` header of a response.
    ///
    /// A missing header is treated as an empty challenge value.
    pub fn from_headers(headers: &HeaderMap, mode: ParseMode) -> Result<Self> {
        let raw = headers
            .get(WWW_AUTHENTICATE)
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
            .unwrap_or_default();
        Self::parse_with(&raw, mode)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.directives.get(name).map(String::as_str)
    }

    pub fn realm(&self) -> &str {
        let key = match self.mode {
            ParseMode::Compatible => MERGED_REALM_KEY,
            ParseMode::SchemeAware => "realm",
        };
        self.get(key).unwrap_or_default()
    }

    pub fn nonce(&self) -> &str {
        self.get("nonce").unwrap_or_default()
    }

    pub fn qop(&self) -> &str {
        self.get("qop").unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.directives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    pub fn directives(&self) -> &HashMap<String, String> {
        &self.directives
    }
}

impl FromStr for Challenge {
    type Err = DigestError;

    fn from_str(www_authenticate: &str) -> Result<Self> {
        Self::parse(www_authenticate)
    }
}

/// Drop a leading auth-scheme token (`Digest`, any case) and the whitespace
/// after it. Input whose first word is already a directive is returned as is.
fn strip_scheme(input: &str) -> &str {
    let input = input.trim_start();
    match input.split_once(|c: char| c.is_ascii_whitespace()) {
        Some((scheme, rest)) if !scheme.contains('=') && !scheme.contains(',') => rest,
        _ => input,
    }
}

/// RFC 2616 quoted-string unescaping.
///
/// The value must be wrapped in double quotes. Inside, `\` escapes the next
/// character and an unescaped `"` is invalid.
fn unquote(value: &str) -> Option<String> {
    let inner = value.strip_prefix('"')?.strip_suffix('"')?;
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push(chars.next()?),
            '"' => return None,
            _ => out.push(c),
        }
    }
    Some(out)
}
