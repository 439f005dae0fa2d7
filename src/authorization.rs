use std::fmt;

use http::HeaderValue;

use crate::computer::DigestContext;
use crate::error::Result;

/// A computed `Authorization: Digest ...` value.
///
/// Every directive is quoted, `nc` included (`nc="1"`). Strict RFC 2617 wants
/// `nc` as a bare eight-digit hex number; the quoted form is what existing
/// camera deployments have accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationHeader {
    username: String,
    realm: String,
    nonce: String,
    uri: String,
    cnonce: String,
    nc: String,
    qop: String,
    response: String,
}

impl AuthorizationHeader {
    pub fn from_context(ctx: &DigestContext<'_>) -> Self {
        Self {
            username: ctx.credential.username.clone(),
            realm: ctx.realm.to_owned(),
            nonce: ctx.nonce.to_owned(),
            uri: ctx.uri.to_owned(),
            cnonce: ctx.cnonce.to_owned(),
            nc: ctx.nonce_count().to_owned(),
            qop: ctx.qop.to_owned(),
            response: ctx.response(),
        }
    }

    /// Directive pairs in wire order.
    pub fn directives(&self) -> [(&'static str, &str); 8] {
        [
            ("username", self.username.as_str()),
            ("realm", self.realm.as_str()),
            ("nonce", self.nonce.as_str()),
            ("uri", self.uri.as_str()),
            ("cnonce", self.cnonce.as_str()),
            ("nc", self.nc.as_str()),
            ("qop", self.qop.as_str()),
            ("response", self.response.as_str()),
        ]
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    pub fn cnonce(&self) -> &str {
        &self.cnonce
    }

    pub fn to_header_value(&self) -> Result<HeaderValue> {
        Ok(HeaderValue::from_str(&self.to_string())?)
    }
}

impl fmt::Display for AuthorizationHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Digest ")?;
        for (i, (name, value)) in self.directives().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}=\"{}\"", name, quote(value))?;
        }
        Ok(())
    }
}

/// Backslash-escape `\` and `"` for a quoted-string.
fn quote(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
