use digest::Digest;
use md5::Md5;

use crate::challenge::Challenge;
use crate::request::Credential;

/// Nonce count sent with every response. Never incremented, even when a
/// server nonce is answered more than once.
pub const NONCE_COUNT: &str = "1";

/// Everything one authentication attempt hashes and echoes back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestContext<'a> {
    pub method: &'a str,
    pub uri: &'a str,
    pub credential: &'a Credential,
    pub realm: &'a str,
    pub nonce: &'a str,
    pub qop: &'a str,
    pub cnonce: &'a str,
}

impl<'a> DigestContext<'a> {
    pub fn new(
        method: &'a str,
        uri: &'a str,
        credential: &'a Credential,
        challenge: &'a Challenge,
        cnonce: &'a str,
    ) -> Self {
        Self {
            method,
            uri,
            credential,
            realm: challenge.realm(),
            nonce: challenge.nonce(),
            qop: challenge.qop(),
            cnonce,
        }
    }

    pub fn nonce_count(&self) -> &'static str {
        NONCE_COUNT
    }

    /// `H(username:realm:password)`
    pub fn ha1(&self) -> String {
        hex_digest::<Md5>(&[
            self.credential.username.as_str(),
            self.realm,
            self.credential.password.as_str(),
        ])
    }

    /// `H(method:uri)`
    pub fn ha2(&self) -> String {
        hex_digest::<Md5>(&[self.method, self.uri])
    }

    /// `H(HA1:nonce:nc:cnonce:qop:HA2)`
    pub fn response(&self) -> String {
        let ha1 = self.ha1();
        let ha2 = self.ha2();
        hex_digest::<Md5>(&[
            ha1.as_str(),
            self.nonce,
            NONCE_COUNT,
            self.cnonce,
            self.qop,
            ha2.as_str(),
        ])
    }
}

/// Hash `parts` joined by `:` and hex-encode the result.
pub fn hex_digest<T: Digest>(parts: &[&str]) -> String {
    let mut hasher = T::new();
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            hasher.update(":");
        }
        hasher.update(part);
    }
    hex::encode(hasher.finalize())
}
