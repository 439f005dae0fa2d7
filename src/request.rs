use std::borrow::Cow;

use http::{HeaderMap, Method};
use percent_encoding::percent_decode_str;
use url::{Position, Url};

/// Username and password embedded in a target URL.
///
/// Both may be empty; an anonymous credential is still answered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

impl Credential {
    pub fn new<U: Into<String>, P: Into<String>>(username: U, password: P) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Percent-decoded user-info of `url`.
    pub fn from_url(url: &Url) -> Self {
        Self {
            username: decode(url.username()),
            password: url.password().map(decode).unwrap_or_default(),
        }
    }
}

fn decode(s: &str) -> String {
    percent_decode_str(s).decode_utf8_lossy().into_owned()
}

/// A request that can be sent, answered with a 401 and sent again.
///
/// The retry path writes the `Authorization` header into this same object, so
/// one instance must not be shared between concurrent sends.
#[derive(Debug, Clone)]
pub struct DigestRequest {
    method: Method,
    url: Url,
    headers: HeaderMap,
    body: Option<Vec<u8>>,
}

impl DigestRequest {
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    pub fn get(url: Url) -> Self {
        Self::new(Method::GET, url)
    }

    /// Attach a body; it is kept so the authenticated retry can replay it.
    pub fn with_body<B: Into<Vec<u8>>>(mut self, body: B) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    pub fn credential(&self) -> Credential {
        Credential::from_url(&self.url)
    }

    /// Path and query, as sent on the request line and hashed into HA2.
    pub fn request_uri(&self) -> &str {
        &self.url[Position::BeforePath..Position::AfterQuery]
    }

    /// The target URL with user-info removed, for putting on the wire.
    pub fn url_without_credentials(&self) -> Cow<'_, Url> {
        if self.url.username().is_empty() && self.url.password().is_none() {
            return Cow::Borrowed(&self.url);
        }
        let mut url = self.url.clone();
        // Only fails for URLs that cannot carry user-info in the first place.
        let _ = url.set_username("");
        let _ = url.set_password(None);
        Cow::Owned(url)
    }
}
