use std::io::Read;
use std::time::Duration;

use crate::request::DigestRequest;

/// Sends one request and returns the response head with a readable body.
///
/// The connection pool behind it belongs to the caller; the requester only
/// borrows it for the first send and the authenticated retry.
pub trait Transport {
    type Body: Read;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Send `request` as it currently stands. `timeout`, when set, bounds this
    /// single send.
    fn send(
        &self,
        request: &DigestRequest,
        timeout: Option<Duration>,
    ) -> Result<http::Response<Self::Body>, Self::Error>;
}

impl<T: Transport + ?Sized> Transport for &T {
    type Body = T::Body;
    type Error = T::Error;

    fn send(
        &self,
        request: &DigestRequest,
        timeout: Option<Duration>,
    ) -> Result<http::Response<Self::Body>, Self::Error> {
        (**self).send(request, timeout)
    }
}

#[cfg(feature = "blocking-client")]
impl Transport for reqwest::blocking::Client {
    type Body = reqwest::blocking::Response;
    type Error = reqwest::Error;

    /// User-info is stripped from the URL before sending; reqwest would
    /// otherwise turn it into a Basic `Authorization` header.
    fn send(
        &self,
        request: &DigestRequest,
        timeout: Option<Duration>,
    ) -> Result<http::Response<Self::Body>, Self::Error> {
        let url = request.url_without_credentials().into_owned();
        let mut builder = self
            .request(request.method().clone(), url)
            .headers(request.headers().clone());
        if let Some(body) = request.body() {
            builder = builder.body(body.to_vec());
        }
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let response = builder.send()?;

        let mut head = http::Response::new(());
        *head.status_mut() = response.status();
        *head.version_mut() = response.version();
        *head.headers_mut() = response.headers().clone();
        Ok(head.map(|()| response))
    }
}
