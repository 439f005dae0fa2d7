use std::io::{self, Write};

use http::StatusCode;
use url::Url;

use super::command::command_to_url;
use super::output::{copy_body, report_error, report_get};
use super::CliError;
use crate::request::DigestRequest;
use crate::requester::DigestRequester;
use crate::transport::Transport;

const REDACTED_PASSWORD: &str = "xxxxx";

/// One camera host the console commands are run against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    url: Url,
    label: String,
}

impl Session {
    /// Parse a host as given on the command line, defaulting to `http://`.
    pub fn parse(host: &str) -> Result<Self, CliError> {
        let host = host.trim();
        if host.is_empty() {
            return Err(CliError::EmptyUrl);
        }

        let url = if host.starts_with("http://") || host.starts_with("https://") {
            Url::parse(host)
        } else {
            Url::parse(&format!("http://{}", host))
        };
        Ok(Self {
            url: url.map_err(|source| CliError::InvalidUrl {
                url: host.to_owned(),
                source,
            })?,
            label: authority(host).to_owned(),
        })
    }

    /// Parse a comma-separated host list. The first bad entry fails the list.
    pub fn parse_list(hosts: &str) -> Result<Vec<Self>, CliError> {
        hosts.split(',').map(Self::parse).collect()
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Host URL without a trailing slash, credentials included.
    pub fn base(&self) -> &str {
        self.url.as_str().trim_end_matches('/')
    }

    /// Host URL with the password masked, for display.
    pub fn redacted(&self) -> String {
        let mut url = self.url.clone();
        if url.password().is_some() {
            let _ = url.set_password(Some(REDACTED_PASSWORD));
        }
        url.as_str().trim_end_matches('/').to_owned()
    }

    /// `host[:port]` as typed, used to prefix output lines.
    pub fn host_label(&self) -> &str {
        &self.label
    }

    /// Run one console command against this host.
    ///
    /// Command failures are reported on `err` and do not stop the caller; a
    /// `200` body is copied line by line to `out`. Only a failure to write
    /// the report itself is returned.
    pub fn run_command<T: Transport>(
        &self,
        requester: &DigestRequester<T>,
        cmd: &str,
        prepend_host: bool,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> io::Result<()> {
        let host = self.redacted();

        let target = match command_to_url(self.base(), cmd) {
            Ok(target) => target,
            Err(e) => return report_error(err, &host, format_args!("CMD {}", e)),
        };
        if let Ok(shown) = command_to_url(&host, cmd) {
            report_get(err, &shown)?;
        }

        let url = match Url::parse(&target) {
            Ok(url) => url,
            Err(e) => return report_error(err, &host, format_args!("URL2RQ {}", e)),
        };
        let mut request = DigestRequest::get(url);

        let response = match requester.send(&mut request) {
            Ok(response) => response,
            Err(e) => return report_error(err, &host, format_args!("HTTP {}", e)),
        };

        let status = response.status();
        if status != StatusCode::OK {
            return report_error(err, &host, format_args!("RSP {}", status.as_u16()));
        }

        let prefix = if prepend_host {
            format!("{}\t", self.host_label())
        } else {
            String::new()
        };
        if let Some(body) = response.into_body() {
            if let Err(e) = copy_body(out, body, prefix.as_bytes()) {
                report_error(err, &host, format_args!("IO {}", e))?;
            }
        }
        Ok(())
    }
}

/// The `host[:port]` part of a host argument, without scheme or user-info.
fn authority(host: &str) -> &str {
    let rest = host.split_once("://").map_or(host, |(_, rest)| rest);
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    authority.rsplit_once('@').map_or(authority, |(_, host)| host)
}
