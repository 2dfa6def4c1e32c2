// src/core/net.rs

// HTTP/1.0 GET over TCP (std-only)

use std::{error::Error, io::{Read, Write}, net::TcpStream, time::Duration};

use crate::config::consts::{HTTP_PORT, READ_TIMEOUT_SECS, USER_AGENT, WRITE_TIMEOUT_SECS};

/// A plain-http location. Path keeps its query string, if any.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageUrl {
    pub host: String,
    pub port: u16,
    pub path: String,
}

impl PageUrl {
    pub fn parse(url: &str) -> Result<Self, Box<dyn Error>> {
        let rest = url
            .trim()
            .strip_prefix("http://")
            .ok_or_else(|| format!("Unsupported URL (expected http://…): {url}"))?;

        let (authority, path) = match rest.find('/') {
            Some(i) => (&rest[..i], &rest[i..]),
            None => (rest, "/"),
        };

        let (host, port) = match authority.rsplit_once(':') {
            Some((h, p)) => {
                let port: u16 = p.parse().map_err(|_| format!("Invalid port in URL: {url}"))?;
                (h, port)
            }
            None => (authority, HTTP_PORT),
        };
        if host.is_empty() {
            return Err(format!("Missing host in URL: {url}").into());
        }

        Ok(Self { host: s!(host), port, path: s!(path) })
    }

    /// Resolve an href found in the current document against this location.
    /// Handles absolute http URLs, absolute paths, query-only and relative
    /// hrefs (pagination links are typically relative).
    pub fn resolve(&self, href: &str) -> Result<Self, Box<dyn Error>> {
        let href = href.trim();
        if href.starts_with("http://") {
            return Self::parse(href);
        }
        if href.starts_with("https://") {
            return Err(format!("Link requires TLS, which this fetcher does not speak: {href}").into());
        }

        let path = if href.starts_with('/') {
            s!(href)
        } else {
            // Strip the query before joining; keep the directory part.
            let base = self.path.split('?').next().unwrap_or("/");
            if let Some(query) = href.strip_prefix('?') {
                join!(base, "?", query)
            } else {
                let dir_end = base.rfind('/').map_or(0, |i| i + 1);
                join!(&base[..dir_end], href)
            }
        };

        Ok(Self { host: self.host.clone(), port: self.port, path })
    }
}

pub fn http_get(url: &PageUrl) -> Result<String, Box<dyn Error>> {
    let mut s = TcpStream::connect((url.host.as_str(), url.port))?;
    s.set_read_timeout(Some(Duration::from_secs(READ_TIMEOUT_SECS)))?;
    s.set_write_timeout(Some(Duration::from_secs(WRITE_TIMEOUT_SECS)))?;

    let req = format!(
        "GET {} HTTP/1.0\r\nHost: {}\r\nUser-Agent: {}\r\nConnection: close\r\n\r\n",
        url.path, url.host, USER_AGENT
    );
    s.write_all(req.as_bytes())?;
    s.flush()?;

    let mut buf = Vec::new();
    s.read_to_end(&mut buf)?;
    let resp = String::from_utf8_lossy(&buf);

    let status_line = resp.split("\r\n").next().unwrap_or("");
    let status = status_line.split_whitespace().nth(1).unwrap_or("");
    if status != "200" {
        return Err(format!("HTTP error: {} for {}:{}{}", status_line, url.host, url.port, url.path).into());
    }
    let body_idx = resp.find("\r\n\r\n").ok_or("Malformed HTTP response")? + 4;
    Ok(resp[body_idx..].to_string())
}
