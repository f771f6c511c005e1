// src/core/net.rs

// HTTP/1.0 GET over TCP (std-only). Used only by the thumbnail
// preview; game pages are never fetched here. The page source is
// always pasted or read from disk.

use std::{io::{Read, Write}, net::TcpStream, time::Duration};
use crate::config::consts::{HTTP_PORT, HTTP_TIMEOUT_SECS};

/// Split "http(s)://host/path" into (host, path).
/// The fetch itself is plain HTTP; the image CDN answers on both.
pub fn split_url(url: &str) -> Option<(&str, &str)> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))?;
    match rest.find('/') {
        Some(i) => Some((&rest[..i], &rest[i..])),
        None => Some((rest, "/")),
    }
}

pub fn http_get_bytes(url: &str) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let (host, path) = split_url(url).ok_or_else(|| format!("Unsupported URL: {url}"))?;

    let mut s = TcpStream::connect((host, HTTP_PORT))?;
    s.set_read_timeout(Some(Duration::from_secs(HTTP_TIMEOUT_SECS)))?;
    s.set_write_timeout(Some(Duration::from_secs(HTTP_TIMEOUT_SECS)))?;

    let req = format!(
        "GET {} HTTP/1.0\r\nHost: {}\r\nUser-Agent: gd_parse/0.2\r\nConnection: close\r\n\r\n",
        path, host
    );
    s.write_all(req.as_bytes())?;
    s.flush()?;

    let mut buf = Vec::new();
    s.read_to_end(&mut buf)?;

    let header_end = find_header_end(&buf).ok_or("Malformed HTTP response")?;
    let head = String::from_utf8_lossy(&buf[..header_end]);
    let status = head.split("\r\n").next().unwrap_or("");
    if !status.contains("200") {
        return Err(format!("HTTP error: {} {}{}", status, host, path).into());
    }
    Ok(buf[header_end + 4..].to_vec())
}

fn find_header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}
