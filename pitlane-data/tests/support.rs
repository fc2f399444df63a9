//! Loopback HTTP server serving canned JSON for provider tests.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;
use std::time::Duration;

/// One canned reply, chosen by request path prefix.
#[derive(Debug, Clone)]
pub struct Route {
    /// Request path prefix, such as `/api/v3/NextPublicHolidays`.
    pub prefix: &'static str,
    /// HTTP status code.
    pub status: u16,
    /// Response body.
    pub body: String,
    /// Delay before answering.
    pub delay: Duration,
    /// Delay between sending the headers and the body.
    pub body_delay: Duration,
}

impl Route {
    /// Answer `prefix` immediately with `200 OK` and `body`.
    pub fn ok(prefix: &'static str, body: impl Into<String>) -> Self {
        Self {
            prefix,
            status: 200,
            body: body.into(),
            delay: Duration::ZERO,
            body_delay: Duration::ZERO,
        }
    }

    /// Replace the status code.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Delay the answer.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Send the headers at once but hold the body back.
    pub fn with_body_delay(mut self, delay: Duration) -> Self {
        self.body_delay = delay;
        self
    }
}

/// Server bound to an ephemeral loopback port for the rest of the process.
#[derive(Debug)]
pub struct CannedServer {
    base_url: String,
}

impl CannedServer {
    /// Bind a listener and answer every connection from `routes`.
    ///
    /// Unmatched paths get `404 Not Found`.
    pub fn start(routes: Vec<Route>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback listener");
        let address = listener.local_addr().expect("listener address");
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let routes = routes.clone();
                thread::spawn(move || answer(stream, &routes));
            }
        });
        Self {
            base_url: format!("http://{address}"),
        }
    }

    /// Base URL to configure providers with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

fn answer(mut stream: TcpStream, routes: &[Route]) {
    let Some(path) = read_request_path(&mut stream) else {
        return;
    };
    let route = routes.iter().find(|route| path.starts_with(route.prefix));
    let (status, body, delay, body_delay) = route.map_or(
        (404, String::new(), Duration::ZERO, Duration::ZERO),
        |route| (route.status, route.body.clone(), route.delay, route.body_delay),
    );
    thread::sleep(delay);
    let reason = match status {
        200 => "OK",
        204 => "No Content",
        404 => "Not Found",
        _ => "Error",
    };
    let head = format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        body.len()
    );
    if stream.write_all(head.as_bytes()).and_then(|()| stream.flush()).is_err() {
        return;
    }
    thread::sleep(body_delay);
    let _ = stream.write_all(body.as_bytes());
}

fn read_request_path(stream: &mut TcpStream) -> Option<String> {
    let mut buffer = Vec::new();
    let mut chunk = [0_u8; 1024];
    while !buffer.windows(4).any(|window| window == b"\r\n\r\n") {
        let read = stream.read(&mut chunk).ok()?;
        if read == 0 {
            break;
        }
        buffer.extend_from_slice(chunk.get(..read)?);
    }
    let head = String::from_utf8_lossy(&buffer);
    head.lines()
        .next()?
        .split_whitespace()
        .nth(1)
        .map(str::to_owned)
}
