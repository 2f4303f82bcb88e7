//! Shared test utilities: a minimal local HTTP server serving canned
//! JSON bodies, so the client and report tests run without touching the
//! real exchange.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

/// A canned route: the response body is served when the request target
/// (path + query) contains `matcher`. Routes are tried in order, so put
/// the more specific matcher first.
pub struct Route {
    pub matcher: &'static str,
    pub body: &'static str,
}

/// A local single-threaded HTTP/1.1 server serving canned responses and
/// recording every request target it sees.
pub struct MockExchange {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockExchange {
    /// Binds to an ephemeral localhost port and serves `routes` until the
    /// test process exits.
    pub fn start(routes: Vec<Route>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind mock server");
        let addr = listener.local_addr().expect("mock server has no address");

        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);

        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else { break };

                // Read until the end of the request headers; GETs have no body.
                let mut raw = Vec::new();
                let mut buf = [0u8; 1024];
                loop {
                    match stream.read(&mut buf) {
                        Ok(0) | Err(_) => break,
                        Ok(n) => {
                            raw.extend_from_slice(&buf[..n]);
                            if raw.windows(4).any(|w| w == b"\r\n\r\n") {
                                break;
                            }
                        }
                    }
                }
                let request = String::from_utf8_lossy(&raw).into_owned();

                // Request line: "GET /path?query HTTP/1.1"
                let target = request
                    .lines()
                    .next()
                    .and_then(|line| line.split_whitespace().nth(1))
                    .unwrap_or("/")
                    .to_string();
                recorded.lock().unwrap().push(target.clone());

                let (status, body) = match routes.iter().find(|r| target.contains(r.matcher)) {
                    Some(route) => ("200 OK", route.body),
                    None => ("404 Not Found", "{}"),
                };
                let response = format!(
                    "HTTP/1.1 {status}\r\n\
                     Content-Type: application/json\r\n\
                     Content-Length: {}\r\n\
                     Connection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });

        Self {
            base_url: format!("http://{addr}"),
            requests,
        }
    }

    /// Every request target (path + query) received so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}
