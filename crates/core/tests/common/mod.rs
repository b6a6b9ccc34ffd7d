//! Test doubles for running the real HTTP client without the real API.
//!
//! - [`MockHttpServer`]: loopback HTTP server with canned per-path responses
//! - [`captured_logs`]: `log` records emitted during the test run

#![allow(dead_code)]

use std::collections::HashMap;
use std::io::{BufRead, BufReader, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, Once};
use std::thread::JoinHandle;
use std::time::Duration;

use log::{Level, LevelFilter, Log, Metadata, Record};

// ---------------------------------------------------------------------------
// MockHttpServer
// ---------------------------------------------------------------------------

/// A request received by the mock server.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    /// Path without the query string
    pub path: String,
    /// Raw query parameters, in order
    pub query: Vec<(String, String)>,
}

impl RecordedRequest {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone)]
struct ConfiguredResponse {
    status: u16,
    body: String,
}

#[derive(Debug, Default)]
struct MockHttpInner {
    requests: Vec<RecordedRequest>,
    responses: HashMap<String, ConfiguredResponse>,
}

/// Lightweight HTTP/1.1 server on `127.0.0.1` that answers each configured
/// path with a fixed JSON body and records every request. Unconfigured paths
/// get a 404. Stops when dropped.
pub struct MockHttpServer {
    inner: Arc<Mutex<MockHttpInner>>,
    addr: SocketAddr,
    stop_flag: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl MockHttpServer {
    pub fn start() -> Self {
        let listener =
            TcpListener::bind("127.0.0.1:0").expect("failed to bind mock HTTP server to loopback");
        let addr = listener.local_addr().expect("failed to get local addr");
        listener
            .set_nonblocking(true)
            .expect("failed to set non-blocking");

        let inner = Arc::new(Mutex::new(MockHttpInner::default()));
        let stop_flag = Arc::new(AtomicBool::new(false));

        let inner_clone = Arc::clone(&inner);
        let stop_clone = Arc::clone(&stop_flag);
        let thread = std::thread::spawn(move || run_mock_server(listener, inner_clone, stop_clone));

        Self {
            inner,
            addr,
            stop_flag,
            thread: Some(thread),
        }
    }

    /// Base URL, e.g. `http://127.0.0.1:12345`.
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Answer `path` with `status` and a JSON `body`. Replaces any earlier
    /// configuration for the same path.
    pub fn configure_json_response(&self, path: &str, status: u16, body: &str) {
        let mut inner = self.inner.lock().expect("mock http lock poisoned");
        inner.responses.insert(
            path.to_string(),
            ConfiguredResponse {
                status,
                body: body.to_string(),
            },
        );
    }

    pub fn requests_for_path(&self, path: &str) -> Vec<RecordedRequest> {
        let inner = self.inner.lock().expect("mock http lock poisoned");
        inner
            .requests
            .iter()
            .filter(|r| r.path == path)
            .cloned()
            .collect()
    }

    pub fn request_count(&self) -> usize {
        self.inner.lock().expect("mock http lock poisoned").requests.len()
    }
}

impl Drop for MockHttpServer {
    fn drop(&mut self) {
        self.stop_flag.store(true, Ordering::SeqCst);
        let _ = TcpStream::connect(self.addr);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

fn run_mock_server(listener: TcpListener, inner: Arc<Mutex<MockHttpInner>>, stop: Arc<AtomicBool>) {
    loop {
        if stop.load(Ordering::SeqCst) {
            break;
        }

        let stream = match listener.accept() {
            Ok((stream, _)) => stream,
            Err(ref e) if e.kind() == std::io::ErrorKind::WouldBlock => {
                std::thread::sleep(Duration::from_millis(5));
                continue;
            }
            Err(_) => break,
        };

        if stop.load(Ordering::SeqCst) {
            break;
        }

        let _ = stream.set_nonblocking(false);
        let _ = stream.set_read_timeout(Some(Duration::from_secs(5)));
        handle_connection(stream, &inner);
    }
}

fn handle_connection(stream: TcpStream, inner: &Arc<Mutex<MockHttpInner>>) {
    let mut reader = BufReader::new(&stream);

    let mut request_line = String::new();
    if reader.read_line(&mut request_line).is_err() {
        return;
    }
    let parts: Vec<&str> = request_line.trim().splitn(3, ' ').collect();
    if parts.len() < 2 {
        return;
    }
    let method = parts[0].to_string();
    let (path, query) = split_target(parts[1]);

    // Drain headers; GET requests carry no body.
    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) if line.trim().is_empty() => break,
            Ok(_) => {}
        }
    }

    let response = {
        let mut guard = inner.lock().expect("mock http lock poisoned");
        guard.requests.push(RecordedRequest {
            method,
            path: path.clone(),
            query,
        });
        guard.responses.get(&path).cloned()
    };

    let ConfiguredResponse { status, body } = response.unwrap_or(ConfiguredResponse {
        status: 404,
        body: "{\"error\":\"not found\"}".to_string(),
    });

    let status_text = match status {
        200 => "OK",
        400 => "Bad Request",
        403 => "Forbidden",
        404 => "Not Found",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        _ => "Unknown",
    };

    let head = format!(
        "HTTP/1.1 {status} {status_text}\r\n\
         Content-Type: application/json\r\n\
         Content-Length: {}\r\n\
         Connection: close\r\n\r\n",
        body.len()
    );

    let mut writer = &stream;
    let _ = writer.write_all(head.as_bytes());
    let _ = writer.write_all(body.as_bytes());
    let _ = writer.flush();
    let _ = stream.shutdown(std::net::Shutdown::Both);
}

fn split_target(target: &str) -> (String, Vec<(String, String)>) {
    let (path, query) = target.split_once('?').unwrap_or((target, ""));
    let params = query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            (k.to_string(), v.to_string())
        })
        .collect();
    (path.to_string(), params)
}

// ---------------------------------------------------------------------------
// Log capture
// ---------------------------------------------------------------------------

struct CaptureLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut records) = self.records.lock() {
            records.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};
static INIT_LOGGER: Once = Once::new();

/// Install the capturing logger. Safe to call from every test.
pub fn init_log_capture() {
    INIT_LOGGER.call_once(|| {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(LevelFilter::Trace);
    });
}

/// All records logged so far by any test in this binary.
pub fn captured_logs() -> Vec<(Level, String)> {
    LOGGER
        .records
        .lock()
        .map(|records| records.clone())
        .unwrap_or_default()
}
