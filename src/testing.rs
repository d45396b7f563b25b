//! A scripted HTTP/1.1 server on localhost for exercising the HTTP clients.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, sleep, JoinHandle};
use std::time::{Duration, Instant};

/// A request as the fake server received it.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: String,
    pub path: String,
    /// Header names are lowercased.
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl Request {
    pub fn header(&self, name: &str) -> Option<&str> {
        let name = name.to_ascii_lowercase();
        self.headers
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body is not JSON")
    }
}

pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Reply {
            status,
            body: body.into(),
        }
    }
}

/// Answers one connection per scripted reply, in order, then stops.
pub struct FakeServer {
    url: String,
    handle: JoinHandle<Vec<Request>>,
}

impl FakeServer {
    pub fn start(replies: Vec<Reply>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("binding fake server");
        listener.set_nonblocking(true).expect("setting nonblocking");
        let url = format!("http://{}", listener.local_addr().expect("local addr"));

        let handle = thread::spawn(move || {
            let deadline = Instant::now() + Duration::from_secs(5);
            let mut requests = Vec::new();

            for reply in replies {
                let stream = loop {
                    match listener.accept() {
                        Ok((stream, _)) => break Some(stream),
                        Err(_) if Instant::now() < deadline => sleep(Duration::from_millis(5)),
                        Err(_) => break None,
                    }
                };
                let Some(stream) = stream else { break };
                requests.push(serve(stream, reply));
            }

            requests
        });

        FakeServer { url, handle }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Waits for the server to finish and returns what it received.
    pub fn requests(self) -> Vec<Request> {
        self.handle.join().expect("fake server panicked")
    }
}

fn serve(stream: TcpStream, reply: Reply) -> Request {
    stream.set_nonblocking(false).expect("setting blocking");
    let mut reader = BufReader::new(stream.try_clone().expect("cloning stream"));

    let mut line = String::new();
    reader.read_line(&mut line).expect("reading request line");
    let mut parts = line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let path = parts.next().unwrap_or_default().to_string();

    let mut headers = Vec::new();
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).expect("reading header");
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            headers.push((name.trim().to_ascii_lowercase(), value.trim().to_string()));
        }
    }

    let mut request = Request {
        method,
        path,
        headers,
        body: String::new(),
    };

    let mut body = Vec::new();
    if let Some(len) = request.header("content-length") {
        body.resize(len.parse().expect("content-length"), 0);
        reader.read_exact(&mut body).expect("reading body");
    } else if request.header("transfer-encoding") == Some("chunked") {
        loop {
            let mut size = String::new();
            reader.read_line(&mut size).expect("reading chunk size");
            let size = usize::from_str_radix(size.trim(), 16).expect("chunk size");
            let mut chunk = vec![0; size + 2];
            reader.read_exact(&mut chunk).expect("reading chunk");
            if size == 0 {
                break;
            }
            body.extend_from_slice(&chunk[..size]);
        }
    }
    request.body = String::from_utf8(body).expect("request body is not UTF-8");

    let mut stream = stream;
    write!(
        stream,
        "HTTP/1.1 {} Fake\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
        reply.status,
        reply.body.len(),
        reply.body
    )
    .expect("writing reply");
    stream.flush().expect("flushing reply");

    request
}
