use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener};
use std::thread::JoinHandle;

use stats19_fetch::{Downloader, FetchError, HttpFetcher};

/// Answer exactly one HTTP request with the given status line and body.
fn serve_once(status_line: &'static str, body: &'static [u8]) -> (SocketAddr, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let handle = std::thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut request = [0u8; 2048];
            let _ = stream.read(&mut request);
            let header = format!(
                "HTTP/1.1 {status_line}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            let _ = stream.write_all(header.as_bytes());
            let _ = stream.write_all(body);
        }
    });
    (addr, handle)
}

#[test]
fn downloads_into_the_destination_directory() {
    let (addr, server) = serve_once("200 OK", b"accident_index,sex_of_casualty\nA1,1\n");
    let fetcher = HttpFetcher::new(format!("http://{addr}"), "files").expect("fetcher");

    let dir = tempfile::tempdir().expect("tempdir");
    let dest_dir = dir.path().join("cache");
    let dest = fetcher.pull("casualty.csv", &dest_dir).expect("pull");

    assert_eq!(dest, dest_dir.join("casualty.csv"));
    let contents = std::fs::read_to_string(&dest).expect("read");
    assert_eq!(contents, "accident_index,sex_of_casualty\nA1,1\n");
    server.join().expect("server thread");
}

#[test]
fn remote_404_is_the_distinguished_not_found_error() {
    let (addr, server) = serve_once("404 Not Found", b"");
    let fetcher = HttpFetcher::new(format!("http://{addr}"), "files").expect("fetcher");

    let dir = tempfile::tempdir().expect("tempdir");
    let err = fetcher.pull("missing.csv", dir.path()).unwrap_err();
    assert!(err.is_not_found(), "expected NotFound, got {err}");
    server.join().expect("server thread");
}

#[test]
fn other_statuses_propagate_unmodified() {
    let (addr, server) = serve_once("503 Service Unavailable", b"");
    let fetcher = HttpFetcher::new(format!("http://{addr}"), "files").expect("fetcher");

    let dir = tempfile::tempdir().expect("tempdir");
    let err = fetcher.pull("any.csv", dir.path()).unwrap_err();
    match err {
        FetchError::Status { status, .. } => assert_eq!(status.as_u16(), 503),
        other => panic!("expected Status, got {other}"),
    }
    server.join().expect("server thread");
}

#[test]
fn a_failed_download_never_corrupts_an_existing_file() {
    let (addr, server) = serve_once("500 Internal Server Error", b"");
    let fetcher = HttpFetcher::new(format!("http://{addr}"), "files").expect("fetcher");

    let dir = tempfile::tempdir().expect("tempdir");
    let dest = dir.path().join("existing.csv");
    std::fs::write(&dest, "previous contents").expect("seed file");

    let _ = fetcher.pull("existing.csv", dir.path()).unwrap_err();
    let contents = std::fs::read_to_string(&dest).expect("read");
    assert_eq!(contents, "previous contents");
    server.join().expect("server thread");
}
