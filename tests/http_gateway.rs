// SPDX-License-Identifier: MPL-2.0
//! `HttpGateway` against a one-shot loopback HTTP server.

use gallery_submit::api::{Gateway, HttpGateway};
use gallery_submit::error::Error;
use gallery_submit::gallery::{fetch_page, PageOutcome, PageRequest};
use gallery_submit::submission::SubmissionPayload;
use serde_json::json;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Serves one request with `status` and `body`, handing the raw request
/// back through the returned channel.
async fn serve_once(status: &'static str, body: String) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let Ok((mut socket, _)) = listener.accept().await else {
            return;
        };
        let mut raw = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let read = tokio::time::timeout(Duration::from_secs(5), socket.read(&mut buf)).await;
            let Ok(Ok(n)) = read else { break };
            if n == 0 {
                break;
            }
            raw.extend_from_slice(&buf[..n]);
            if request_complete(&raw) {
                break;
            }
        }

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let _ = socket.write_all(response.as_bytes()).await;
        let _ = socket.shutdown().await;
        let _ = tx.send(String::from_utf8_lossy(&raw).into_owned());
    });

    (format!("http://{addr}"), rx)
}

/// Headers received and, when announced, the whole body.
fn request_complete(raw: &[u8]) -> bool {
    let text = String::from_utf8_lossy(raw);
    let Some(header_end) = text.find("\r\n\r\n") else {
        return false;
    };
    let headers = text[..header_end].to_ascii_lowercase();
    let body_len = raw.len() - (header_end + 4);

    match headers
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|value| value.trim().parse::<usize>().ok())
    {
        Some(expected) => body_len >= expected,
        None if headers.contains("transfer-encoding: chunked") => text.ends_with("0\r\n\r\n"),
        None => true,
    }
}

fn gateway(base: &str) -> HttpGateway {
    HttpGateway::new(base, Duration::from_secs(5)).expect("client builds")
}

#[tokio::test]
async fn listing_is_posted_as_multipart_and_decoded() {
    let body = json!({
        "images": [
            { "id": "1", "xt_image": "https://img.test/1.jpg", "width": "640", "height": "480" }
        ]
    })
    .to_string();
    let (base, captured) = serve_once("200 OK", body).await;

    let request = PageRequest {
        offset: 10,
        user_id: "108".into(),
        category: "popular".into(),
        refresh: false,
    };
    let outcome = fetch_page(&gateway(&format!("{base}/xttest/")), &request).await;

    let PageOutcome::Page(records) = outcome else {
        panic!("expected a page, got {outcome:?}");
    };
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].remote_image_url, "https://img.test/1.jpg");

    let raw = captured.await.expect("request captured");
    assert!(raw.starts_with("POST /xttest/getdata.php HTTP/1.1"));
    assert!(raw.to_ascii_lowercase().contains("content-type: multipart/form-data"));
    assert!(raw.contains("name=\"user_id\"\r\n\r\n108"));
    assert!(raw.contains("name=\"offset\"\r\n\r\n10"));
    assert!(raw.contains("name=\"type\"\r\n\r\npopular"));
}

#[tokio::test]
async fn server_error_becomes_status_error() {
    let (base, _captured) = serve_once("500 Internal Server Error", "{}".into()).await;

    let request = PageRequest {
        offset: 0,
        user_id: "108".into(),
        category: "popular".into(),
        refresh: false,
    };
    let outcome = fetch_page(&gateway(&base), &request).await;

    assert!(matches!(outcome, PageOutcome::Failed(Error::Status(500))));
}

#[tokio::test]
async fn submission_carries_image_attachment() {
    let (base, captured) = serve_once("200 OK", "\"saved\"".into()).await;
    let payload = SubmissionPayload {
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        email: "ada@example.com".into(),
        phone: "1234567890".into(),
        image_url: "unused".into(),
    };

    let response = gateway(&base)
        .request(payload.to_request(b"JPEGDATA".to_vec()))
        .await
        .expect("submission accepted");
    assert_eq!(response, json!("saved"));

    let raw = captured.await.expect("request captured");
    assert!(raw.starts_with("POST /savedata.php HTTP/1.1"));
    assert!(raw.contains("name=\"email\"\r\n\r\nada@example.com"));
    assert!(raw.contains("name=\"user_image\"; filename=\"profile.jpg\""));
    assert!(raw.to_ascii_lowercase().contains("content-type: image/jpeg"));
    assert!(raw.contains("JPEGDATA"));
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    // Bind then drop to get a port nobody listens on.
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let result = gateway(&format!("http://{addr}")).download(&format!("http://{addr}/a.jpg")).await;
    assert!(matches!(result, Err(Error::Http(_))));
}
