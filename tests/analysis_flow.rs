// End-to-end tests: analysis client against a canned local HTTP server,
// and the app-level busy-flag / stale-result behavior around it.
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use sentiscope::app::App;
use sentiscope::client::AnalysisClient;
use sentiscope::model::{AnalysisRequest, AnalysisResult, Sentiment};
use sentiscope::types::SentiError;

const RESULT_A: &str = r#"{
    "input": "a",
    "vader": { "pos": 0.2, "neu": 0.5, "neg": 0.3, "compound": 0.1 },
    "huggingface": {
        "sentiment": "Positive",
        "polarity": 0.4,
        "response": "Good news. Things improved. Details omitted."
    }
}"#;

const RESULT_B: &str = r#"{
    "input": "b",
    "vader": { "pos": 0.0, "neu": 1.0, "neg": 0.0, "compound": 0.0 },
    "huggingface": { "sentiment": "Neutral", "polarity": 0.0, "response": "Flat." }
}"#;

/// Serve one canned HTTP response on a fresh port, counting connections.
fn serve_once(body: String) -> (String, Arc<AtomicUsize>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let connections = Arc::new(AtomicUsize::new(0));
    let counter = connections.clone();

    std::thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            counter.fetch_add(1, Ordering::SeqCst);
            read_http_request(&mut stream);
            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });

    (format!("http://{}", addr), connections)
}

/// Read headers plus a content-length body; enough for reqwest's POST.
fn read_http_request(stream: &mut std::net::TcpStream) -> Vec<u8> {
    stream
        .set_read_timeout(Some(Duration::from_secs(5)))
        .unwrap();
    let mut request = Vec::new();
    let mut buf = [0u8; 4096];
    loop {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => break,
            Ok(n) => {
                request.extend_from_slice(&buf[..n]);
                if let Some(header_end) = find_header_end(&request) {
                    let body_len = content_length(&request[..header_end]).unwrap_or(0);
                    if request.len() >= header_end + 4 + body_len {
                        break;
                    }
                }
            }
        }
    }
    request
}

fn find_header_end(bytes: &[u8]) -> Option<usize> {
    bytes.windows(4).position(|w| w == b"\r\n\r\n")
}

fn content_length(headers: &[u8]) -> Option<usize> {
    let text = String::from_utf8_lossy(headers);
    text.lines()
        .find(|l| l.to_ascii_lowercase().starts_with("content-length:"))
        .and_then(|l| l.split(':').nth(1))
        .and_then(|v| v.trim().parse().ok())
}

fn sample_result() -> AnalysisResult {
    serde_json::from_str(RESULT_A).unwrap()
}

fn wait_for_response(app: &mut App) {
    for _ in 0..500 {
        app.poll_response();
        if !app.is_busy() {
            return;
        }
        std::thread::sleep(Duration::from_millis(10));
    }
    panic!("analysis never completed");
}

#[tokio::test(flavor = "multi_thread")]
async fn bare_object_response_round_trips() {
    let (endpoint, _) = serve_once(RESULT_A.to_string());
    let client = AnalysisClient::new(endpoint);

    let result = client
        .analyze(&AnalysisRequest::typed("a"))
        .await
        .unwrap();

    assert_eq!(result.input, "a");
    assert_eq!(result.huggingface.sentiment, Sentiment::Positive);
    assert_eq!(result.vader.neu, 0.5);
}

#[tokio::test(flavor = "multi_thread")]
async fn array_response_normalizes_to_first_element() {
    let body = format!("[{},{}]", RESULT_A, RESULT_B);
    let (endpoint, _) = serve_once(body);
    let client = AnalysisClient::new(endpoint);

    let result = client
        .analyze(&AnalysisRequest::typed("a"))
        .await
        .unwrap();

    assert_eq!(result.input, "a");
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_fields_surface_as_shape_error() {
    let (endpoint, _) = serve_once(r#"{ "input": "a" }"#.to_string());
    let client = AnalysisClient::new(endpoint);

    let err = client
        .analyze(&AnalysisRequest::typed("a"))
        .await
        .unwrap_err();

    assert!(matches!(err, SentiError::ResponseShape(_)));
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_content_never_triggers_a_request() {
    let (endpoint, connections) = serve_once(RESULT_A.to_string());
    let mut app = App::new(AnalysisClient::new(endpoint));

    app.submit_analysis();
    assert!(!app.is_busy());

    // Whitespace-only content is guarded the same way
    app.collector.insert_char(' ');
    app.collector.insert_newline();
    app.submit_analysis();
    assert!(!app.is_busy());

    std::thread::sleep(Duration::from_millis(100));
    assert_eq!(connections.load(Ordering::SeqCst), 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn successful_analysis_updates_result_and_clears_busy() {
    let (endpoint, _) = serve_once(RESULT_A.to_string());
    let mut app = App::new(AnalysisClient::new(endpoint));

    for c in "great stuff".chars() {
        app.collector.insert_char(c);
    }
    app.submit_analysis();
    assert!(app.is_busy());

    // Resubmission while in flight is a no-op
    app.submit_analysis();

    wait_for_response(&mut app);
    let result = app.result.as_ref().expect("result should be set");
    assert_eq!(result.input, "a");
}

#[tokio::test(flavor = "multi_thread")]
async fn failed_call_leaves_prior_result_and_reenables_submit() {
    // Bind then drop to get a port nothing listens on
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let mut app = App::new(AnalysisClient::new(format!("http://127.0.0.1:{}", port)));
    app.result = Some(sample_result());

    for c in "newer text".chars() {
        app.collector.insert_char(c);
    }
    app.submit_analysis();
    assert!(app.is_busy());

    wait_for_response(&mut app);
    // Prior result untouched, submit control usable again
    assert_eq!(app.result.as_ref().unwrap().input, "a");
    assert!(!app.is_busy());
}
