//! HTTP server for the matrix API.
//!
//! Each operation gets its own POST route taking a multipart form with a
//! `file` field containing the CSV matrix. Responses are plain text.
//!
//! # API Endpoints
//!
//! | Method | Path        | Description                          |
//! |--------|-------------|--------------------------------------|
//! | GET    | `/health`   | Health check                         |
//! | POST   | `/echo`     | Matrix in its original textual form  |
//! | POST   | `/invert`   | Transposed matrix                    |
//! | POST   | `/flatten`  | All cells on one line, row-major     |
//! | POST   | `/sum`      | Sum of all cells                     |
//! | POST   | `/multiply` | Product of all cells                 |
//! | GET    | `/api/logs` | SSE stream for real-time logs        |

use axum::{
    extract::Multipart,
    http::{header, Method},
    response::{sse::Event, Json, Sse},
    routing::{get, post},
    Router,
};
use futures::stream::Stream;
use serde_json::{json, Value};
use std::{convert::Infallible, net::SocketAddr, time::Duration};
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt as _;
use tower_http::cors::CorsLayer;

use super::logs::{log_error, log_info, log_success, LOG_BROADCASTER};
use super::types::ApiError;
use crate::ops::Operation;
use crate::parser::parse_bytes;

/// Start the HTTP server.
pub async fn start_server(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    // Permissive CORS for development
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::CONTENT_TYPE]);

    let app = Router::new()
        .route("/", get(health))
        .route("/health", get(health))
        .route("/echo", post(echo_csv))
        .route("/invert", post(invert_csv))
        .route("/flatten", post(flatten_csv))
        .route("/sum", post(sum_csv))
        .route("/multiply", post(multiply_csv))
        .route("/api/logs", get(sse_logs))
        .layer(cors);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    println!("🚀 matrixd running on http://localhost:{}", port);
    println!("   POST /echo /invert /flatten /sum /multiply - CSV matrix upload");
    println!("   GET  /api/logs  - SSE log stream");
    println!("   GET  /health    - Health check");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Health check endpoint
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "matrixd",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "echo": "POST /echo",
            "invert": "POST /invert",
            "flatten": "POST /flatten",
            "sum": "POST /sum",
            "multiply": "POST /multiply",
            "logs": "GET /api/logs (SSE)"
        }
    }))
}

/// SSE endpoint for real-time log streaming
async fn sse_logs() -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = LOG_BROADCASTER.subscribe();

    let stream = BroadcastStream::new(rx).filter_map(|result| match result {
        Ok(entry) => {
            let json = serde_json::to_string(&entry).ok()?;
            Some(Ok(Event::default().data(json)))
        }
        Err(_) => None,
    });

    Sse::new(stream).keep_alive(
        axum::response::sse::KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("keep-alive"),
    )
}

async fn echo_csv(multipart: Multipart) -> Result<String, ApiError> {
    handle(Operation::Echo, multipart).await
}

async fn invert_csv(multipart: Multipart) -> Result<String, ApiError> {
    handle(Operation::Invert, multipart).await
}

async fn flatten_csv(multipart: Multipart) -> Result<String, ApiError> {
    handle(Operation::Flatten, multipart).await
}

async fn sum_csv(multipart: Multipart) -> Result<String, ApiError> {
    handle(Operation::Sum, multipart).await
}

async fn multiply_csv(multipart: Multipart) -> Result<String, ApiError> {
    handle(Operation::Multiply, multipart).await
}

/// Shared handler body: pull the upload out of the form, parse, apply.
async fn handle(op: Operation, multipart: Multipart) -> Result<String, ApiError> {
    let (file_name, bytes) = read_file_field(multipart).await?;

    log_info(format!(
        "{}: {} ({} bytes)",
        op.name(),
        file_name.as_deref().unwrap_or("unknown"),
        bytes.len()
    ));

    run_operation(op, &bytes)
}

/// Extract the `file` field from the multipart form.
async fn read_file_field(
    mut multipart: Multipart,
) -> Result<(Option<String>, Vec<u8>), ApiError> {
    let mut file_data: Option<Vec<u8>> = None;
    let mut file_name: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Multipart(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();

        if name == "file" {
            file_name = field.file_name().map(|s| s.to_string());
            file_data = Some(
                field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::Multipart(e.to_string()))?
                    .to_vec(),
            );
        }
    }

    let bytes = file_data.ok_or(ApiError::MissingFile)?;
    Ok((file_name, bytes))
}

/// Parse the upload and apply the operation. Split out of [`handle`] so the
/// whole request path below multipart extraction is testable directly.
fn run_operation(op: Operation, bytes: &[u8]) -> Result<String, ApiError> {
    let matrix = parse_bytes(bytes).map_err(|err| {
        if err.is_client_error() {
            log_error(format!("{}: rejected upload: {}", op.name(), err));
        }
        ApiError::from(err)
    })?;

    log_success(format!(
        "{}: parsed {}x{} matrix",
        op.name(),
        matrix.height(),
        matrix.width()
    ));

    Ok(op.apply(&matrix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_echo() {
        let body = run_operation(Operation::Echo, b"1,2\n3,4").unwrap();
        assert_eq!(body, "1,2\n3,4");
    }

    #[test]
    fn test_run_invert() {
        let body = run_operation(Operation::Invert, b"1,4\n16,256").unwrap();
        assert_eq!(body, "1,16\n4,256");
    }

    #[test]
    fn test_run_flatten() {
        let body = run_operation(Operation::Flatten, b"1,2,3\n4,5,6\n7,8,9").unwrap();
        assert_eq!(body, "1,2,3,4,5,6,7,8,9");
    }

    #[test]
    fn test_run_sum_and_multiply_render_as_text() {
        assert_eq!(
            run_operation(Operation::Sum, b"1,2,3\n4,5,6\n7,8,9").unwrap(),
            "45"
        );
        assert_eq!(
            run_operation(Operation::Multiply, b"1,2,3\n4,5,6\n7,8,9").unwrap(),
            "362880"
        );
    }

    #[test]
    fn test_run_rejects_bad_upload() {
        let err = run_operation(Operation::Sum, b"1,2\n3,4\n5,6").unwrap_err();
        match err {
            ApiError::InvalidMatrix(inner) => {
                assert!(inner.to_string().contains("equal row and column"))
            }
            other => panic!("expected InvalidMatrix, got {other:?}"),
        }
    }

    #[test]
    fn test_run_rejects_invalid_utf8_as_bad_request() {
        let err = run_operation(Operation::Echo, b"1,2\n\xff,4").unwrap_err();
        match err {
            ApiError::InvalidMatrix(inner) => {
                assert!(inner.to_string().contains("non-numeric"))
            }
            other => panic!("expected InvalidMatrix, got {other:?}"),
        }
    }

    #[test]
    fn test_run_rejects_empty_upload() {
        let err = run_operation(Operation::Echo, b"").unwrap_err();
        assert!(matches!(err, ApiError::InvalidMatrix(_)));
    }
}
