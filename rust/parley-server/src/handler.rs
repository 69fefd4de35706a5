//! The `/predict` request handler.
//!
//! Request: `POST /predict` with `{"text": "..."}`.
//! Response: the [`PredictionResult`] JSON, or an error body:
//!
//! | condition                        | status | body                                   |
//! |----------------------------------|--------|----------------------------------------|
//! | `text` missing, null or empty    | 400    | `{"error": "Text is required"}`        |
//! | body is not a JSON request       | 400    | `{"error": ..., <fallback prediction>}` |
//! | unknown path                     | 404    | `{"error": "Not found"}`               |
//! | OPTIONS, preflight or not        | 200    | empty, with the CORS headers           |
//! | any other method                 | 405    | `{"error": "Method not allowed"}`      |

use std::convert::Infallible;
use std::fmt::Display;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Body;
use hyper::header::{self, HeaderName, HeaderValue};
use hyper::{Method, Request, Response, StatusCode};
use parley_nlu::{PredictionResult, Predictor};
use serde::{Deserialize, Serialize};
use tower::Service;
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info, warn};

/// The only routed path.
pub const PREDICT_PATH: &str = "/predict";

/// Body of a prediction request.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub text: Option<String>,
}

/// Body of every non-200 response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    /// Present when the request was unreadable, so callers that only look at
    /// the prediction fields still get a well-formed answer.
    #[serde(flatten, default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<PredictionResult>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        ErrorBody {
            error: error.into(),
            fallback: None,
        }
    }

    pub fn with_fallback(mut self) -> Self {
        self.fallback = Some(PredictionResult::fallback());
        self
    }
}

/// CORS policy matching the headers browser clients send.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
        ])
}

/// Tower service answering prediction requests.
#[derive(Debug, Clone)]
pub struct PredictService {
    predictor: Arc<Predictor>,
}

impl PredictService {
    pub fn new(predictor: Arc<Predictor>) -> Self {
        PredictService { predictor }
    }
}

impl<B> Service<Request<B>> for PredictService
where
    B: Body + Send + 'static,
    B::Data: Send,
    B::Error: Display,
{
    type Response = Response<Full<Bytes>>;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: Request<B>) -> Self::Future {
        let predictor = Arc::clone(&self.predictor);
        Box::pin(async move { Ok(handle(&predictor, request).await) })
    }
}

/// Route and answer a single request.
pub async fn handle<B>(predictor: &Predictor, request: Request<B>) -> Response<Full<Bytes>>
where
    B: Body,
    B::Error: Display,
{
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = if path != PREDICT_PATH {
        json_response(StatusCode::NOT_FOUND, &ErrorBody::new("Not found"))
    } else if method == Method::OPTIONS {
        Response::new(Full::new(Bytes::new()))
    } else if method != Method::POST {
        let mut response =
            json_response(StatusCode::METHOD_NOT_ALLOWED, &ErrorBody::new("Method not allowed"));
        response
            .headers_mut()
            .insert(header::ALLOW, HeaderValue::from_static("POST, OPTIONS"));
        response
    } else {
        predict(predictor, request.into_body()).await
    };

    info!(%method, %path, status = response.status().as_u16(), "handled request");
    response
}

async fn predict<B>(predictor: &Predictor, body: B) -> Response<Full<Bytes>>
where
    B: Body,
    B::Error: Display,
{
    let bytes = match body.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(error) => {
            warn!(%error, "failed to read request body");
            return json_response(
                StatusCode::BAD_REQUEST,
                &ErrorBody::new(error.to_string()).with_fallback(),
            );
        }
    };

    let request: PredictRequest = match serde_json::from_slice(&bytes) {
        Ok(request) => request,
        Err(error) => {
            warn!(%error, "malformed prediction request");
            return json_response(
                StatusCode::BAD_REQUEST,
                &ErrorBody::new(error.to_string()).with_fallback(),
            );
        }
    };

    let text = match request.text {
        Some(text) if !text.is_empty() => text,
        _ => {
            return json_response(StatusCode::BAD_REQUEST, &ErrorBody::new("Text is required"));
        }
    };

    let result = predictor.predict(&text);
    debug!(intent = %result.intent, entities = result.entities.len(), "prediction");

    json_response(StatusCode::OK, &result)
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response<Full<Bytes>> {
    let (status, bytes) = match serde_json::to_vec(body) {
        Ok(bytes) => (status, Bytes::from(bytes)),
        Err(error) => {
            warn!(%error, "failed to encode response");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Bytes::from_static(br#"{"error":"Failed to encode response"}"#),
            )
        }
    };

    let mut response = Response::new(Full::new(bytes));
    *response.status_mut() = status;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    response
}
