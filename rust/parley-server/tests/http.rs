use std::sync::Arc;

use anyhow::Result;
use parley_nlu::Predictor;
use parley_server::{PREDICT_PATH, ServerConfig, ServerHandle};
use serde_json::{Value, json};

async fn start() -> Result<ServerHandle> {
    let config = ServerConfig {
        addr: "127.0.0.1:0".parse()?,
    };
    Ok(ServerHandle::start(&config, Arc::new(Predictor::new()?)).await?)
}

#[tokio::test]
async fn it_serves_predictions_over_loopback() -> Result<()> {
    let server = start().await?;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}{}", server.endpoint, PREDICT_PATH))
        .json(&json!({"text": "Book a table for 3 people tonight"}))
        .send()
        .await?;
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let body: Value = response.json().await?;
    assert_eq!(
        body,
        json!({
            "intent": "ask_question",
            "confidence": 0.5,
            "entities": [{"text": "3 people", "type": "quantity", "start": 17, "end": 25}],
        })
    );

    server.stop().await;
    Ok(())
}

#[tokio::test]
async fn it_rejects_requests_without_text() -> Result<()> {
    let server = start().await?;

    let response = reqwest::Client::new()
        .post(format!("{}{}", server.endpoint, PREDICT_PATH))
        .json(&json!({"text": ""}))
        .send()
        .await?;
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>().await?,
        json!({"error": "Text is required"})
    );

    server.stop().await;
    Ok(())
}

#[tokio::test]
async fn it_stops_accepting_after_stop() -> Result<()> {
    let server = start().await?;
    let endpoint = format!("{}{}", server.endpoint, PREDICT_PATH);
    server.stop().await;

    let result = reqwest::Client::new()
        .post(endpoint)
        .json(&json!({"text": "hello"}))
        .send()
        .await;
    assert!(result.is_err());

    Ok(())
}
