use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::error::{DecodeError, FetchError, LoadError};
use crate::model::NewsItem;

/// Fetches the feed and decodes it into news items.
pub async fn load_news(client: &Client, url: &str) -> Result<Vec<NewsItem>, LoadError> {
    let body = fetch(client, url).await?;
    let items = decode(&body)?;
    info!(count = items.len(), "decoded news items");
    Ok(items)
}

/// Issues one GET and returns the body when the server answers exactly 200.
#[instrument(skip(client))]
pub async fn fetch(client: &Client, url: &str) -> Result<String, FetchError> {
    let response = client.get(url).send().await?;

    let status = response.status();
    debug!(%status, "feed responded");
    if status != StatusCode::OK {
        return Err(FetchError::Status(status));
    }

    Ok(response.text().await?)
}

/// Parses a JSON array of objects into news items, preserving order.
pub fn decode(body: &str) -> Result<Vec<NewsItem>, DecodeError> {
    let value: Value = serde_json::from_str(body)?;

    let elements = match value {
        Value::Array(elements) => elements,
        other => {
            return Err(DecodeError::UnexpectedShape(format!(
                "expected a JSON array, found {}",
                kind(&other)
            )))
        }
    };

    elements
        .into_iter()
        .enumerate()
        .map(|(index, element)| {
            serde_json::from_value(element)
                .map_err(|e| DecodeError::UnexpectedShape(format!("item {index}: {e}")))
        })
        .collect()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "tests/feed_tests.rs"]
mod tests;
