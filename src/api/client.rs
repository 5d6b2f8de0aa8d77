use serde_json::{json, Value};

use super::error::ApiError;

/// Build the HTTP client used for every content request.
pub fn build_http_client() -> Result<reqwest::Client, ApiError> {
    reqwest::Client::builder()
        .user_agent(format!("dato-site/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| ApiError::Network(format!("Failed to create HTTP client: {}", e)))
}

/// Run a GraphQL query against the content delivery API and return its `data`.
pub async fn graphql_query(
    client: &reqwest::Client,
    endpoint: &str,
    api_token: &str,
    query: &str,
) -> Result<Value, ApiError> {
    if api_token.trim().is_empty() {
        return Err(ApiError::MissingToken);
    }
    tracing::info!(endpoint, "GraphQL request");

    let response = client
        .post(endpoint)
        .bearer_auth(api_token)
        .header("Accept", "application/json")
        .json(&json!({ "query": query }))
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("Request failed: {}", e)))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(format!("Failed to read response: {}", e)))?;
    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
            url: endpoint.to_string(),
            body,
        });
    }

    let payload: Value = serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))?;
    tracing::debug!(bytes = body.len(), "GraphQL response");
    extract_data(payload)
}

/// Fetch a URL and return its body as text.
pub async fn fetch_text(client: &reqwest::Client, url: &str) -> Result<String, ApiError> {
    tracing::info!(url, "GET");
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("Request failed: {}", e)))?;
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(format!("Failed to read response: {}", e)))?;
    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
            url: url.to_string(),
            body,
        });
    }
    Ok(body)
}

/// Split a GraphQL response envelope into its `data` or its `errors`.
pub fn extract_data(mut payload: Value) -> Result<Value, ApiError> {
    if let Some(errors) = payload.get("errors").and_then(|e| e.as_array()) {
        if !errors.is_empty() {
            let messages = errors
                .iter()
                .map(|e| {
                    e.get("message")
                        .and_then(|m| m.as_str())
                        .map(str::to_string)
                        .unwrap_or_else(|| e.to_string())
                })
                .collect();
            return Err(ApiError::GraphQl(messages));
        }
    }
    match payload.get_mut("data").map(Value::take) {
        Some(data) if data.is_object() => Ok(data),
        _ => Err(ApiError::Decode("response has no data object".into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_data_ok() {
        let data = extract_data(json!({"data": {"plans": []}})).unwrap();
        assert_eq!(data, json!({"plans": []}));
    }

    #[test]
    fn test_extract_data_errors() {
        let err = extract_data(json!({"errors": [{"message": "Field 'x' doesn't exist"}, {"code": 1}]}))
            .unwrap_err();
        match err {
            ApiError::GraphQl(messages) => {
                assert_eq!(messages.len(), 2);
                assert_eq!(messages[0], "Field 'x' doesn't exist");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_extract_data_missing() {
        assert!(matches!(extract_data(json!({"data": null})), Err(ApiError::Decode(_))));
    }

    #[tokio::test]
    async fn test_graphql_query_requires_token() {
        let client = reqwest::Client::new();
        let result = graphql_query(&client, "http://127.0.0.1:9/", "  ", "{ x }").await;
        assert!(matches!(result, Err(ApiError::MissingToken)));
    }
}
