use reqwest::{Response, StatusCode};
use serde::Deserialize;

use business::domain::errors::GatewayError;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Maps a non-success response to a gateway error, preferring the
/// backend's own `message` field when the body carries one.
pub(crate) async fn map_error_response(response: Response) -> GatewayError {
    let status = response.status();
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message)
        .filter(|message| !message.trim().is_empty());

    if let Some(message) = message {
        return GatewayError::backend(message);
    }
    match status {
        StatusCode::NOT_FOUND => GatewayError::NotFound,
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => GatewayError::Unauthorized,
        _ => GatewayError::Network,
    }
}

/// Decodes a success body, funneling transport failures into the
/// gateway error space.
pub(crate) async fn read_json<T: serde::de::DeserializeOwned>(
    result: Result<Response, reqwest::Error>,
) -> Result<T, GatewayError> {
    let response = result.map_err(|_| GatewayError::Network)?;
    if !response.status().is_success() {
        return Err(map_error_response(response).await);
    }
    response.json::<T>().await.map_err(|_| GatewayError::Decode)
}

/// Like `read_json` for endpoints whose success body is empty or ignored.
pub(crate) async fn expect_success(
    result: Result<Response, reqwest::Error>,
) -> Result<(), GatewayError> {
    let response = result.map_err(|_| GatewayError::Network)?;
    if !response.status().is_success() {
        return Err(map_error_response(response).await);
    }
    Ok(())
}
