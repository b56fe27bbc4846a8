use super::ApiError;
use common::response::Envelope;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub fn get_base_url() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

async fn check(response: Response) -> Result<Response, ApiError> {
    if !response.ok() {
        return Err(ApiError::Http {
            status: response.status(),
            text: response.status_text(),
        });
    }
    Ok(response)
}

async fn decode<E>(response: Response) -> Result<E::Payload, ApiError>
where
    E: Envelope + DeserializeOwned,
{
    let envelope: E = check(response)
        .await?
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(envelope.into_result()?)
}

/// `GET url?query`, decoding a `{success, ...}` envelope.
pub async fn get_envelope<E>(url: &str, query: &[(&str, &str)]) -> Result<E::Payload, ApiError>
where
    E: Envelope + DeserializeOwned,
{
    log::debug!("GET {}", url);
    let response = Request::get(url)
        .query(query.iter().copied())
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode::<E>(response).await
}

/// `GET url` for endpoints returning a bare JSON document.
pub async fn get_json<T>(url: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    log::debug!("GET {}", url);
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check(response)
        .await?
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// `POST url` with an optional JSON body, decoding a `{success, ...}` envelope.
pub async fn post_envelope<E, B>(url: &str, body: Option<&B>) -> Result<E::Payload, ApiError>
where
    E: Envelope + DeserializeOwned,
    B: Serialize,
{
    log::debug!("POST {}", url);
    let builder = Request::post(url);
    let sent = match body {
        Some(body) => builder
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await,
        None => builder.send().await,
    };
    let response = sent.map_err(|e| ApiError::Network(e.to_string()))?;
    decode::<E>(response).await
}
