//! HTTP Transport
//!
//! Sends `ApiRequest`s to the backend with gloo-net.

use gloo_net::http::{Request, RequestBuilder};

use super::request::{ApiRequest, Body, Method, Part};
use super::{ApiError, Transport};

/// Browser fetch transport rooted at the API base URL
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }
}

fn js_err(e: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Network(format!("{:?}", e))
}

fn network_err(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

fn multipart(parts: Vec<(String, Part)>) -> Result<web_sys::FormData, ApiError> {
    let form = web_sys::FormData::new().map_err(js_err)?;
    for (name, part) in parts {
        match part {
            Part::Text(value) => form.append_with_str(&name, &value).map_err(js_err)?,
            Part::File(file) => form.append_with_blob_and_filename(&name, &file, &file.name()).map_err(js_err)?,
        }
    }
    Ok(form)
}

impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<String, ApiError> {
        let url = format!("{}{}", self.base_url, request.path);
        let builder: RequestBuilder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };

        let response = match request.body {
            Body::Empty => builder.send().await,
            // Sets Content-Type: application/json
            Body::Json(value) => builder.json(&value).map_err(network_err)?.send().await,
            // Browser sets the multipart boundary itself
            Body::Multipart(parts) => builder.body(multipart(parts)?).map_err(network_err)?.send().await,
        }
        .map_err(network_err)?;

        if !response.ok() {
            let status = response.status();
            let message = format!("{} {} -> HTTP {}", request.method, url, status);
            web_sys::console::error_1(&format!("[HTTP] {}", message).into());
            return Err(ApiError::Status { status, message });
        }
        response.text().await.map_err(network_err)
    }
}
