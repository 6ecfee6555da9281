//! API Requests
//!
//! Transport-independent description of the REST calls.

use std::fmt;

/// HTTP method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// One multipart form-data part
#[derive(Debug, Clone)]
pub enum Part {
    Text(String),
    File(web_sys::File),
}

/// Request body
#[derive(Debug, Clone)]
pub enum Body {
    Empty,
    Json(serde_json::Value),
    Multipart(Vec<(String, Part)>),
}

/// A request against the API base, e.g. `GET /notices`
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the API base, always starting with '/'
    pub path: String,
    pub body: Body,
}

impl ApiRequest {
    /// Fetch a whole collection
    pub fn list(collection: &str) -> Self {
        Self {
            method: Method::Get,
            path: format!("/{}", collection),
            body: Body::Empty,
        }
    }

    /// Create (no id) or update (with id)
    pub fn save(collection: &str, id: Option<u64>, body: Body) -> Self {
        match id {
            Some(id) => Self {
                method: Method::Put,
                path: format!("/{}/{}", collection, id),
                body,
            },
            None => Self {
                method: Method::Post,
                path: format!("/{}", collection),
                body,
            },
        }
    }

    pub fn delete(collection: &str, id: u64) -> Self {
        Self {
            method: Method::Delete,
            path: format!("/{}/{}", collection, id),
            body: Body::Empty,
        }
    }

    /// Upload a single image file as the `image` part
    pub fn upload(collection: &str, file: web_sys::File) -> Self {
        Self {
            method: Method::Post,
            path: format!("/{}", collection),
            body: Body::Multipart(vec![("image".to_string(), Part::File(file))]),
        }
    }
}
