//! Runtime Configuration
//!
//! API location and upload path. Defaults can be overridden per deployment
//! with `<meta>` tags in index.html:
//!
//! ```html
//! <meta name="noticeboard-api-base" content="https://cms.example.org/api">
//! <meta name="noticeboard-uploads-prefix" content="/static/uploads/">
//! ```

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000/api";
pub const DEFAULT_UPLOADS_PREFIX: &str = "/static/uploads/";

const API_BASE_META: &str = "noticeboard-api-base";
const UPLOADS_PREFIX_META: &str = "noticeboard-uploads-prefix";

/// Characters escaped in an uploaded filename path segment
const FILENAME: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// API root without trailing slash
    pub api_base: String,
    /// Static path of uploaded files, with trailing slash
    pub uploads_prefix: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            uploads_prefix: DEFAULT_UPLOADS_PREFIX.to_string(),
        }
    }
}

impl ApiConfig {
    /// Apply overrides; blank values keep the defaults
    pub fn with_overrides(api_base: Option<String>, uploads_prefix: Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(base) = api_base.map(|s| s.trim().trim_end_matches('/').to_string()).filter(|s| !s.is_empty()) {
            config.api_base = base;
        }
        if let Some(prefix) = uploads_prefix.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()) {
            config.uploads_prefix = format!("{}/", prefix.trim_end_matches('/'));
        }
        config
    }

    /// Read overrides from the document's meta tags
    pub fn from_document() -> Self {
        let meta = |name: &str| -> Option<String> {
            let doc = web_sys::window()?.document()?;
            let el = doc.query_selector(&format!("meta[name=\"{}\"]", name)).ok()??;
            el.get_attribute("content")
        };
        Self::with_overrides(meta(API_BASE_META), meta(UPLOADS_PREFIX_META))
    }

    /// Public URL of an uploaded file
    pub fn upload_url(&self, filename: &str) -> String {
        format!("{}{}", self.uploads_prefix, utf8_percent_encode(filename, FILENAME))
    }
}
