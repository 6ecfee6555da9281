//! Frontend Models
//!
//! Data structures matching backend records.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A record type served under `/api/<COLLECTION>`
pub trait Record: Clone + PartialEq + DeserializeOwned + Send + Sync + 'static {
    /// Path segment of the collection, e.g. "notices"
    const COLLECTION: &'static str;
    /// Singular noun used in prompts
    const NOUN: &'static str;

    fn id(&self) -> u64;
}

/// How a form field is edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Url,
    /// Optional file upload, sent as a multipart part
    Image,
}

/// Form field description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// JSON / form-data key
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

impl Field {
    pub fn is_file(&self) -> bool {
        self.kind == FieldKind::Image
    }
}

/// A record editable through a generic admin panel
pub trait Editable: Record {
    const FIELDS: &'static [Field];

    /// Current values, aligned with `FIELDS` (file fields are empty)
    fn values(&self) -> Vec<String>;
}

/// Notice (ticker text)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub id: u64,
    pub text: String,
}

impl Record for Notice {
    const COLLECTION: &'static str = "notices";
    const NOUN: &'static str = "notice";

    fn id(&self) -> u64 {
        self.id
    }
}

impl Editable for Notice {
    const FIELDS: &'static [Field] = &[Field { name: "text", label: "Notice", kind: FieldKind::Text }];

    fn values(&self) -> Vec<String> {
        vec![self.text.clone()]
    }
}

/// External resource link
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub id: u64,
    pub title: String,
    pub url: String,
    /// Uploaded thumbnail filename
    #[serde(default)]
    pub image: Option<String>,
}

impl Record for Link {
    const COLLECTION: &'static str = "links";
    const NOUN: &'static str = "link";

    fn id(&self) -> u64 {
        self.id
    }
}

impl Editable for Link {
    const FIELDS: &'static [Field] = &[
        Field { name: "title", label: "Title", kind: FieldKind::Text },
        Field { name: "url", label: "URL", kind: FieldKind::Url },
        Field { name: "image", label: "Thumbnail", kind: FieldKind::Image },
    ];

    fn values(&self) -> Vec<String> {
        vec![self.title.clone(), self.url.clone(), String::new()]
    }
}

/// Uploaded gallery image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: u64,
    pub filename: String,
}

impl Record for GalleryImage {
    const COLLECTION: &'static str = "gallery";
    const NOUN: &'static str = "gallery image";

    fn id(&self) -> u64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_backend_lists() {
        let notices: Vec<Notice> = serde_json::from_str(r#"[{"id": 1717000000, "text": "Hello"}]"#).unwrap();
        assert_eq!(notices, vec![Notice { id: 1717000000, text: "Hello".to_string() }]);

        let links: Vec<Link> = serde_json::from_str(
            r#"[{"id": 1, "title": "Docs", "url": "https://example.org", "image": "docs.png"},
                {"id": 2, "title": "Wiki", "url": "https://wiki.example.org"}]"#,
        )
        .unwrap();
        assert_eq!(links[0].image.as_deref(), Some("docs.png"));
        assert_eq!(links[1].image, None);

        let images: Vec<GalleryImage> = serde_json::from_str(r#"[{"id": 3, "filename": "a.jpg"}]"#).unwrap();
        assert_eq!(images[0].filename, "a.jpg");
    }

    #[test]
    fn test_values_align_with_fields() {
        let link = Link { id: 1, title: "Docs".into(), url: "https://example.org".into(), image: None };
        assert_eq!(link.values().len(), Link::FIELDS.len());
        assert!(Link::FIELDS[2].is_file());

        let notice = Notice { id: 1, text: "Hi".into() };
        assert_eq!(notice.values(), vec!["Hi".to_string()]);
    }
}
