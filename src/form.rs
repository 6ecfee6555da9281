//! Record Form State
//!
//! Values behind an admin create/update form.

use serde_json::{Map, Value};

use crate::commands::{ApiRequest, Body, Part};
use crate::models::{Editable, Field};

/// Form contents. `id` is set while editing an existing record.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordForm {
    pub id: Option<u64>,
    /// Aligned with the record's `FIELDS`
    pub values: Vec<String>,
    /// A file was picked since this form was last blanked or loaded
    pub file_chosen: bool,
}

impl RecordForm {
    pub fn blank(fields: &[Field]) -> Self {
        Self {
            id: None,
            values: vec![String::new(); fields.len()],
            file_chosen: false,
        }
    }

    /// Form pre-filled for updating `record`
    pub fn editing<R: Editable>(record: &R) -> Self {
        Self {
            id: Some(record.id()),
            values: record.values(),
            file_chosen: false,
        }
    }

    /// Load `record` for editing, dropping any file picked before
    pub fn edit<R: Editable>(&mut self, record: &R) {
        *self = Self::editing(record);
    }

    /// Back to an empty create form
    pub fn reset(&mut self, fields: &[Field]) {
        *self = Self::blank(fields);
    }

    pub fn choose_file(&mut self) {
        self.file_chosen = true;
    }

    /// The picked file, if it was picked for the current form contents
    pub fn file_to_send<F>(&self, picked: Option<F>) -> Option<F> {
        picked.filter(|_| self.file_chosen)
    }

    pub fn value(&self, index: usize) -> String {
        self.values.get(index).cloned().unwrap_or_default()
    }

    pub fn set_value(&mut self, index: usize, value: String) {
        if let Some(slot) = self.values.get_mut(index) {
            *slot = value;
        }
    }

    /// Text fields as a JSON object, e.g. `{"title": .., "url": ..}`
    pub fn json_body(&self, fields: &[Field]) -> Value {
        let mut map = Map::new();
        for (field, value) in fields.iter().zip(&self.values) {
            if !field.is_file() {
                map.insert(field.name.to_string(), Value::String(value.clone()));
            }
        }
        Value::Object(map)
    }

    /// JSON body, or multipart when a file was chosen for a file field
    pub fn body(&self, fields: &[Field], file: Option<web_sys::File>) -> Body {
        let Some(file) = file else {
            return Body::Json(self.json_body(fields));
        };
        let mut parts = Vec::new();
        for (field, value) in fields.iter().zip(&self.values) {
            if field.is_file() {
                parts.push((field.name.to_string(), Part::File(file.clone())));
            } else {
                parts.push((field.name.to_string(), Part::Text(value.clone())));
            }
        }
        Body::Multipart(parts)
    }

    /// Create when `id` is empty, update that id otherwise
    pub fn request<R: Editable>(&self, picked: Option<web_sys::File>) -> ApiRequest {
        ApiRequest::save(R::COLLECTION, self.id, self.body(R::FIELDS, self.file_to_send(picked)))
    }
}
