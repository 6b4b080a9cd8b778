use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// HTML-wrapped text exactly as the REST API renders it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Rendered {
    #[serde(default)]
    pub rendered: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MediaRecord {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub source_url: String,
    #[serde(default)]
    pub alt_text: String,
    #[serde(default)]
    pub media_type: String,
    #[serde(default)]
    pub mime_type: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Embedded {
    #[serde(rename = "wp:featuredmedia", default)]
    pub featured_media: Vec<MediaRecord>,
}

/// A page as returned by `GET /pages`. The `acf` map is left untyped since
/// its keys are page-specific and its values arrive in several shapes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageRecord {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub title: Rendered,
    #[serde(default)]
    pub content: Rendered,
    #[serde(default)]
    pub acf: Value,
    #[serde(default)]
    pub featured_media: Value,
    #[serde(rename = "_embedded", default)]
    pub embedded: Option<Embedded>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostRecord {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub title: Rendered,
    #[serde(default)]
    pub excerpt: Rendered,
    #[serde(default)]
    pub acf: Value,
    #[serde(rename = "_embedded", default)]
    pub embedded: Option<Embedded>,
}

impl PageRecord {
    /// Custom-field map; the plugin sends `false` instead of an object when
    /// a page has no fields, so anything non-object collapses to empty.
    pub fn fields(&self) -> Map<String, Value> {
        self.acf.as_object().cloned().unwrap_or_default()
    }
}

impl PostRecord {
    pub fn fields(&self) -> Map<String, Value> {
        self.acf.as_object().cloned().unwrap_or_default()
    }
}

/// A fetched record's custom fields merged with its built-in title/content,
/// before any shape normalization.
#[derive(Debug, Clone, Default)]
pub struct RawContent {
    pub fields: Map<String, Value>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub featured_media: Option<Value>,
    pub embedded_media: Vec<MediaRecord>,
}

impl RawContent {
    pub fn from_page(page: &PageRecord) -> Self {
        Self {
            fields: page.fields(),
            title: non_empty(&page.title.rendered),
            content: non_empty(&page.content.rendered),
            // The API sends 0 for "no featured media".
            featured_media: match &page.featured_media {
                Value::Null => None,
                Value::Number(n) if n.as_u64() == Some(0) => None,
                value => Some(value.clone()),
            },
            embedded_media: page
                .embedded
                .as_ref()
                .map(|e| e.featured_media.clone())
                .unwrap_or_default(),
        }
    }

    /// The site-wide options endpoint wraps fields in `{ "acf": {..} }`;
    /// some configurations return the map bare.
    pub fn from_options(value: &Value) -> Self {
        let fields = value
            .get("acf")
            .and_then(Value::as_object)
            .or_else(|| value.as_object())
            .cloned()
            .unwrap_or_default();
        Self {
            fields,
            ..Default::default()
        }
    }

    /// A named field, present and populated.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name).filter(|v| value_is_populated(v))
    }

    pub fn is_populated(&self, name: &str) -> bool {
        match self.fields.get(name) {
            Some(value) => value_is_populated(value),
            // Built-in title/content back their custom-field namesakes.
            None => match name {
                "title" => self.title.is_some(),
                "content" => self.content.is_some(),
                _ => false,
            },
        }
    }

    /// True when at least one of `names` is populated; with no names given,
    /// any non-empty record counts.
    pub fn has_any(&self, names: &[&str]) -> bool {
        if names.is_empty() {
            return !self.fields.is_empty() || self.title.is_some();
        }
        names.iter().any(|name| self.is_populated(name))
    }
}

fn non_empty(text: &str) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

pub(crate) fn value_is_populated(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
        Value::Bool(_) | Value::Number(_) => true,
    }
}
