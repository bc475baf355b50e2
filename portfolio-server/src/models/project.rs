//! Project record and writable fields

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use super::ValidationError;

/// A row of `public.projetos`.
///
/// Every column except `id` is nullable: an update writes whatever the
/// caller sent, including nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Project {
    pub id: i32,
    pub title: Option<String>,
    pub language: Option<String>,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: Option<String>,
    pub description: Option<String>,
    /// Unquoted `imageUrl` in the DDL, so Postgres stores it as `imageurl`
    #[serde(rename = "imageUrl")]
    #[sqlx(rename = "imageurl")]
    pub image_url: Option<String>,
}

impl Project {
    /// Build a row from fields, as an INSERT/UPDATE would store it.
    pub fn from_fields(id: i32, fields: ProjectFields) -> Self {
        Self {
            id,
            title: fields.title,
            language: fields.language,
            kind: fields.kind,
            description: fields.description,
            image_url: fields.image_url,
        }
    }
}

/// Writable project columns as received from a caller.
///
/// Unknown keys (including `id`) are ignored. Scalars of any JSON type are
/// stored as their text form; null or missing is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawFields")]
pub struct ProjectFields {
    pub title: Option<String>,
    pub language: Option<String>,
    pub kind: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

/// Wire shape of `ProjectFields`. `imageUrl` wins over the folded
/// `imageurl` spelling when both are sent.
#[derive(Deserialize)]
struct RawFields {
    #[serde(default, deserialize_with = "lenient_text")]
    title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    language: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "lenient_text")]
    kind: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    description: Option<String>,
    #[serde(rename = "imageUrl", default, deserialize_with = "lenient_text")]
    image_url: Option<String>,
    #[serde(rename = "imageurl", default, deserialize_with = "lenient_text")]
    image_url_folded: Option<String>,
}

impl From<RawFields> for ProjectFields {
    fn from(raw: RawFields) -> Self {
        Self {
            title: raw.title,
            language: raw.language,
            kind: raw.kind,
            description: raw.description,
            image_url: raw.image_url.or(raw.image_url_folded),
        }
    }
}

/// Strings as-is, other non-null values as their JSON text.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}

impl ProjectFields {
    /// Check the fields a new project must carry: `title` and `description`,
    /// both present and non-empty.
    pub fn validate_new(&self) -> Result<(), ValidationError> {
        let missing: Vec<&'static str> = [("title", &self.title), ("description", &self.description)]
            .into_iter()
            .filter(|(_, value)| value.as_deref().map_or(true, str::is_empty))
            .map(|(field, _)| field)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::Missing { fields: missing })
        }
    }
}
