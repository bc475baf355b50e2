//! The five statements the service issues against `public.projetos`
//!
//! Ids travel as the raw path string and are cast by Postgres, so a
//! non-numeric id fails in the store rather than in the handler.

use crate::models::ProjectFields;

const SELECT_ALL: &str =
    "SELECT id, title, language, type, description, imageurl FROM public.projetos ORDER BY id ASC";

const SELECT_ONE: &str = "SELECT id, title, language, type, description, imageurl \
     FROM public.projetos WHERE id = CAST($1 AS INTEGER)";

const INSERT: &str = "INSERT INTO public.projetos (title, language, type, description, imageurl) \
     VALUES ($1, $2, $3, $4, $5) \
     RETURNING id, title, language, type, description, imageurl";

const UPDATE: &str = "UPDATE public.projetos \
     SET title = $1, language = $2, type = $3, description = $4, imageurl = $5 \
     WHERE id = CAST($6 AS INTEGER) \
     RETURNING id, title, language, type, description, imageurl";

const DELETE: &str = "DELETE FROM public.projetos WHERE id = CAST($1 AS INTEGER) \
     RETURNING id, title, language, type, description, imageurl";

/// A single parameterized statement with its positional arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectStatement {
    List,
    Get { id: String },
    Insert(ProjectFields),
    /// Full-column replace; `None` fields are written as NULL
    Update { id: String, fields: ProjectFields },
    Delete { id: String },
}

impl ProjectStatement {
    /// Statement text with `$n` placeholders
    pub fn sql(&self) -> &'static str {
        match self {
            Self::List => SELECT_ALL,
            Self::Get { .. } => SELECT_ONE,
            Self::Insert(_) => INSERT,
            Self::Update { .. } => UPDATE,
            Self::Delete { .. } => DELETE,
        }
    }

    /// Arguments in placeholder order (`$1` first)
    pub fn args(&self) -> Vec<Option<&str>> {
        match self {
            Self::List => Vec::new(),
            Self::Get { id } | Self::Delete { id } => vec![Some(id.as_str())],
            Self::Insert(fields) => field_args(fields),
            Self::Update { id, fields } => {
                let mut args = field_args(fields);
                args.push(Some(id.as_str()));
                args
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Get { .. } => "get",
            Self::Insert(_) => "insert",
            Self::Update { .. } => "update",
            Self::Delete { .. } => "delete",
        }
    }
}

fn field_args(fields: &ProjectFields) -> Vec<Option<&str>> {
    vec![
        fields.title.as_deref(),
        fields.language.as_deref(),
        fields.kind.as_deref(),
        fields.description.as_deref(),
        fields.image_url.as_deref(),
    ]
}
