use folio_types::{Category, Locale, ProjectMetadata, Status, parse_sortable_date};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;
use std::path::PathBuf;

const REQUIRED_TEXT: [&str; 3] = ["title", "description", "date"];
const OPTIONAL_TEXT: [&str; 5] = ["github", "buildUrl", "thumbnail", "video", "techDetails"];
const TEXT_LISTS: [&str; 2] = ["tags", "gallery"];

/// Category of metadata failure, used to group similar problems together.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", content = "field", rename_all = "snake_case")]
pub enum IssueKind {
    /// Front matter could not be split or parsed.
    Syntax,
    /// Required field is absent.
    MissingField(String),
    /// Field has the wrong type or a value outside its enumeration.
    InvalidValue(String),
    /// Required text field is empty or whitespace.
    Blank(String),
    /// `date` is not a zero-padded YYYY-MM-DD date.
    InvalidDate,
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueKind::Syntax => write!(f, "syntax"),
            IssueKind::MissingField(field) => write!(f, "missing_field ({})", field),
            IssueKind::InvalidValue(field) => write!(f, "invalid_value ({})", field),
            IssueKind::Blank(field) => write!(f, "blank ({})", field),
            IssueKind::InvalidDate => write!(f, "invalid_date"),
        }
    }
}

/// A single schema violation, before it is tied to a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub kind: IssueKind,
    pub reason: String,
}

impl Violation {
    pub fn new(kind: IssueKind, reason: impl Into<String>) -> Self {
        Self {
            kind,
            reason: reason.into(),
        }
    }

    /// Attach the document this violation was found in.
    pub fn at(self, locale: &Locale, slug: &str, path: &std::path::Path) -> DocumentIssue {
        DocumentIssue {
            locale: locale.clone(),
            slug: slug.to_string(),
            path: path.to_path_buf(),
            kind: self.kind,
            reason: self.reason,
        }
    }
}

/// A malformed-document report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentIssue {
    pub locale: Locale,
    pub slug: String,
    pub path: PathBuf,
    pub kind: IssueKind,
    pub reason: String,
}

impl fmt::Display for DocumentIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.path.display(), self.kind, self.reason)
    }
}

/// Check a parsed metadata block against the project schema.
///
/// Returns every violation found; an empty list means the block will
/// deserialize into [`ProjectMetadata`].
pub fn validate(map: &Map<String, Value>) -> Vec<Violation> {
    let mut violations = Vec::new();

    for field in REQUIRED_TEXT {
        match map.get(field) {
            None => violations.push(Violation::new(
                IssueKind::MissingField(field.to_string()),
                format!("Missing required field: {}", field),
            )),
            Some(Value::String(s)) if s.trim().is_empty() => violations.push(Violation::new(
                IssueKind::Blank(field.to_string()),
                format!("Field must not be blank: {}", field),
            )),
            Some(Value::String(_)) => {}
            Some(other) => violations.push(type_mismatch(field, "a string", other)),
        }
    }

    if let Some(Value::String(date)) = map.get("date")
        && !date.trim().is_empty()
        && parse_sortable_date(date).is_none()
    {
        violations.push(Violation::new(
            IssueKind::InvalidDate,
            format!("Date '{}' is not in YYYY-MM-DD form", date),
        ));
    }

    match map.get("category") {
        None => violations.push(Violation::new(
            IssueKind::MissingField("category".to_string()),
            "Missing required field: category",
        )),
        Some(Value::String(s)) => {
            if let Err(err) = s.parse::<Category>() {
                violations.push(Violation::new(
                    IssueKind::InvalidValue("category".to_string()),
                    format!("{} (expected one of: school, personal, professional)", err),
                ));
            }
        }
        Some(other) => violations.push(type_mismatch("category", "a string", other)),
    }

    match map.get("status") {
        None => {}
        Some(Value::String(s)) => {
            if let Err(err) = s.parse::<Status>() {
                violations.push(Violation::new(
                    IssueKind::InvalidValue("status".to_string()),
                    format!(
                        "{} (expected one of: active, paused, stable, maintenance, archived)",
                        err
                    ),
                ));
            }
        }
        Some(other) => violations.push(type_mismatch("status", "a string", other)),
    }

    for field in OPTIONAL_TEXT {
        if let Some(value) = map.get(field)
            && !value.is_string()
        {
            violations.push(type_mismatch(field, "a string", value));
        }
    }

    for field in TEXT_LISTS {
        if let Some(value) = map.get(field) {
            let ok = value
                .as_array()
                .is_some_and(|items| items.iter().all(Value::is_string));
            if !ok {
                violations.push(type_mismatch(field, "a list of strings", value));
            }
        }
    }

    if let Some(value) = map.get("featured")
        && !value.is_boolean()
    {
        violations.push(type_mismatch("featured", "true or false", value));
    }

    violations
}

/// Validate a metadata block and build the typed metadata for `slug`.
pub fn into_metadata(
    slug: &str,
    map: Map<String, Value>,
) -> std::result::Result<ProjectMetadata, Vec<Violation>> {
    let violations = validate(&map);
    if !violations.is_empty() {
        return Err(violations);
    }

    serde_json::from_value::<ProjectMetadata>(Value::Object(map))
        .map(|metadata| metadata.with_slug(slug))
        .map_err(|e| vec![Violation::new(IssueKind::Syntax, e.to_string())])
}

fn type_mismatch(field: &str, expected: &str, got: &Value) -> Violation {
    Violation::new(
        IssueKind::InvalidValue(field.to_string()),
        format!(
            "Type mismatch for field {}: expected {}, got {}",
            field,
            expected,
            json_type_name(got)
        ),
    )
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "mapping",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    fn minimal() -> Map<String, Value> {
        map(json!({
            "title": "Alpha",
            "description": "First",
            "date": "2024-03-01",
            "category": "personal"
        }))
    }

    #[test]
    fn test_minimal_metadata_is_valid() {
        assert!(validate(&minimal()).is_empty());
        let metadata = into_metadata("alpha", minimal()).unwrap();
        assert_eq!(metadata.slug, "alpha");
        assert!(metadata.tags.is_empty());
    }

    #[test]
    fn test_missing_fields_are_reported() {
        let violations = validate(&Map::new());
        let kinds: Vec<IssueKind> = violations.into_iter().map(|v| v.kind).collect();
        assert_eq!(
            kinds,
            vec![
                IssueKind::MissingField("title".to_string()),
                IssueKind::MissingField("description".to_string()),
                IssueKind::MissingField("date".to_string()),
                IssueKind::MissingField("category".to_string()),
            ]
        );
    }

    #[test]
    fn test_out_of_enumeration_values() {
        let mut m = minimal();
        m.insert("category".to_string(), json!("hobby"));
        m.insert("status".to_string(), json!("done"));
        let kinds: Vec<IssueKind> = validate(&m).into_iter().map(|v| v.kind).collect();
        assert_eq!(
            kinds,
            vec![
                IssueKind::InvalidValue("category".to_string()),
                IssueKind::InvalidValue("status".to_string()),
            ]
        );
    }

    #[test]
    fn test_blank_and_bad_date() {
        let mut m = minimal();
        m.insert("title".to_string(), json!("   "));
        m.insert("date".to_string(), json!("2024-3-1"));
        let kinds: Vec<IssueKind> = validate(&m).into_iter().map(|v| v.kind).collect();
        assert_eq!(
            kinds,
            vec![IssueKind::Blank("title".to_string()), IssueKind::InvalidDate]
        );
    }

    #[test]
    fn test_type_mismatches() {
        let mut m = minimal();
        m.insert("tags".to_string(), json!("rust"));
        m.insert("featured".to_string(), json!("yes"));
        m.insert("github".to_string(), json!(42));
        let violations = validate(&m);
        assert_eq!(violations.len(), 3);
        assert!(
            violations
                .iter()
                .any(|v| v.reason == "Type mismatch for field tags: expected a list of strings, got string")
        );
    }
}
