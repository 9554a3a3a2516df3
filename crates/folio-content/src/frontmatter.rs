use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontMatterFormat {
    /// `---` delimited YAML
    Yaml,
    /// `+++` delimited TOML
    Toml,
    /// No front matter block
    None,
}

/// A document split into its metadata block and markdown body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatter<'a> {
    pub format: FrontMatterFormat,
    pub block: &'a str,
    pub body: &'a str,
}

/// Split raw document text into front matter and body.
///
/// A document that does not open with a delimiter line has an empty block
/// and its whole text as body. An opened block without a closing line is an
/// error.
pub fn split(text: &str) -> Result<FrontMatter<'_>, String> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let (first, block_start) = next_line(text, 0);
    let delimiter = first.trim_end();
    let format = match delimiter {
        "---" => FrontMatterFormat::Yaml,
        "+++" => FrontMatterFormat::Toml,
        _ => {
            return Ok(FrontMatter {
                format: FrontMatterFormat::None,
                block: "",
                body: text,
            });
        }
    };

    let mut pos = block_start;
    while pos < text.len() {
        let (line, next) = next_line(text, pos);
        if line.trim_end() == delimiter {
            return Ok(FrontMatter {
                format,
                block: &text[block_start..pos],
                body: &text[next..],
            });
        }
        pos = next;
    }

    Err(format!(
        "unterminated front matter: missing closing '{}'",
        delimiter
    ))
}

fn next_line(text: &str, start: usize) -> (&str, usize) {
    match text[start..].find('\n') {
        Some(i) => (&text[start..start + i], start + i + 1),
        None => (&text[start..], text.len()),
    }
}

/// Parse a metadata block into a JSON object.
///
/// Keys with a null value are dropped so that `key:` with nothing after it
/// reads the same as an absent key.
pub fn parse_block(format: FrontMatterFormat, block: &str) -> Result<Map<String, Value>, String> {
    let value = match format {
        FrontMatterFormat::None => return Ok(Map::new()),
        FrontMatterFormat::Yaml => {
            if block.trim().is_empty() {
                return Ok(Map::new());
            }
            serde_yaml::from_str::<Value>(block).map_err(|e| format!("invalid YAML: {}", e))?
        }
        FrontMatterFormat::Toml => {
            let table: toml::Table =
                toml::from_str(block).map_err(|e| format!("invalid TOML: {}", e.message()))?;
            toml_to_json(toml::Value::Table(table))
        }
    };

    match value {
        Value::Object(mut map) => {
            map.retain(|_, v| !v.is_null());
            Ok(map)
        }
        Value::Null => Ok(Map::new()),
        _ => Err("front matter must be a key/value mapping".to_string()),
    }
}

fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::from(i),
        toml::Value::Float(f) => Value::from(f),
        toml::Value::Boolean(b) => Value::Bool(b),
        // Dates are plain strings in the catalog model
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect(),
        ),
    }
}
