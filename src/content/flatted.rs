//! Decoder for the flatted JSON layout.
//!
//! A flatted document is a JSON array. Entry `0` is the root. Every object
//! and every string is stored once as a top-level entry. Inside objects and
//! arrays, each string is the decimal index of the entry it refers to, while
//! numbers, booleans and `null` are stored inline.
//!
//! Shared entries are expanded into copies. Cycles are rejected because the
//! output is a plain [`serde_json::Value`] tree.

use serde_json::{Map, Value};

use super::error::LoaderError;

/// Deepest chain of nested references accepted before giving up.
pub const MAX_DEPTH: usize = 128;

/// Decode a flatted document into a plain JSON tree.
pub fn parse(text: &str) -> Result<Value, LoaderError> {
    let input: Value = serde_json::from_str(text)?;
    let entries = match input {
        Value::Array(entries) => entries,
        other => {
            return Err(LoaderError::Malformed(format!(
                "expected a top-level array, found {}",
                kind_of(&other)
            )))
        }
    };
    if entries.is_empty() {
        return Err(LoaderError::Malformed("empty document".into()));
    }

    Reviver::new(&entries).revive(0, 0)
}

struct Reviver<'a> {
    entries: &'a [Value],
    done: Vec<Option<Value>>,
    in_progress: Vec<bool>,
}

impl<'a> Reviver<'a> {
    fn new(entries: &'a [Value]) -> Self {
        Reviver {
            entries,
            done: vec![None; entries.len()],
            in_progress: vec![false; entries.len()],
        }
    }

    fn revive(&mut self, index: usize, depth: usize) -> Result<Value, LoaderError> {
        if let Some(value) = &self.done[index] {
            return Ok(value.clone());
        }
        if self.in_progress[index] {
            return Err(LoaderError::Cycle(index));
        }
        if depth > MAX_DEPTH {
            return Err(LoaderError::Malformed(format!(
                "reference chain deeper than {} levels at entry {}",
                MAX_DEPTH, index
            )));
        }
        self.in_progress[index] = true;

        let entries = self.entries;
        let revived = match &entries[index] {
            Value::Object(obj) => {
                let mut out = Map::with_capacity(obj.len());
                for (key, value) in obj {
                    out.insert(key.clone(), self.resolve(value, depth)?);
                }
                Value::Object(out)
            }
            Value::Array(items) => {
                let mut out = Vec::with_capacity(items.len());
                for value in items {
                    out.push(self.resolve(value, depth)?);
                }
                Value::Array(out)
            }
            primitive => primitive.clone(),
        };

        self.in_progress[index] = false;
        self.done[index] = Some(revived.clone());
        Ok(revived)
    }

    /// Resolve a value found inside an object or array.
    fn resolve(&mut self, value: &Value, depth: usize) -> Result<Value, LoaderError> {
        match value {
            Value::String(reference) => {
                let index = reference
                    .parse::<usize>()
                    .map_err(|_| LoaderError::Malformed(format!("invalid reference {:?}", reference)))?;
                if index >= self.entries.len() {
                    return Err(LoaderError::Malformed(format!(
                        "reference {} out of range (document has {} entries)",
                        index,
                        self.entries.len()
                    )));
                }
                self.revive(index, depth + 1)
            }
            // flatted never nests containers inline; accept them anyway
            Value::Object(_) | Value::Array(_) => Err(LoaderError::Malformed(
                "inline container where a reference was expected".into(),
            )),
            primitive => Ok(primitive.clone()),
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_root_string() {
        assert_eq!(parse(r#"["hello"]"#).unwrap(), json!("hello"));
    }

    #[test]
    fn test_nested_references() {
        let doc = r#"[{"a":"1","n":3,"nil":null},{"b":"2"},"text"]"#;
        assert_eq!(
            parse(doc).unwrap(),
            json!({"a": {"b": "text"}, "n": 3, "nil": null})
        );
    }

    #[test]
    fn test_shared_reference_is_copied() {
        let doc = r#"[["1","1"],{"x":true}]"#;
        assert_eq!(parse(doc).unwrap(), json!([{"x": true}, {"x": true}]));
    }

    #[test]
    fn test_cycle_is_rejected() {
        let doc = r#"[{"self":"0"}]"#;
        assert!(matches!(parse(doc), Err(LoaderError::Cycle(0))));
    }

    #[test]
    fn test_bad_reference() {
        assert!(matches!(parse(r#"[{"a":"x"}]"#), Err(LoaderError::Malformed(_))));
        assert!(matches!(parse(r#"[{"a":"9"}]"#), Err(LoaderError::Malformed(_))));
    }

    fn chain(hops: usize) -> String {
        let mut entries: Vec<String> = (1..=hops).map(|i| format!(r#"["{}"]"#, i)).collect();
        entries.push("[]".to_string());
        format!("[{}]", entries.join(","))
    }

    #[test]
    fn test_deep_chain_is_rejected() {
        let err = parse(&chain(50_000)).unwrap_err();
        assert!(matches!(err, LoaderError::Malformed(msg) if msg.contains("deeper than")));
    }

    #[test]
    fn test_chain_within_limit() {
        let value = parse(&chain(MAX_DEPTH)).unwrap();
        let mut node = &value;
        let mut depth = 0;
        while let Some(inner) = node.as_array().and_then(|a| a.first()) {
            node = inner;
            depth += 1;
        }
        assert_eq!(depth, MAX_DEPTH);
    }

    #[test]
    fn test_not_an_array() {
        assert!(matches!(parse(r#"{"a":1}"#), Err(LoaderError::Malformed(_))));
        assert!(matches!(parse("[]"), Err(LoaderError::Malformed(_))));
        assert!(matches!(parse("nope"), Err(LoaderError::Json(_))));
    }
}
