//! YAML to value-tree conversion

use serde_json::{Map, Number, Value};
use serde_yaml::Value as YamlValue;

use crate::core::ports::StructuredParser;

/// `StructuredParser` for YAML task files
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlParser;

impl StructuredParser for YamlParser {
    fn format_name(&self) -> &'static str {
        "YAML"
    }

    fn parse(&self, raw: &str) -> Result<Value, String> {
        let mut yaml: YamlValue = serde_yaml::from_str(raw).map_err(|err| err.to_string())?;
        // `<<: *anchor` stays a literal key until merged
        yaml.apply_merge().map_err(|err| err.to_string())?;
        Ok(to_value(yaml))
    }
}

fn to_value(yaml: YamlValue) -> Value {
    match yaml {
        YamlValue::Null => Value::Null,
        YamlValue::Bool(b) => Value::Bool(b),
        YamlValue::Number(n) => number_value(&n),
        YamlValue::String(s) => Value::String(s),
        YamlValue::Sequence(items) => Value::Array(items.into_iter().map(to_value).collect()),
        YamlValue::Mapping(mapping) => {
            let mut map = Map::new();
            for (key, value) in mapping {
                map.insert(key_text(&key), to_value(value));
            }
            Value::Object(map)
        },
        YamlValue::Tagged(tagged) => to_value(tagged.value),
    }
}

fn number_value(n: &serde_yaml::Number) -> Value {
    if let Some(i) = n.as_i64() {
        Value::from(i)
    } else if let Some(u) = n.as_u64() {
        Value::from(u)
    } else {
        // .nan and .inf have no JSON number form
        n.as_f64()
            .and_then(Number::from_f64)
            .map_or_else(|| Value::String(n.to_string()), Value::Number)
    }
}

/// Mapping keys become text; non-text keys use their YAML rendering
fn key_text(key: &YamlValue) -> String {
    match key {
        YamlValue::String(s) => s.clone(),
        YamlValue::Bool(b) => b.to_string(),
        YamlValue::Number(n) => n.to_string(),
        YamlValue::Null => "null".to_string(),
        other => serde_yaml::to_string(other).map(|s| s.trim_end().to_string()).unwrap_or_default(),
    }
}
