use serde::Serialize;
use serde_json::{Map, Value};

/// One result row as column name to JSON value, in select-list order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn new() -> Self {
        Self(Map::new())
    }

    pub fn insert(&mut self, column: impl Into<String>, value: Value) {
        self.0.insert(column.into(), value);
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.0.get(column)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|k| k.as_str())
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_in_insertion_order() {
        let mut record = Record::new();
        record.insert("id1", json!(1));
        record.insert("foo1", json!("a"));
        record.insert("bar1", Value::Null);

        let text = serde_json::to_string(&record).unwrap();
        assert_eq!(text, r#"{"id1":1,"foo1":"a","bar1":null}"#);
        assert_eq!(record.columns().collect::<Vec<_>>(), vec!["id1", "foo1", "bar1"]);
    }
}
