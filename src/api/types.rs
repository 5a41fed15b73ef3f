use serde::Serialize;
use serde_json::Value;

/// One rejected query parameter, in the shape clients of the original
/// service already parse.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FieldError {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub loc: (&'static str, String),
    pub msg: &'static str,
    pub input: Value,
}

impl FieldError {
    pub fn missing(name: &str) -> Self {
        Self {
            kind: "missing",
            loc: ("query", name.to_string()),
            msg: "Field required",
            input: Value::Null,
        }
    }

    pub fn int_parsing(name: &str, input: &str) -> Self {
        Self {
            kind: "int_parsing",
            loc: ("query", name.to_string()),
            msg: "Input should be a valid integer, unable to parse string as an integer",
            input: Value::from(input),
        }
    }

    pub fn bool_parsing(name: &str, input: &str) -> Self {
        Self {
            kind: "bool_parsing",
            loc: ("query", name.to_string()),
            msg: "Input should be a valid boolean, unable to interpret input",
            input: Value::from(input),
        }
    }

    pub fn malformed(input: &str) -> Self {
        Self {
            kind: "query_parsing",
            loc: ("query", String::new()),
            msg: "Query string could not be parsed",
            input: Value::from(input),
        }
    }
}

/// Error body: `detail` is a message for 4xx/5xx, or a list of field errors for 422.
#[derive(Debug, Serialize)]
pub struct ErrorResponse<T: Serialize> {
    pub detail: T,
}
