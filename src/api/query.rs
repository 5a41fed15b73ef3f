use std::collections::HashMap;

use crate::core::{IntParam, TestDataParams};

use super::types::FieldError;

pub const RECORDS: &str = "_records";
pub const TEXT_PARAM: &str = "_text_param";
pub const INT_PARAM: &str = "_int_param";
pub const TS_PARAM: &str = "_ts_param";
pub const BOOL_PARAM: &str = "_bool_param";

/// Builds parameters from decoded query pairs. The last occurrence of a
/// repeated key wins; unknown keys are ignored. All failures are reported.
pub fn parse_params(pairs: Vec<(String, String)>) -> Result<TestDataParams, Vec<FieldError>> {
    let query: HashMap<String, String> = pairs.into_iter().collect();
    let mut errors = Vec::new();

    let records = required(&query, RECORDS, &mut errors).and_then(|v| int(RECORDS, v, &mut errors));
    let text_param = required(&query, TEXT_PARAM, &mut errors).map(str::to_string);
    let int_param =
        required(&query, INT_PARAM, &mut errors).and_then(|v| int(INT_PARAM, v, &mut errors));
    let ts_param = required(&query, TS_PARAM, &mut errors).map(str::to_string);
    let bool_param =
        required(&query, BOOL_PARAM, &mut errors).and_then(|v| flag(BOOL_PARAM, v, &mut errors));

    match (records, text_param, int_param, ts_param, bool_param) {
        (Some(records), Some(text_param), Some(int_param), Some(ts_param), Some(bool_param))
            if errors.is_empty() =>
        {
            Ok(TestDataParams {
                records,
                text_param,
                int_param,
                ts_param,
                bool_param,
            })
        }
        _ => Err(errors),
    }
}

fn required<'a>(
    query: &'a HashMap<String, String>,
    name: &str,
    errors: &mut Vec<FieldError>,
) -> Option<&'a str> {
    let value = query.get(name).map(String::as_str);
    if value.is_none() {
        errors.push(FieldError::missing(name));
    }
    value
}

fn int(name: &str, value: &str, errors: &mut Vec<FieldError>) -> Option<IntParam> {
    match IntParam::parse(value) {
        Some(v) => Some(v),
        None => {
            errors.push(FieldError::int_parsing(name, value));
            None
        }
    }
}

fn flag(name: &str, value: &str, errors: &mut Vec<FieldError>) -> Option<bool> {
    match parse_bool(value) {
        Some(v) => Some(v),
        None => {
            errors.push(FieldError::bool_parsing(name, value));
            None
        }
    }
}

pub fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "t" | "yes" | "y" | "on" | "1" => Some(true),
        "false" | "f" | "no" | "n" | "off" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn full() -> Vec<(String, String)> {
        pairs(&[
            (RECORDS, "5"),
            (TEXT_PARAM, "foo"),
            (INT_PARAM, "1"),
            (TS_PARAM, "2024-01-01T00:00:00"),
            (BOOL_PARAM, "true"),
        ])
    }

    #[test]
    fn test_parse_full_query() {
        let params = parse_params(full()).unwrap();
        assert_eq!(
            params,
            TestDataParams {
                records: IntParam::from(5),
                text_param: "foo".into(),
                int_param: IntParam::from(1),
                ts_param: "2024-01-01T00:00:00".into(),
                bool_param: true,
            }
        );
    }

    #[rstest]
    #[case(RECORDS)]
    #[case(TEXT_PARAM)]
    #[case(INT_PARAM)]
    #[case(TS_PARAM)]
    #[case(BOOL_PARAM)]
    fn test_missing_param(#[case] name: &str) {
        let query: Vec<_> = full().into_iter().filter(|(k, _)| k != name).collect();
        let errors = parse_params(query).unwrap_err();
        assert_eq!(errors, vec![FieldError::missing(name)]);
    }

    #[test]
    fn test_reports_every_failure() {
        let errors = parse_params(pairs(&[(RECORDS, "x"), (BOOL_PARAM, "maybe")])).unwrap_err();
        let kinds: Vec<_> = errors.iter().map(|e| (e.kind, e.loc.1.as_str())).collect();
        assert_eq!(
            kinds,
            vec![
                ("int_parsing", RECORDS),
                ("missing", TEXT_PARAM),
                ("missing", INT_PARAM),
                ("missing", TS_PARAM),
                ("bool_parsing", BOOL_PARAM),
            ]
        );
    }

    #[rstest]
    #[case("1.5")]
    #[case("")]
    #[case("1e3")]
    #[case("0x10")]
    fn test_bad_int(#[case] raw: &str) {
        let mut query = full();
        query.push((INT_PARAM.to_string(), raw.to_string()));
        let errors = parse_params(query).unwrap_err();
        assert_eq!(errors, vec![FieldError::int_parsing(INT_PARAM, raw)]);
    }

    #[test]
    fn test_negative_and_large_ints_pass_through() {
        let mut query = full();
        query.push((RECORDS.to_string(), "-3".to_string()));
        query.push((INT_PARAM.to_string(), "99999999999999999999".to_string()));
        let params = parse_params(query).unwrap();
        assert_eq!(params.records, IntParam::from(-3));
        assert_eq!(params.int_param.as_str(), "99999999999999999999");
    }

    #[rstest]
    #[case(" 3", 3)]
    #[case("3 ", 3)]
    #[case("1.0", 1)]
    #[case("1_000", 1000)]
    fn test_lax_int_syntax(#[case] raw: &str, #[case] expected: i64) {
        let mut query = full();
        query.push((RECORDS.to_string(), raw.to_string()));
        assert_eq!(parse_params(query).unwrap().records, IntParam::from(expected));
    }

    #[test]
    fn test_last_occurrence_wins() {
        let mut query = full();
        query.push((TEXT_PARAM.to_string(), "bar".to_string()));
        assert_eq!(parse_params(query).unwrap().text_param, "bar");
    }

    #[test]
    fn test_empty_text_is_accepted() {
        let mut query = full();
        query.push((TEXT_PARAM.to_string(), String::new()));
        assert_eq!(parse_params(query).unwrap().text_param, "");
    }

    #[rstest]
    #[case("true", true)]
    #[case("True", true)]
    #[case("TRUE", true)]
    #[case("1", true)]
    #[case("yes", true)]
    #[case("on", true)]
    #[case("false", false)]
    #[case("False", false)]
    #[case("0", false)]
    #[case("off", false)]
    #[case("N", false)]
    fn test_bool_values(#[case] raw: &str, #[case] expected: bool) {
        assert_eq!(parse_bool(raw), Some(expected));
    }

    #[rstest]
    #[case("maybe")]
    #[case("")]
    #[case("2")]
    #[case("truee")]
    fn test_bad_bool(#[case] raw: &str) {
        let mut query = full();
        query.push((BOOL_PARAM.to_string(), raw.to_string()));
        let errors = parse_params(query).unwrap_err();
        assert_eq!(errors, vec![FieldError::bool_parsing(BOOL_PARAM, raw)]);
    }
}
