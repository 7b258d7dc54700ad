use crate::domain::model::Entry;
use crate::utils::error::{NormalizeError, Result};
use serde_json::Value;
use std::collections::HashSet;

/// 依 `name` 去重，保留第一次出現的詞條。回傳去重後的列表與被移除的數量。
pub fn dedupe_by_name(entries: Vec<Entry>) -> (Vec<Entry>, usize) {
    let original_len = entries.len();
    let mut seen: HashSet<String> = HashSet::with_capacity(original_len);
    let mut unique = Vec::with_capacity(original_len);

    for entry in entries {
        if seen.contains(entry.name()) {
            tracing::trace!("Dropping duplicate entry: {}", entry.name());
            continue;
        }
        seen.insert(entry.name().to_string());
        unique.push(entry);
    }

    let removed = original_len - unique.len();
    (unique, removed)
}

/// Converts a raw `ukphone` value to its integer key.
///
/// Accepts JSON integers, finite floats (truncated toward zero) and
/// integer-like strings such as `" 42 "`, `"+7"`, `"-3"` or `"1_000"`.
pub fn parse_ukphone(value: &Value) -> std::result::Result<i64, String> {
    match value {
        Value::Number(number) => {
            if let Some(v) = number.as_i64() {
                Ok(v)
            } else if number.is_u64() {
                Err(format!("{} does not fit in a 64-bit signed integer", number))
            } else {
                let v = number
                    .as_f64()
                    .ok_or_else(|| format!("{} is not a number", number))?;
                float_to_i64(v)
            }
        }
        Value::String(text) => parse_integer_str(text),
        Value::Null => Err("value is null".to_string()),
        other => Err(format!("{} cannot be converted to an integer", other)),
    }
}

fn float_to_i64(v: f64) -> std::result::Result<i64, String> {
    if !v.is_finite() {
        return Err(format!("{} is not a finite number", v));
    }
    let truncated = v.trunc();
    // i64::MAX as f64 會進位成 2^63，所以上界用 <
    if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return Err(format!("{} does not fit in a 64-bit signed integer", v));
    }
    Ok(truncated as i64)
}

fn parse_integer_str(text: &str) -> std::result::Result<i64, String> {
    let trimmed = text.trim();
    let invalid = || format!("invalid literal for integer: {:?}", text);

    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    if digits.is_empty()
        || digits.starts_with('_')
        || digits.ends_with('_')
        || digits.contains("__")
        || !digits.bytes().all(|b| b.is_ascii_digit() || b == b'_')
    {
        return Err(invalid());
    }

    let mut cleaned: String = digits.chars().filter(|c| *c != '_').collect();
    if negative {
        cleaned.insert(0, '-');
    }
    cleaned
        .parse::<i64>()
        .map_err(|e| format!("{:?}: {}", text, e))
}

/// 依 `ukphone` 整數值穩定排序。任一詞條缺少或無法轉換 `ukphone` 時整體失敗。
pub fn sort_by_ukphone(entries: Vec<Entry>) -> Result<Vec<(i64, Entry)>> {
    let mut keyed = Vec::with_capacity(entries.len());

    for entry in entries {
        let key = match entry.ukphone() {
            Some(value) => parse_ukphone(value),
            None => Err("field is missing".to_string()),
        };

        match key {
            Ok(key) => keyed.push((key, entry)),
            Err(reason) => {
                return Err(NormalizeError::FieldError {
                    name: entry.into_name(),
                    reason,
                })
            }
        }
    }

    keyed.sort_by_key(|(key, _)| *key);
    Ok(keyed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn names(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.name()).collect()
    }

    #[test]
    fn test_dedupe_keeps_first_occurrence() {
        let entries = vec![
            Entry::new("a", "5"),
            Entry::new("a", "9"),
            Entry::new("b", "2"),
            Entry::new("c", "1"),
            Entry::new("b", "7"),
        ];

        let (unique, removed) = dedupe_by_name(entries);

        assert_eq!(removed, 2);
        assert_eq!(names(&unique), vec!["a", "b", "c"]);
        assert_eq!(unique[0].ukphone(), Some(&json!("5")));
        assert_eq!(unique[1].ukphone(), Some(&json!("2")));
    }

    #[test]
    fn test_parse_ukphone_accepts_integer_like_values() {
        assert_eq!(parse_ukphone(&json!(42)), Ok(42));
        assert_eq!(parse_ukphone(&json!(-3)), Ok(-3));
        assert_eq!(parse_ukphone(&json!("17")), Ok(17));
        assert_eq!(parse_ukphone(&json!("  8\n")), Ok(8));
        assert_eq!(parse_ukphone(&json!("+7")), Ok(7));
        assert_eq!(parse_ukphone(&json!("-12")), Ok(-12));
        assert_eq!(parse_ukphone(&json!("1_000")), Ok(1000));
        assert_eq!(parse_ukphone(&json!(3.9)), Ok(3));
        assert_eq!(parse_ukphone(&json!(-3.9)), Ok(-3));
    }

    #[test]
    fn test_parse_ukphone_rejects_garbage() {
        for bad in [
            json!(""),
            json!("   "),
            json!("12.5"),
            json!("abc"),
            json!("1__0"),
            json!("_1"),
            json!("1_"),
            json!("+"),
            json!("--1"),
            json!("99999999999999999999"),
            json!(true),
            json!(null),
            json!([1]),
            json!({"page": 1}),
            json!(u64::MAX),
        ] {
            assert!(parse_ukphone(&bad).is_err(), "expected {} to be rejected", bad);
        }
    }

    #[test]
    fn test_sort_is_ascending_and_stable() {
        let entries = vec![
            Entry::new("x", "10"),
            Entry::new("y", 2),
            Entry::new("z", "2"),
            Entry::new("w", " 1 "),
        ];

        let sorted = sort_by_ukphone(entries).unwrap();
        let keys: Vec<i64> = sorted.iter().map(|(k, _)| *k).collect();
        let order: Vec<&str> = sorted.iter().map(|(_, e)| e.name()).collect();

        assert_eq!(keys, vec![1, 2, 2, 10]);
        assert_eq!(order, vec!["w", "y", "z", "x"]);
    }

    #[test]
    fn test_sort_fails_on_missing_ukphone() {
        let orphan = Entry::new("orphan", 0).without_field("ukphone");
        let entries = vec![Entry::new("a", "1"), orphan];

        match sort_by_ukphone(entries) {
            Err(NormalizeError::FieldError { name, reason }) => {
                assert_eq!(name, "orphan");
                assert!(reason.contains("missing"));
            }
            other => panic!("expected FieldError, got {:?}", other),
        }
    }

    #[test]
    fn test_sort_fails_on_non_numeric_ukphone() {
        let entries = vec![Entry::new("a", "1"), Entry::new("b", "page two")];
        let err = sort_by_ukphone(entries).unwrap_err();
        assert!(matches!(err, NormalizeError::FieldError { ref name, .. } if name == "b"));
    }
}
