//! 序列化辅助函数

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// 接受 JSON 数字或数字字符串（如 `"49.90"`），null 或缺失视为 `None`
///
/// `NaN` 与无穷大会被拒绝：它们序列化后会变成 null。
pub fn optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        Text(String),
    }

    let number = match Option::<NumberOrString>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(NumberOrString::Number(n)) => n,
        Some(NumberOrString::Text(s)) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("'{s}' is not a number")))?,
    };

    if !number.is_finite() {
        return Err(serde::de::Error::custom("number must be finite"));
    }
    Ok(Some(number))
}

/// 把存储中的数值（数字或十进制文本）读成浮点数，无法解析时为 0.0
pub fn number_or_zero(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Priced {
        #[serde(default, deserialize_with = "optional_number")]
        price: Option<f64>,
    }

    fn price(value: Value) -> Result<Option<f64>, serde_json::Error> {
        serde_json::from_value::<Priced>(value).map(|p| p.price)
    }

    #[test]
    fn accepts_numbers_and_numeric_strings() {
        assert_eq!(price(json!({"price": 49.9})).unwrap(), Some(49.9));
        assert_eq!(price(json!({"price": 10})).unwrap(), Some(10.0));
        assert_eq!(price(json!({"price": " 12.50 "})).unwrap(), Some(12.5));
    }

    #[test]
    fn null_and_missing_are_none() {
        assert_eq!(price(json!({"price": null})).unwrap(), None);
        assert_eq!(price(json!({})).unwrap(), None);
    }

    #[test]
    fn rejects_non_numeric_text() {
        assert!(price(json!({"price": "caro"})).is_err());
    }

    #[test]
    fn rejects_non_finite_text() {
        assert!(price(json!({"price": "NaN"})).is_err());
        assert!(price(json!({"price": "inf"})).is_err());
        assert!(price(json!({"price": "-infinity"})).is_err());
    }

    #[test]
    fn stored_values_coerce_to_float() {
        assert_eq!(number_or_zero(Some(&json!(49.9))), 49.9);
        assert_eq!(number_or_zero(Some(&json!("19.90"))), 19.9);
        assert_eq!(number_or_zero(Some(&Value::Null)), 0.0);
        assert_eq!(number_or_zero(None), 0.0);
        assert_eq!(number_or_zero(Some(&json!("n/a"))), 0.0);
    }
}
