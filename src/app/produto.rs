//! 产品 (produto)

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::core::{Messages, RecordKind};
use crate::infrastructure::Row;
use crate::utils::{number_or_zero, optional_number};

/// 创建和更新共用的产品载荷
///
/// 所有字段都是可选的：创建时由校验规则检查必填项，更新时缺失的字段会被写为 null。
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct ProdutoPayload {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,

    pub description: Option<String>,

    #[serde(default, deserialize_with = "optional_number")]
    #[validate(required, range(min = 0.0))]
    pub price: Option<f64>,

    pub images: Option<Vec<String>>,

    /// 结构化对象或自由文本
    pub dimensions: Option<Value>,

    #[serde(default, deserialize_with = "optional_number")]
    #[validate(range(min = 0.0))]
    pub weight: Option<f64>,

    #[validate(required, range(min = 0))]
    pub stock: Option<i64>,

    pub category: Option<String>,
}

pub struct Produto;

impl RecordKind for Produto {
    type Payload = ProdutoPayload;

    const TABLE: &'static str = "produto";
    const COLUMNS: &'static [&'static str] = &[
        "name",
        "description",
        "price",
        "images",
        "dimensions",
        "weight",
        "stock",
        "category",
    ];
    const MESSAGES: Messages = Messages {
        not_found: "Produto não encontrado",
        invalid: "Os campos name, price e stock são obrigatórios",
        list_failed: "Erro ao buscar produtos",
        get_failed: "Erro ao buscar produto",
        create_failed: "Erro ao inserir produto",
        update_failed: "Erro ao atualizar produto",
        delete_failed: "Erro ao excluir produto",
    };

    /// 原样返回所有列，`price` 转为浮点数（缺失时为 0.0）
    fn project(mut row: Row) -> Value {
        let price = number_or_zero(row.get("price"));
        row.insert("price".to_string(), Value::from(price));
        Value::Object(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> ProdutoPayload {
        serde_json::from_value(value).unwrap()
    }

    fn row(value: Value) -> Row {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn complete_payload_is_valid() {
        let p = payload(json!({
            "name": "Mouse",
            "description": "Mouse óptico",
            "price": 49.9,
            "images": ["a.png", "b.png"],
            "dimensions": {"width": 6, "height": 4},
            "weight": 0.12,
            "stock": 10,
            "category": "Periféricos"
        }));
        assert!(p.validate().is_ok());
        assert_eq!(p.images.as_deref(), Some(&["a.png".to_string(), "b.png".to_string()][..]));
    }

    #[test]
    fn zero_price_and_stock_count_as_present() {
        let p = payload(json!({"name": "Brinde", "price": 0, "stock": 0}));
        assert!(p.validate().is_ok());
    }

    #[test]
    fn missing_or_null_required_fields_are_invalid() {
        assert!(payload(json!({"price": 10, "stock": 1})).validate().is_err());
        assert!(payload(json!({"name": "Mouse", "stock": 1})).validate().is_err());
        assert!(payload(json!({"name": "Mouse", "price": 10, "stock": null}))
            .validate()
            .is_err());
        assert!(payload(json!({"name": "", "price": 10, "stock": 1}))
            .validate()
            .is_err());
    }

    #[test]
    fn negative_numbers_are_invalid() {
        assert!(payload(json!({"name": "Mouse", "price": -1, "stock": 1}))
            .validate()
            .is_err());
        assert!(payload(json!({"name": "Mouse", "price": 1, "stock": -1}))
            .validate()
            .is_err());
    }

    #[test]
    fn projection_parses_decimal_text_price() {
        let projected = Produto::project(row(json!({"id": 1, "name": "Mouse", "price": "49.90"})));
        assert_eq!(projected["price"], 49.9);
        assert_eq!(projected["name"], "Mouse");
    }

    #[test]
    fn projection_defaults_null_price_to_zero() {
        let projected = Produto::project(row(json!({"id": 2, "name": "Cabo", "price": null})));
        assert_eq!(projected["price"], 0.0);

        let projected = Produto::project(row(json!({"id": 3, "name": "Cabo"})));
        assert_eq!(projected["price"], 0.0);
    }
}
