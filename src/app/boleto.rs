//! 账单 (boleto)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use validator::Validate;

use crate::core::{Messages, RecordKind};
use crate::infrastructure::Row;
use crate::utils::optional_number;

/// 请求体使用 camelCase，序列化后的键即列名
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct BoletoPayload {
    #[validate(required, length(min = 1))]
    pub customer_name: Option<String>,

    /// CPF/CNPJ，按不透明字符串保存
    #[validate(required, length(min = 1))]
    pub cpfcnpj: Option<String>,

    #[serde(default, deserialize_with = "optional_number")]
    #[validate(required, range(min = 0.0))]
    pub amount: Option<f64>,

    #[validate(required)]
    pub due_date: Option<NaiveDate>,

    #[validate(required, length(min = 1))]
    pub description: Option<String>,

    #[validate(required, length(min = 1))]
    pub status: Option<String>,
}

pub struct Boleto;

impl RecordKind for Boleto {
    type Payload = BoletoPayload;

    const TABLE: &'static str = "boleto";
    const COLUMNS: &'static [&'static str] = &[
        "customer_name",
        "cpfcnpj",
        "amount",
        "due_date",
        "description",
        "status",
    ];
    const MESSAGES: Messages = Messages {
        not_found: "Boleto não encontrado",
        invalid: "Os campos customerName, cpfcnpj, amount, dueDate, description e status são obrigatórios",
        list_failed: "Erro ao buscar boletos",
        get_failed: "Erro ao buscar boleto",
        create_failed: "Erro ao inserir boleto",
        update_failed: "Erro ao atualizar boleto",
        delete_failed: "Erro ao excluir boleto",
    };

    /// 固定字段集合，忽略表中其它列
    fn project(mut row: Row) -> Value {
        let mut take = |column: &str| row.remove(column).unwrap_or(Value::Null);

        json!({
            "id": take("id"),
            "customerName": take("customer_name"),
            "cpfcnpj": take("cpfcnpj"),
            "amount": take("amount"),
            "dueDate": take("due_date"),
            "description": take("description"),
            "status": take("status"),
        })
    }
}
