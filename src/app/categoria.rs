//! 分类 (categoria)：只有一个文本标签

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use validator::Validate;

use crate::core::{Messages, RecordKind};
use crate::infrastructure::Row;

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct CategoriaPayload {
    #[validate(required, length(min = 1))]
    pub category: Option<String>,
}

pub struct Categoria;

fn label(mut row: Row) -> Value {
    row.remove("category").unwrap_or(Value::Null)
}

impl RecordKind for Categoria {
    type Payload = CategoriaPayload;

    const TABLE: &'static str = "categoria";
    const COLUMNS: &'static [&'static str] = &["category"];
    const MESSAGES: Messages = Messages {
        not_found: "Categoria não encontrada",
        invalid: "O campo category é obrigatório",
        list_failed: "Erro ao buscar categorias",
        get_failed: "Erro ao buscar categoria",
        create_failed: "Erro ao inserir categoria",
        update_failed: "Erro ao atualizar categoria",
        delete_failed: "Erro ao excluir categoria",
    };

    fn project(row: Row) -> Value {
        label(row)
    }

    fn project_created(row: Row) -> Value {
        json!({ "category": label(row) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(value: Value) -> Row {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn list_projection_is_bare_label() {
        let projected = Categoria::project(row(json!({"id": 4, "category": "Cozinha"})));
        assert_eq!(projected, json!("Cozinha"));
    }

    #[test]
    fn created_projection_hides_id() {
        let projected = Categoria::project_created(row(json!({"id": 4, "category": "Cozinha"})));
        assert_eq!(projected, json!({"category": "Cozinha"}));
    }

    #[test]
    fn category_is_required() {
        let empty: CategoriaPayload = serde_json::from_value(json!({})).unwrap();
        assert!(empty.validate().is_err());

        let blank: CategoriaPayload = serde_json::from_value(json!({"category": ""})).unwrap();
        assert!(blank.validate().is_err());
    }
}
