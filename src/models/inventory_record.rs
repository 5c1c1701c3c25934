use serde::{Deserialize, Serialize};

/// Inventory asset ("patrimônio") as returned by `GET /api/inventarios/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub id: i64,
    #[serde(rename = "num_inventario")]
    pub inventory_number: String,
    #[serde(rename = "denominacao", default)]
    pub denomination: String,
    #[serde(rename = "localizacao", default)]
    pub location: String,
    #[serde(rename = "sala", default)]
    pub room: String,
    #[serde(rename = "link_imagem", default)]
    pub image_link: Option<String>,
}

impl InventoryRecord {
    /// Photo URL, if the server sent a non-empty one
    pub fn image_url(&self) -> Option<&str> {
        self.image_link
            .as_deref()
            .map(str::trim)
            .filter(|link| !link.is_empty())
    }
}

/// Body of `POST /api/atualizar_status/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdateRequest {
    #[serde(rename = "num_inventario")]
    pub inventory_number: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_catalog_payload() {
        let payload = r#"[
            {"id": 1, "num_inventario": "123456", "denominacao": "Cadeira",
             "localizacao": "Bloco A", "sala": "101", "link_imagem": ""},
            {"id": 2, "num_inventario": "654321", "denominacao": "Mesa",
             "localizacao": "Bloco B", "sala": "202",
             "link_imagem": "http://192.168.0.97:8000/media/mesa.jpg"}
        ]"#;

        let records: Vec<InventoryRecord> = serde_json::from_str(payload).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].inventory_number, "123456");
        assert_eq!(records[0].denomination, "Cadeira");
        assert_eq!(records[0].image_url(), None);
        assert_eq!(
            records[1].image_url(),
            Some("http://192.168.0.97:8000/media/mesa.jpg")
        );
    }

    #[test]
    fn test_missing_and_null_image_link() {
        let payload = r#"[
            {"id": 3, "num_inventario": "111111", "denominacao": "Armário",
             "localizacao": "Bloco C", "sala": "3"},
            {"id": 4, "num_inventario": "222222", "denominacao": "Projetor",
             "localizacao": "Bloco C", "sala": "4", "link_imagem": null}
        ]"#;

        let records: Vec<InventoryRecord> = serde_json::from_str(payload).unwrap();
        assert!(records.iter().all(|r| r.image_url().is_none()));
    }

    #[test]
    fn test_status_update_body_uses_wire_name() {
        let body = StatusUpdateRequest {
            inventory_number: "123456".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({ "num_inventario": "123456" })
        );
    }
}
