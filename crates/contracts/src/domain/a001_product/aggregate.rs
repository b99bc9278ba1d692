use crate::domain::common::AggregateId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Имя объекта каталога на стороне платформы (используется при навигации)
pub const PRODUCT2_OBJECT: &str = "Product2";

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор продукта каталога
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub Uuid);

impl ProductId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for ProductId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProductId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Embedded projection
// ============================================================================

/// Срез каталожной записи, который платформа вкладывает в строку сделки:
/// название и текущий остаток на складе. Полная карточка продукта живёт
/// на стороне платформы.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductBrief {
    pub id: ProductId,

    pub name: String,

    /// Остаток на складе на момент чтения
    #[serde(rename = "quantityInStock")]
    pub quantity_in_stock: f64,
}
