use crate::domain::a001_product::ProductBrief;
use crate::domain::common::AggregateId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор строки продукта в сделке
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OpportunityLineItemId(pub Uuid);

impl OpportunityLineItemId {
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

impl AggregateId for OpportunityLineItemId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(OpportunityLineItemId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Read model
// ============================================================================

/// Строка продукта в сделке, как её отдаёт платформа. Модуль просмотра
/// никогда не владеет этими записями: они читаются заново при каждом
/// обновлении и не мутируются локально.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpportunityLineItem {
    pub id: OpportunityLineItemId,

    /// ID сделки (ссылка на a002_opportunity)
    #[serde(rename = "opportunityRef")]
    pub opportunity_ref: String,

    /// Заказанное количество
    pub quantity: f64,

    /// Цена за единицу
    #[serde(rename = "unitPrice")]
    pub unit_price: f64,

    /// Сумма строки, рассчитанная платформой
    #[serde(rename = "totalPrice")]
    pub total_price: f64,

    /// Вложенный срез каталожной записи (название, остаток)
    pub product: ProductBrief,

    /// Дата последнего изменения записи на платформе
    #[serde(rename = "lastModified")]
    pub last_modified: Option<chrono::DateTime<chrono::Utc>>,
}

impl OpportunityLineItem {
    /// Заказано строго больше, чем есть на складе (на момент чтения)
    pub fn exceeds_stock(&self) -> bool {
        self.quantity > self.product.quantity_in_stock
    }
}
