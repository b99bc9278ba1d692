use crate::domain::common::AggregateId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Уникальный идентификатор сделки. Сам агрегат сделки принадлежит платформе,
/// модуль просмотра строк использует только ключ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OpportunityId(pub Uuid);

impl OpportunityId {
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

impl AggregateId for OpportunityId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(OpportunityId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}
