use contracts::domain::a001_product::ProductId;
use contracts::domain::a002_opportunity::OpportunityId;
use contracts::domain::a003_opportunity_line_item::{OpportunityLineItem, OpportunityLineItemId};

/// Стилевая метка ячейки количества
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowTone {
    Normal,
    Warning,
}

impl RowTone {
    pub fn css_class(&self) -> &'static str {
        match self {
            RowTone::Normal => "quantity-normal",
            RowTone::Warning => "quantity-warning",
        }
    }
}

/// Типизированное значение поля строки для рендера по дескриптору колонки
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

/// Строка таблицы: строка сделки, обогащённая названием продукта, остатком
/// и меткой превышения. Пересобирается заново при каждом чтении.
#[derive(Clone, Debug, PartialEq)]
pub struct LineRow {
    pub id: OpportunityLineItemId,
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub total_price: f64,
    pub quantity_in_stock: f64,
    pub tone: RowTone,
}

impl LineRow {
    pub fn from_item(item: &OpportunityLineItem) -> Self {
        Self {
            id: item.id,
            product_id: item.product.id,
            product_name: item.product.name.clone(),
            quantity: item.quantity,
            unit_price: item.unit_price,
            total_price: item.total_price,
            quantity_in_stock: item.product.quantity_in_stock,
            tone: if item.exceeds_stock() {
                RowTone::Warning
            } else {
                RowTone::Normal
            },
        }
    }

    /// Значение поля по ключу дескриптора колонки
    pub fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            super::columns::fields::PRODUCT_NAME => {
                Some(FieldValue::Text(self.product_name.clone()))
            }
            super::columns::fields::QUANTITY => Some(FieldValue::Number(self.quantity)),
            super::columns::fields::UNIT_PRICE => Some(FieldValue::Number(self.unit_price)),
            super::columns::fields::TOTAL_PRICE => Some(FieldValue::Number(self.total_price)),
            super::columns::fields::QUANTITY_IN_STOCK => {
                Some(FieldValue::Number(self.quantity_in_stock))
            }
            _ => None,
        }
    }
}

/// Явный объект запроса: последний ключ и последний результат чтения.
/// Перезапускается компонентом при смене ключа или по ручному обновлению.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct LineItemQuery {
    key: Option<OpportunityId>,

    pub rows: Vec<LineRow>,
    pub error: Option<String>,
    pub has_no_lines: bool,
    pub has_quantity_error: bool,

    /// Было ли хоть одно завершившееся чтение
    pub loaded: bool,
}

impl LineItemQuery {
    pub fn key(&self) -> Option<OpportunityId> {
        self.key
    }

    pub fn set_key(&mut self, key: Option<OpportunityId>) {
        self.key = key;
    }

    /// Принять результат чтения. Успех полностью пересобирает строки и
    /// флаги и снимает ошибку; сбой сохраняет ошибку и очищает строки.
    pub fn apply(&mut self, result: Result<Vec<OpportunityLineItem>, String>) {
        match result {
            Ok(items) => {
                self.rows = items.iter().map(LineRow::from_item).collect();
                self.has_quantity_error = self.rows.iter().any(|r| r.tone == RowTone::Warning);
                self.has_no_lines = self.rows.is_empty();
                self.error = None;
            }
            Err(e) => {
                self.error = Some(e);
                self.rows.clear();
                self.has_quantity_error = false;
                self.has_no_lines = false;
            }
        }
        self.loaded = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product::ProductBrief;

    fn item(quantity: f64, in_stock: f64) -> OpportunityLineItem {
        OpportunityLineItem {
            id: OpportunityLineItemId::new_v4(),
            opportunity_ref: "opp-1".to_string(),
            quantity,
            unit_price: 250.0,
            total_price: quantity * 250.0,
            product: ProductBrief {
                id: ProductId::new_v4(),
                name: "Монитор".to_string(),
                quantity_in_stock: in_stock,
            },
            last_modified: None,
        }
    }

    #[test]
    fn test_row_tone_follows_stock() {
        assert_eq!(LineRow::from_item(&item(10.0, 5.0)).tone, RowTone::Warning);
        assert_eq!(LineRow::from_item(&item(3.0, 5.0)).tone, RowTone::Normal);
        assert_eq!(LineRow::from_item(&item(5.0, 5.0)).tone, RowTone::Normal);
    }

    #[test]
    fn test_empty_result_sets_empty_flag_only() {
        let mut query = LineItemQuery::default();
        query.apply(Ok(Vec::new()));

        assert!(query.loaded);
        assert!(query.has_no_lines);
        assert!(!query.has_quantity_error);
        assert!(query.rows.is_empty());
        assert!(query.error.is_none());
    }

    #[test]
    fn test_warning_flag_iff_some_row_over_allocated() {
        let mut query = LineItemQuery::default();
        query.apply(Ok(vec![item(3.0, 5.0), item(10.0, 5.0)]));
        assert!(query.has_quantity_error);
        assert!(!query.has_no_lines);

        query.apply(Ok(vec![item(3.0, 5.0), item(4.0, 5.0)]));
        assert!(!query.has_quantity_error);
    }

    #[test]
    fn test_error_and_rows_are_mutually_exclusive() {
        let mut query = LineItemQuery::default();
        query.apply(Ok(vec![item(3.0, 5.0)]));
        assert_eq!(query.rows.len(), 1);
        assert!(query.error.is_none());

        query.apply(Err("HTTP 500".to_string()));
        assert!(query.rows.is_empty());
        assert!(!query.has_quantity_error);
        assert_eq!(query.error.as_deref(), Some("HTTP 500"));

        query.apply(Ok(vec![item(2.0, 5.0)]));
        assert!(query.error.is_none());
        assert_eq!(query.rows.len(), 1);
    }

    #[test]
    fn test_field_values_for_column_descriptors() {
        let row = LineRow::from_item(&item(2.0, 5.0));

        assert_eq!(
            row.field_value(super::super::columns::fields::PRODUCT_NAME),
            Some(FieldValue::Text("Монитор".to_string()))
        );
        assert_eq!(
            row.field_value(super::super::columns::fields::TOTAL_PRICE),
            Some(FieldValue::Number(500.0))
        );
        assert_eq!(row.field_value("unknown"), None);
    }
}
