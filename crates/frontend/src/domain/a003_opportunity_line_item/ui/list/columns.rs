//! Декларативная конфигурация колонок таблицы продуктов сделки
//!
//! Упорядоченный список дескрипторов; единственная документированная
//! мутация — фильтр по профилю при активации компонента.

use contracts::system::profile::CurrentProfile;

use crate::shared::labels::labels;

/// Ключи полей строки, на которые ссылаются дескрипторы
pub mod fields {
    pub const PRODUCT_NAME: &str = "productName";
    pub const QUANTITY: &str = "quantity";
    pub const UNIT_PRICE: &str = "unitPrice";
    pub const TOTAL_PRICE: &str = "totalPrice";
    pub const QUANTITY_IN_STOCK: &str = "quantityInStock";
}

/// Действие в строке таблицы
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowAction {
    Delete,
    ViewProduct,
}

/// Способ отрисовки значения поля
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    Text,
    Number,
    Currency,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnKind {
    Field {
        field: &'static str,
        kind: CellKind,
    },
    Action(RowAction),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Column {
    pub label: &'static str,
    pub kind: ColumnKind,
}

/// Полный набор колонок в порядке отображения
pub fn default_columns() -> Vec<Column> {
    let labels = labels();
    vec![
        Column {
            label: labels.product_name,
            kind: ColumnKind::Field {
                field: fields::PRODUCT_NAME,
                kind: CellKind::Text,
            },
        },
        Column {
            label: labels.quantity,
            kind: ColumnKind::Field {
                field: fields::QUANTITY,
                kind: CellKind::Number,
            },
        },
        Column {
            label: labels.unit_price,
            kind: ColumnKind::Field {
                field: fields::UNIT_PRICE,
                kind: CellKind::Currency,
            },
        },
        Column {
            label: labels.total_price,
            kind: ColumnKind::Field {
                field: fields::TOTAL_PRICE,
                kind: CellKind::Currency,
            },
        },
        Column {
            label: labels.quantity_in_stock,
            kind: ColumnKind::Field {
                field: fields::QUANTITY_IN_STOCK,
                kind: CellKind::Number,
            },
        },
        Column {
            label: labels.delete,
            kind: ColumnKind::Action(RowAction::Delete),
        },
        Column {
            label: labels.see_product,
            kind: ColumnKind::Action(RowAction::ViewProduct),
        },
    ]
}

/// Убрать действие "открыть продукт" для ограниченного профиля.
/// Сравнение идёт по виду действия, а не по подписи колонки.
pub fn apply_profile_restriction(columns: &mut Vec<Column>, profile: &CurrentProfile) {
    if profile.is_restricted() {
        columns.retain(|c| c.kind != ColumnKind::Action(RowAction::ViewProduct));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(name: &str) -> CurrentProfile {
        CurrentProfile {
            name: name.to_string(),
        }
    }

    fn has_view_action(columns: &[Column]) -> bool {
        columns
            .iter()
            .any(|c| c.kind == ColumnKind::Action(RowAction::ViewProduct))
    }

    #[test]
    fn test_default_columns_order() {
        let columns = default_columns();
        assert_eq!(columns.len(), 7);
        assert_eq!(
            columns[0].kind,
            ColumnKind::Field {
                field: fields::PRODUCT_NAME,
                kind: CellKind::Text
            }
        );
        assert_eq!(columns[5].kind, ColumnKind::Action(RowAction::Delete));
        assert_eq!(columns[6].kind, ColumnKind::Action(RowAction::ViewProduct));
    }

    #[test]
    fn test_restricted_profile_loses_view_action() {
        let mut columns = default_columns();
        apply_profile_restriction(&mut columns, &profile("Commercial"));

        assert!(!has_view_action(&columns));
        assert_eq!(columns.len(), 6);
        // остальные колонки и их порядок не трогаем
        assert_eq!(columns[5].kind, ColumnKind::Action(RowAction::Delete));
    }

    #[test]
    fn test_other_profiles_keep_view_action() {
        let mut columns = default_columns();
        apply_profile_restriction(&mut columns, &profile("System Administrator"));
        assert!(has_view_action(&columns));
        assert_eq!(columns.len(), 7);
    }
}
