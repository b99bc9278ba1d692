//! Порт платформенных сервисов для списка продуктов сделки
//!
//! Компонент разговаривает с платформой только через этот трейт, поэтому в
//! тестах его можно подменить заглушкой без сетевого слоя.

use std::future::Future;
use std::pin::Pin;

use contracts::domain::a002_opportunity::OpportunityId;
use contracts::domain::a003_opportunity_line_item::{OpportunityLineItem, OpportunityLineItemId};
use contracts::system::profile::CurrentProfile;

use super::api;

pub type PortFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Операции платформы, от которых зависит список продуктов сделки:
/// чтение строк по ключу сделки, удаление записи, профиль пользователя.
pub trait LineItemPort {
    fn read_lines(
        &self,
        opportunity_id: OpportunityId,
    ) -> PortFuture<'_, Result<Vec<OpportunityLineItem>, String>>;

    fn delete_line(&self, id: OpportunityLineItemId) -> PortFuture<'_, Result<(), String>>;

    fn current_profile(&self) -> PortFuture<'_, Result<CurrentProfile, String>>;
}

/// Боевая реализация поверх HTTP-шлюза платформы
pub struct PlatformGateway;

impl LineItemPort for PlatformGateway {
    fn read_lines(
        &self,
        opportunity_id: OpportunityId,
    ) -> PortFuture<'_, Result<Vec<OpportunityLineItem>, String>> {
        Box::pin(api::fetch_opportunity_lines(opportunity_id))
    }

    fn delete_line(&self, id: OpportunityLineItemId) -> PortFuture<'_, Result<(), String>> {
        Box::pin(api::delete_line_item(id))
    }

    fn current_profile(&self) -> PortFuture<'_, Result<CurrentProfile, String>> {
        Box::pin(crate::system::profile::api::fetch_current_profile())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_opportunity_line_item::ui::list::state::LineItemQuery;
    use contracts::domain::a001_product::{ProductBrief, ProductId};
    use futures::executor::block_on;
    use std::cell::RefCell;

    /// Заглушка платформы: строки в памяти, удаление можно "сломать"
    struct FakePlatform {
        lines: RefCell<Vec<OpportunityLineItem>>,
        fail_delete: bool,
    }

    impl FakePlatform {
        fn with_lines(lines: Vec<OpportunityLineItem>) -> Self {
            Self {
                lines: RefCell::new(lines),
                fail_delete: false,
            }
        }
    }

    impl LineItemPort for FakePlatform {
        fn read_lines(
            &self,
            _opportunity_id: OpportunityId,
        ) -> PortFuture<'_, Result<Vec<OpportunityLineItem>, String>> {
            let lines = self.lines.borrow().clone();
            Box::pin(async move { Ok(lines) })
        }

        fn delete_line(&self, id: OpportunityLineItemId) -> PortFuture<'_, Result<(), String>> {
            if self.fail_delete {
                return Box::pin(async { Err("ROW_LOCKED".to_string()) });
            }
            self.lines.borrow_mut().retain(|l| l.id != id);
            Box::pin(async { Ok(()) })
        }

        fn current_profile(&self) -> PortFuture<'_, Result<CurrentProfile, String>> {
            Box::pin(async {
                Ok(CurrentProfile {
                    name: "Commercial".to_string(),
                })
            })
        }
    }

    fn line(quantity: f64, in_stock: f64) -> OpportunityLineItem {
        OpportunityLineItem {
            id: OpportunityLineItemId::new_v4(),
            opportunity_ref: "opp-1".to_string(),
            quantity,
            unit_price: 10.0,
            total_price: quantity * 10.0,
            product: ProductBrief {
                id: ProductId::new_v4(),
                name: "Ноутбук".to_string(),
                quantity_in_stock: in_stock,
            },
            last_modified: None,
        }
    }

    #[test]
    fn test_delete_then_refetch_drops_the_row() {
        let first = line(2.0, 5.0);
        let second = line(1.0, 5.0);
        let deleted_id = first.id;
        let platform = FakePlatform::with_lines(vec![first, second]);

        let key = OpportunityId::new_v4();
        let mut query = LineItemQuery::default();
        query.set_key(Some(key));
        query.apply(block_on(platform.read_lines(key)));
        assert_eq!(query.rows.len(), 2);

        block_on(platform.delete_line(deleted_id)).unwrap();
        query.apply(block_on(platform.read_lines(key)));

        assert_eq!(query.rows.len(), 1);
        assert!(query.rows.iter().all(|r| r.id != deleted_id));
    }

    #[test]
    fn test_failed_delete_leaves_query_untouched() {
        let mut platform = FakePlatform::with_lines(vec![line(2.0, 5.0), line(7.0, 3.0)]);
        platform.fail_delete = true;

        let key = OpportunityId::new_v4();
        let mut query = LineItemQuery::default();
        query.set_key(Some(key));
        query.apply(block_on(platform.read_lines(key)));

        let before = query.clone();
        let target = query.rows[0].id;
        let result = block_on(platform.delete_line(target));

        assert!(result.is_err());
        // строки не трогаем: состояние остаётся как после последнего чтения
        assert_eq!(query, before);
        query.apply(block_on(platform.read_lines(key)));
        assert_eq!(query.rows.len(), 2);
    }

    #[test]
    fn test_profile_double_reports_restricted() {
        let platform = FakePlatform::with_lines(Vec::new());
        let profile = block_on(platform.current_profile()).unwrap();
        assert!(profile.is_restricted());
    }
}
