//! Локализованные подписи интерфейса
//!
//! Единственный источник отображаемых строк для списка продуктов сделки.
//! Подписи разрешаются один раз при загрузке модуля.

use once_cell::sync::Lazy;

/// Набор подписей, используемых списком продуктов сделки
#[derive(Debug)]
pub struct Labels {
    pub opportunity_products: &'static str,
    pub no_product_lines: &'static str,
    pub quantity_error: &'static str,

    // Колонки
    pub product_name: &'static str,
    pub quantity: &'static str,
    pub unit_price: &'static str,
    pub total_price: &'static str,
    pub quantity_in_stock: &'static str,
    pub delete: &'static str,
    pub see_product: &'static str,
    pub refresh: &'static str,

    // Уведомления
    pub toast_success_title: &'static str,
    pub toast_deleted: &'static str,
    pub toast_error_title: &'static str,
    pub toast_delete_failed: &'static str,
    pub load_error_prefix: &'static str,
}

static LABELS: Lazy<Labels> = Lazy::new(|| Labels {
    opportunity_products: "Продукты сделки",
    no_product_lines: "К сделке не привязаны продукты",
    quantity_error: "Заказанное количество превышает остаток на складе",

    product_name: "Продукт",
    quantity: "Количество",
    unit_price: "Цена за единицу",
    total_price: "Сумма",
    quantity_in_stock: "Остаток на складе",
    delete: "Удалить",
    see_product: "Открыть продукт",
    refresh: "Обновить",

    toast_success_title: "Успешно",
    toast_deleted: "Продукт удалён из сделки",
    toast_error_title: "Ошибка",
    toast_delete_failed: "Не удалось удалить продукт",
    load_error_prefix: "Ошибка загрузки продуктов",
});

/// Получить подписи интерфейса
pub fn labels() -> &'static Labels {
    &LABELS
}
