use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use std::rc::Rc;

/// Собрать путь страницы записи платформы
///
/// # Arguments
/// * `object` - имя объекта платформы ("Product2" и т.п.)
/// * `id` - идентификатор записи
/// * `action` - действие над записью ("view", "edit")
pub fn record_page_path(object: &str, id: &str, action: &str) -> String {
    format!("/record/{}/{}/{}", object, id, action)
}

/// Сервис навигации на страницы записей. Переход выполняется без ожидания
/// результата, локальное состояние вызывающего компонента не меняется.
///
/// Обработчик перехода не Send, поэтому хранится в local storage арены —
/// сам навигатор при этом можно свободно копировать в реактивные замыкания.
#[derive(Clone, Copy)]
pub struct RecordNavigator {
    go: StoredValue<Rc<dyn Fn(&str)>, LocalStorage>,
}

impl RecordNavigator {
    /// Навигатор поверх роутера приложения; вызывать внутри `<Router>`
    pub fn from_router() -> Self {
        let navigate = use_navigate();
        Self::with_handler(Rc::new(move |path: &str| {
            navigate(path, NavigateOptions::default())
        }))
    }

    /// Навигатор с произвольным обработчиком перехода
    pub fn with_handler(go: Rc<dyn Fn(&str)>) -> Self {
        Self {
            go: StoredValue::new_local(go),
        }
    }

    /// Открыть страницу записи в режиме просмотра
    pub fn view_record(&self, object: &str, id: &str) {
        let path = record_page_path(object, id, "view");
        self.go.with_value(|go| go(&path));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_page_path() {
        assert_eq!(
            record_page_path("Product2", "42", "view"),
            "/record/Product2/42/view"
        );
        assert_eq!(
            record_page_path("Opportunity", "abc", "edit"),
            "/record/Opportunity/abc/edit"
        );
    }
}
