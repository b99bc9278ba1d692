use contracts::domain::a002_opportunity::OpportunityId;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_params_map;
use leptos_router::path;

use crate::domain::a003_opportunity_line_item::ui::list::OpportunityProductList;
use crate::shared::navigation::RecordNavigator;
use crate::shared::toast_service::{ToastHost, ToastService};

#[component]
pub fn App() -> impl IntoView {
    // Provide ToastService for centralized notifications
    provide_context(ToastService::new());

    view! {
        <Router>
            <ToastHost />
            <main class="content">
                <Routes fallback=|| view! { <p>{"Страница не найдена"}</p> }>
                    <Route path=path!("/opportunity/:id") view=OpportunityPage />
                    <Route path=path!("/record/:object/:id/:action") view=RecordPage />
                </Routes>
            </main>
        </Router>
    }
}

/// Страница сделки: разбирает ключ из маршрута и отдаёт его списку продуктов
#[component]
fn OpportunityPage() -> impl IntoView {
    provide_context(RecordNavigator::from_router());

    let params = use_params_map();
    let opportunity_id = Signal::derive(move || {
        params
            .get()
            .get("id")
            .and_then(|raw| OpportunityId::from_string(&raw).ok())
    });

    view! { <OpportunityProductList opportunity_id=opportunity_id /> }
}

/// Заглушка страницы записи: реальные карточки записей отрисовывает платформа
#[component]
fn RecordPage() -> impl IntoView {
    let params = use_params_map();
    let title = move || {
        let p = params.get();
        format!(
            "{} / {}",
            p.get("object").unwrap_or_default(),
            p.get("id").unwrap_or_default()
        )
    };

    view! {
        <div class="record-page">
            <h2>{title}</h2>
        </div>
    }
}
