pub mod columns;
pub mod state;

use std::rc::Rc;

use contracts::domain::a001_product::PRODUCT2_OBJECT;
use contracts::domain::a002_opportunity::OpportunityId;
use contracts::domain::a003_opportunity_line_item::OpportunityLineItemId;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

use crate::domain::a003_opportunity_line_item::ports::{LineItemPort, PlatformGateway};
use crate::shared::icons::icon;
use crate::shared::labels::labels;
use crate::shared::navigation::RecordNavigator;
use crate::shared::number_format::{format_money, format_quantity};
use crate::shared::toast_service::{ToastMode, ToastService, ToastSeverity};

use self::columns::{
    apply_profile_restriction, default_columns, CellKind, Column, ColumnKind, RowAction,
};
use self::state::{FieldValue, LineItemQuery, LineRow};

/// Список продуктов сделки: таблица строк с действиями удаления и перехода
/// к продукту. Все мутации и навигация делегируются платформе.
#[component]
#[allow(non_snake_case)]
pub fn OpportunityProductList(
    #[prop(into)] opportunity_id: Signal<Option<OpportunityId>>,
    #[prop(optional)] port: Option<Rc<dyn LineItemPort>>,
) -> impl IntoView {
    let port: Rc<dyn LineItemPort> = port.unwrap_or_else(|| Rc::new(PlatformGateway));
    // порт не Send, поэтому живёт в local storage арены
    let port = StoredValue::new_local(port);

    let toasts = use_context::<ToastService>().expect("ToastService not provided in context");
    let navigator =
        use_context::<RecordNavigator>().expect("RecordNavigator not provided in context");

    let query = RwSignal::new(LineItemQuery::default());
    let columns = RwSignal::new(default_columns());
    let (refresh_tick, set_refresh_tick) = signal(0u32);

    // Перечитываем строки при смене сделки и по каждому запросу обновления
    Effect::new(move |_| {
        refresh_tick.get();
        let Some(id) = opportunity_id.get() else {
            return;
        };
        query.update(|q| q.set_key(Some(id)));

        let port = port.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            let result = port.read_lines(id).await;
            // поздний ответ по уже сменившемуся ключу игнорируем
            if query.with_untracked(|q| q.key()) == Some(id) {
                query.update(|q| q.apply(result));
            }
        });
    });

    // Профиль запрашивается один раз при активации; сбой означает
    // отсутствие ограничений
    let profile_port = port.get_value();
    wasm_bindgen_futures::spawn_local(async move {
        match profile_port.current_profile().await {
            Ok(profile) => {
                columns.update(|cols| apply_profile_restriction(cols, &profile));
            }
            Err(e) => {
                log::warn!("Не удалось получить профиль пользователя: {}", e);
            }
        }
    });

    let handle_delete = move |id: OpportunityLineItemId| {
        let port = port.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            match port.delete_line(id).await {
                Ok(()) => {
                    toasts.show(
                        labels().toast_success_title,
                        labels().toast_deleted,
                        ToastSeverity::Success,
                        ToastMode::Dismissable,
                    );
                    set_refresh_tick.update(|n| *n += 1);
                }
                Err(e) => {
                    log::error!("Ошибка удаления строки {}: {}", id.as_string(), e);
                    toasts.show(
                        labels().toast_error_title,
                        labels().toast_delete_failed,
                        ToastSeverity::Error,
                        ToastMode::Sticky,
                    );
                }
            }
        });
    };

    view! {
        <div class="card opportunity-products">
            <div class="header">
                <h2>{labels().opportunity_products}</h2>
                <button
                    class="btn btn-secondary"
                    on:click=move |_| set_refresh_tick.update(|n| *n += 1)
                >
                    {icon("refresh")}
                    {labels().refresh}
                </button>
            </div>

            {move || {
                query
                    .get()
                    .has_quantity_error
                    .then(|| view! { <div class="warning-banner">{labels().quantity_error}</div> })
            }}

            {move || {
                query
                    .get()
                    .error
                    .map(|e| {
                        view! {
                            <div class="error">
                                {format!("{}: {}", labels().load_error_prefix, e)}
                            </div>
                        }
                    })
            }}

            {move || {
                let q = query.get();
                (q.loaded && q.has_no_lines)
                    .then(|| view! { <div class="empty">{labels().no_product_lines}</div> })
            }}

            <div class="table-container">
                <table>
                    <thead>
                        <tr>
                            {move || {
                                columns
                                    .get()
                                    .into_iter()
                                    .map(|col| view! { <th>{col.label}</th> })
                                    .collect_view()
                            }}
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let cols = columns.get();
                            query
                                .get()
                                .rows
                                .into_iter()
                                .map(|row| {
                                    let cells = cols
                                        .iter()
                                        .map(|col| render_cell(col, &row, handle_delete, navigator))
                                        .collect_view();
                                    view! { <tr>{cells}</tr> }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

fn render_cell(
    col: &Column,
    row: &LineRow,
    on_delete: impl Fn(OpportunityLineItemId) + Copy + Send + 'static,
    navigator: RecordNavigator,
) -> AnyView {
    match &col.kind {
        ColumnKind::Field { field, kind } => {
            let field = *field;
            let text = match (row.field_value(field), kind) {
                (Some(FieldValue::Text(s)), _) => s,
                (Some(FieldValue::Number(n)), CellKind::Currency) => format_money(n),
                (Some(FieldValue::Number(n)), _) => format_quantity(n),
                (None, _) => String::new(),
            };
            if field == columns::fields::QUANTITY {
                view! { <td class=row.tone.css_class()>{text}</td> }.into_any()
            } else {
                view! { <td>{text}</td> }.into_any()
            }
        }
        ColumnKind::Action(RowAction::Delete) => {
            let id = row.id;
            view! {
                <td>
                    <button
                        class="btn btn-danger btn-icon"
                        title=labels().delete
                        on:click=move |_| on_delete(id)
                    >
                        {icon("delete")}
                    </button>
                </td>
            }
            .into_any()
        }
        ColumnKind::Action(RowAction::ViewProduct) => {
            let product_id = row.product_id;
            view! {
                <td>
                    <button
                        class="btn btn-primary"
                        on:click=move |_| {
                            navigator.view_record(PRODUCT2_OBJECT, &product_id.as_string())
                        }
                    >
                        {icon("preview")}
                        {labels().see_product}
                    </button>
                </td>
            }
            .into_any()
        }
    }
}
