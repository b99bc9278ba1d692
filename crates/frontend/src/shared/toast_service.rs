use leptos::prelude::*;
use leptos::task::spawn_local;

/// Время жизни закрываемого уведомления, мс
const DISMISS_AFTER_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastSeverity {
    Success,
    Error,
}

impl ToastSeverity {
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastSeverity::Success => "toast-success",
            ToastSeverity::Error => "toast-error",
        }
    }
}

/// Режим показа: закрываемое уведомление исчезает само, липкое висит
/// до ручного закрытия
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastMode {
    Dismissable,
    Sticky,
}

#[derive(Clone, Debug)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub message: String,
    pub severity: ToastSeverity,
    pub mode: ToastMode,
}

/// Сервис для централизованного показа уведомлений
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    /// Показать уведомление
    pub fn show(&self, title: &str, message: &str, severity: ToastSeverity, mode: ToastMode) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.toasts.update(|list| {
            list.push(Toast {
                id,
                title: title.to_string(),
                message: message.to_string(),
                severity,
                mode,
            })
        });

        if mode == ToastMode::Dismissable {
            let service = *self;
            spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(DISMISS_AFTER_MS).await;
                service.dismiss(id);
            });
        }
    }

    /// Закрыть уведомление
    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

/// Контейнер уведомлений, монтируется один раз в корне приложения
#[component]
pub fn ToastHost() -> impl IntoView {
    let service = use_context::<ToastService>().expect("ToastService not provided in context");

    view! {
        <div class="toast-host">
            <For
                each=move || service.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=format!("toast {}", toast.severity.css_class())>
                            <div class="toast-body">
                                <strong>{toast.title.clone()}</strong>
                                <span>{toast.message.clone()}</span>
                            </div>
                            <button
                                class="toast-close"
                                on:click=move |_| service.dismiss(id)
                            >
                                {"×"}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
