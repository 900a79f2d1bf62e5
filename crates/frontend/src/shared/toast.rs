//! Toast notifications
//!
//! Non-fatal errors and confirmations are reported through [`Notifier`];
//! the UI implementation is [`ToastService`], provided via context.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

const TOAST_LIFETIME_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    fn class(&self) -> &'static str {
        match self {
            ToastLevel::Info => "toast toast--info",
            ToastLevel::Success => "toast toast--success",
            ToastLevel::Warning => "toast toast--warning",
            ToastLevel::Error => "toast toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

pub trait Notifier {
    fn notify(&self, level: ToastLevel, message: String);

    fn error(&self, message: String) {
        self.notify(ToastLevel::Error, message);
    }

    fn success(&self, message: String) {
        self.notify(ToastLevel::Success, message);
    }
}

#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
        }
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ToastService {
    fn notify(&self, level: ToastLevel, message: String) {
        match level {
            ToastLevel::Error => log::error!("{}", message),
            ToastLevel::Warning => log::warn!("{}", message),
            _ => log::info!("{}", message),
        }

        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.toasts.update(|toasts| toasts.push(Toast { id, level, message }));

        let this = *self;
        Timeout::new(TOAST_LIFETIME_MS, move || this.dismiss(id)).forget();
    }
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}

/// Stack of live toasts, mounted once in the app root
#[component]
pub fn ToastHost() -> impl IntoView {
    let service = use_toasts();

    view! {
        <div class="toast-host">
            <For
                each=move || service.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.level.class() on:click=move |_| service.dismiss(id)>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
