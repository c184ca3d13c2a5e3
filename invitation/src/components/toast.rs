use std::fmt::Display;
use std::time::Duration;

use leptos::prelude::*;
use uuid::Uuid;

#[derive(Clone, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone)]
pub struct Toast {
    id: Uuid,
    kind: ToastKind,
    content: String,
}

pub trait ToastContext {
    fn success(&self, msg: &str);
    fn error(&self, msg: &str, e: impl Display);
}

/// Stacked notifications, newest on top. Each one expires on its own after a
/// few seconds or when clicked.
#[component]
pub fn ToastHost(children: ChildrenFn) -> impl IntoView {
    let (toasts, set_toasts) = signal(Vec::<Toast>::new());

    provide_context(set_toasts);

    view! {
        {children()}
        <div class="toast-root" data-testid="toast-root">
            <For each=move || toasts.get() key=|t: &Toast| t.id let:toast>
                <div
                    class="toast"
                    class:toast-error=toast.kind == ToastKind::Error
                    on:click=move |_| set_toasts.write().retain(|t| t.id != toast.id)
                >
                    {toast.content}
                </div>
            </For>
        </div>
    }
}

fn push_toast(ctx: &Option<WriteSignal<Vec<Toast>>>, kind: ToastKind, content: String) {
    let toast = Toast {
        id: Uuid::new_v4(),
        kind,
        content,
    };
    let id = toast.id;
    ctx.map(|ctx| {
        ctx.write().push(toast);
        set_timeout(
            move || ctx.write().retain(|t| t.id != id),
            Duration::from_secs(6),
        );
    });
}

impl ToastContext for Option<WriteSignal<Vec<Toast>>> {
    fn success(&self, msg: &str) {
        push_toast(self, ToastKind::Success, msg.to_string());
    }

    fn error(&self, msg: &str, e: impl Display) {
        push_toast(self, ToastKind::Error, format!("{} {}", msg, e));
    }
}

pub fn use_toasts() -> Option<WriteSignal<Vec<Toast>>> {
    use_context::<WriteSignal<Vec<Toast>>>()
}
