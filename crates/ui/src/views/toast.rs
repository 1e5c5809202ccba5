use assignment_core::NoticeKind;
use dioxus::prelude::*;

use super::state::PageState;

#[component]
pub fn ToastStackView() -> Element {
    let page = use_context::<PageState>();
    let toasts = page.toasts();

    rsx! {
        div { class: "toasts", role: "status",
            for toast in toasts.items().iter().cloned() {
                div {
                    key: "{toast.id}",
                    class: match toast.kind {
                        NoticeKind::Success => "toast toast--success",
                        NoticeKind::Failure => "toast toast--failure",
                    },
                    div { class: "toast-body",
                        strong { "{toast.title}" }
                        p { "{toast.description}" }
                        span { class: "toast-time", "{toast.time_label}" }
                    }
                    button {
                        class: "toast-dismiss",
                        r#type: "button",
                        title: "Dismiss",
                        onclick: move |_| page.dismiss_toast(toast.id),
                        "×"
                    }
                }
            }
        }
    }
}
