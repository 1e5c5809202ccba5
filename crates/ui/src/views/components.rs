use dioxus::prelude::*;

#[component]
pub(super) fn SectionHeader(
    title: String,
    description: &'static str,
    badges: Vec<&'static str>,
    children: Element,
) -> Element {
    rsx! {
        div { class: "card",
            div { class: "card-header",
                h3 { class: "card-title", "{title}" }
                p { class: "card-description", "{description}" }
            }
            div { class: "card-content",
                div { class: "badge-row",
                    for badge in badges {
                        span { class: "badge badge--outline", "{badge}" }
                    }
                }
                {children}
            }
        }
    }
}

/// A labelled text input; `rows > 0` renders a textarea.
#[component]
pub(super) fn TextField(
    id: &'static str,
    label: &'static str,
    prompt: Option<&'static str>,
    placeholder: &'static str,
    value: String,
    #[props(default)] rows: u8,
    on_input: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "field",
            label { class: "field-label", r#for: id, "{label}" }
            if let Some(prompt) = prompt {
                p { class: "field-prompt", "{prompt}" }
            }
            if rows > 0 {
                textarea {
                    id: id,
                    class: "field-input field-input--multiline",
                    rows: "{rows}",
                    placeholder: placeholder,
                    value: "{value}",
                    oninput: move |evt| on_input.call(evt.value()),
                }
            } else {
                input {
                    id: id,
                    class: "field-input",
                    r#type: "text",
                    placeholder: placeholder,
                    value: "{value}",
                    oninput: move |evt| on_input.call(evt.value()),
                }
            }
        }
    }
}

#[component]
pub(super) fn TipList(title: &'static str, tone: &'static str, items: Vec<&'static str>) -> Element {
    rsx! {
        div { class: "tip tip--{tone}",
            h4 { "{title}" }
            ul {
                for item in items {
                    li { "{item}" }
                }
            }
        }
    }
}

#[component]
pub(super) fn SubmitBar(
    label: &'static str,
    #[props(default)] disabled: bool,
    on_submit: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "actions",
            button {
                class: if disabled { "button button--primary button--disabled" } else { "button button--primary" },
                r#type: "button",
                disabled: disabled,
                onclick: move |_| on_submit.call(()),
                "{label}"
            }
        }
    }
}
