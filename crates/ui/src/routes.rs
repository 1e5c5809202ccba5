use assignment_core::model::{SectionId, assignment_sections};
use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable, use_route};
use services::{AssignmentProgress, PracticalSection};

use crate::context::AppContext;
use crate::views::{
    PageHeader, PageState, ProgressTracker, SectionView, SubmissionGuidelines, ToastStackView,
};
use crate::vm::{ToastStack, section_tab_label};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/:section", SectionPage)] Section { section: SectionId },
}

#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();
    // Owned here so completion survives switching tabs; section forms are not.
    let progress = use_signal(AssignmentProgress::new);
    let practical = use_signal(PracticalSection::new);
    let toasts = use_signal(ToastStack::default);
    use_context_provider(|| PageState::new(progress, practical, toasts, ctx.clock()));

    rsx! {
        div { class: "page",
            PageHeader {}
            ProgressTracker {}
            SectionTabs {}
            main { class: "content",
                Outlet::<Route> {}
            }
            SubmissionGuidelines {}
            ToastStackView {}
        }
    }
}

#[component]
fn SectionTabs() -> Element {
    let ctx = use_context::<AppContext>();
    let route = use_route::<Route>();
    let active = match route {
        Route::Home {} => ctx.initial_section(),
        Route::Section { section } => section,
    };

    rsx! {
        nav { class: "tabs",
            for descriptor in assignment_sections() {
                Link {
                    key: "{descriptor.id}",
                    class: if descriptor.id == active { "tab tab--active" } else { "tab" },
                    to: Route::Section { section: descriptor.id },
                    "{section_tab_label(descriptor)}"
                }
            }
        }
    }
}

#[component]
fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    rsx! {
        SectionView { section: ctx.initial_section() }
    }
}

#[component]
fn SectionPage(section: SectionId) -> Element {
    rsx! {
        SectionView { key: "{section}", section }
    }
}
