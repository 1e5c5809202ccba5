use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use assignment_core::Clock;
use assignment_core::model::SectionId;
use assignment_core::time::fixed_clock;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{AssignmentProgress, PracticalSection};

use crate::context::{UiApp, build_app_context};
use crate::views::{PageHeader, PageState, ProgressTracker, SectionView, ToastStackView};
use crate::vm::ToastStack;

struct TestApp {
    initial_section: SectionId,
}

impl UiApp for TestApp {
    fn title(&self) -> String {
        "Test Assignment".to_string()
    }

    fn initial_section(&self) -> SectionId {
        self.initial_section
    }

    fn clock(&self) -> Clock {
        fixed_clock()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Header,
    Tracker,
    Section(SectionId),
}

#[derive(Clone, Default)]
pub struct PageHandles {
    page: Rc<RefCell<Option<PageState>>>,
}

impl PageHandles {
    pub fn page(&self) -> PageState {
        (*self.page.borrow()).expect("page state registered")
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    progress: AssignmentProgress,
    practical: PracticalSection,
    handles: PageHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let props = use_context::<ViewHarnessProps>();
    let progress = use_signal(|| props.progress.clone());
    let practical = use_signal(|| props.practical.clone());
    let toasts = use_signal(ToastStack::default);
    let page = use_context_provider(|| PageState::new(progress, practical, toasts, fixed_clock()));
    *props.handles.page.borrow_mut() = Some(page);

    let body = match props.view {
        ViewKind::Header => rsx! { PageHeader {} },
        ViewKind::Tracker => rsx! { ProgressTracker {} },
        ViewKind::Section(section) => rsx! { SectionView { section } },
    };
    rsx! {
        {body}
        ToastStackView {}
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: PageHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn drive(&mut self) {
        drive_dom(&mut self.dom);
    }

    pub fn page(&self) -> PageState {
        self.handles.page()
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_state(view, AssignmentProgress::new(), PracticalSection::new())
}

pub fn setup_view_harness_with_state(
    view: ViewKind,
    progress: AssignmentProgress,
    practical: PracticalSection,
) -> ViewHarness {
    let handles = PageHandles::default();
    let app = Arc::new(TestApp {
        initial_section: SectionId::Theoretical,
    });
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            progress,
            practical,
            handles: handles.clone(),
        },
    );
    ViewHarness { dom, handles }
}
