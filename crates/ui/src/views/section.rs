use assignment_core::model::SectionId;
use dioxus::prelude::*;

use super::{BonusView, EthicalView, PracticalView, TheoreticalView};

/// Renders the form unit belonging to `section`.
#[component]
pub fn SectionView(section: SectionId) -> Element {
    match section {
        SectionId::Theoretical => rsx! { TheoreticalView {} },
        SectionId::Practical => rsx! { PracticalView {} },
        SectionId::Ethical => rsx! { EthicalView {} },
        SectionId::Bonus => rsx! { BonusView {} },
    }
}
