mod bonus;
mod components;
mod ethical;
mod page;
mod practical;
mod section;
mod state;
mod tasks;
mod theoretical;
mod toast;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use bonus::BonusView;
pub use ethical::EthicalView;
pub use page::{PageHeader, ProgressTracker, SubmissionGuidelines};
pub use practical::PracticalView;
pub use section::SectionView;
pub use state::PageState;
pub use theoretical::TheoreticalView;
pub use toast::ToastStackView;
