//! Detail modal tabs. Pure local display state: switching tabs affects
//! nothing outside the modal.

pub mod details;
pub mod reviews;
pub mod specs;

pub use details::DetailsTab;
pub use reviews::ReviewsTab;
pub use specs::SpecsTab;

pub const TAB_KEYS: [(&str, &str); 3] = [
    ("details", "Details"),
    ("specs", "Specs"),
    ("reviews", "Reviews"),
];
