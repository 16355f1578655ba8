pub mod layout;
mod study;

pub use layout::calculate_study_chunks;
pub use study::draw_study;
