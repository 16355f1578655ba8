pub mod backend;
pub mod decks;
pub mod input;
pub mod logger;
pub mod models;
pub mod session;
pub mod store;
pub mod ui;
pub mod utils;

// Re-exports for convenience
pub use backend::{Backend, LogBackend};
pub use decks::{decks_dir, load_decks, sample_decks};
pub use input::{ControlAction, InputEvent, map_key};
pub use models::{Card, Deck, Rating};
pub use session::{Progress, RenderState, StudySession};
pub use store::{DeckStore, IndexOutOfRange};
pub use ui::draw_study;
pub use utils::truncate_string;
