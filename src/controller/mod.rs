pub mod chat;
pub mod search;

pub use chat::ChatController;
pub use search::SearchController;
