//! History analysis: turning git queries into post/dev counts

pub mod history;

pub use history::HistoryWalker;
