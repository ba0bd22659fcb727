pub mod catalog;
pub mod dispatch;
pub mod listing;
pub mod overlay;
