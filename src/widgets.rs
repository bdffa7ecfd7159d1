pub mod popup;
pub mod wrap;
