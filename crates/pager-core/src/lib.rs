pub mod config;
pub mod controller;
pub mod error;
pub mod pagination;
pub mod range;
pub mod render;
pub mod result;

pub use config::PagerConfig;
pub use controller::{request_page_change, IgnoreReason, PageChange, PaginationController};
pub use error::PagerError;
pub use pagination::{page_bounds, total_pages_for, PageState, PaginationParameters};
pub use range::{generate, page_range, DisplayItem, GapSide};
pub use render::{render_controls, render_text};
pub use result::PagerResult;
