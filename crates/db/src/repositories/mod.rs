//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

use lendit_core::pagination::Page;

pub mod booking_repo;
pub mod comment_repo;
pub mod item_repo;
pub mod request_repo;
pub mod user_repo;

pub use booking_repo::BookingRepo;
pub use comment_repo::CommentRepo;
pub use item_repo::ItemRepo;
pub use request_repo::ItemRequestRepo;
pub use user_repo::UserRepo;

/// Render the LIMIT/OFFSET clause for an optional page window.
///
/// `Page` carries validated integers, never raw user input, so inline
/// formatting is safe here.
pub(crate) fn page_clause(page: Option<Page>) -> String {
    match page {
        Some(page) => format!(" LIMIT {} OFFSET {}", page.limit(), page.offset()),
        None => String::new(),
    }
}
