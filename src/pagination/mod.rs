//! Pagination module
//!
//! Freshservice collections are paged by number: `page` starts at 1 and
//! `per_page` defaults to 30. A response that has further pages carries a
//! `Link` header with a `next` relation; its absence ends the listing.
//! Some child collections are returned whole and take no page parameters.

mod link;
mod types;

pub use link::{has_next_page, next_link};
pub use types::{Page, PageRequest, PaginationMode, DEFAULT_PER_PAGE};
