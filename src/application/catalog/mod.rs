mod catalog_service;
mod errors;

pub use catalog_service::{
    add_book, list_available_books, list_books, list_members, register_member, remove_book,
    set_member_active,
};
pub use errors::{CatalogError, Result};
