pub mod book;
pub mod commands;
pub mod eligibility;
pub mod errors;
pub mod loan;
pub mod member;
pub mod penalty;
pub mod value_objects;

pub use book::Book;
pub use errors::*;
pub use member::{Member, NewMember};
pub use value_objects::*;
