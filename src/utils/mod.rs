//! Small shared helpers.

pub mod compare;
pub mod index_type;
