//! Route modules organized by resource.

pub mod causes;
pub mod health;
