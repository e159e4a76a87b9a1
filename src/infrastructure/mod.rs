pub mod credentials;
pub mod inference;
pub mod observability;
