pub mod booth;
pub mod exhibitor;
pub mod expo;
pub mod registration;
pub mod session;
pub mod user;
