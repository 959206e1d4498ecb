mod dto;
pub mod handlers;
mod repo;

pub use handlers::routes;
