mod claims;
mod dto;
pub mod extractors;
pub mod handlers;
pub mod password;
pub mod services;
