pub mod command;
pub mod dtos;
pub mod handler;
pub mod utils;
pub mod vars;
