pub mod command_handler;
pub mod components;
pub mod pagination;
