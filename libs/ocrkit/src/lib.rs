pub mod common;
pub mod image2text;
pub mod server;
pub mod upload;
