pub mod error;
pub mod json;
pub mod network;
pub mod utils;
