mod config;
mod constants;
mod data;

pub use config::*;
pub use constants::*;
pub use data::*;
