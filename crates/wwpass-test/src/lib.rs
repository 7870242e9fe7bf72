#![doc = include_str!("../README.md")]

mod api;
mod reply;

pub use api::{spfe_path, start_spfe_mock};
pub use reply::SpfeReply;
