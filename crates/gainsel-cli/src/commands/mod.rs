pub mod config;
pub mod info;
pub mod select;
pub mod simulate;
