//! Interactive command-line session

mod menu;

pub use menu::Session;
