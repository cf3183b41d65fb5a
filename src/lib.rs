pub mod books;
pub mod catalog;
pub mod core;
pub mod lending;
pub mod members;
pub mod utils;
