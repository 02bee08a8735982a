pub mod catalog;
pub mod locations;
pub mod name;
pub mod play;
