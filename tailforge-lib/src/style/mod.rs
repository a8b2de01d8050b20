pub mod analysis;
pub mod tables;
pub mod tailwind;
