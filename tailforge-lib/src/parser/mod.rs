pub mod blocks;
pub mod declarations;
pub mod name;
