pub mod output;
pub mod recipes;
