pub mod buffer;
pub mod font;
pub mod shapes;
