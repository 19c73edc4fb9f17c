pub mod matrix;
pub mod network;
pub mod prelude;
