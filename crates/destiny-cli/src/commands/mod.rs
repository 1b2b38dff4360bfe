pub mod channels;
pub mod describe;
pub mod matrix;
pub mod reduce;
