pub mod block;
pub mod response;
pub mod shape;
