mod raycast;

pub use raycast::*;
