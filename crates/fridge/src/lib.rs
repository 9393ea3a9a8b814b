mod fridge;
mod input;

pub use fridge::*;
pub use input::*;
