mod command;
pub mod de;
pub mod fridge;
pub mod mealplan;
pub mod recipe;
mod session;
mod store;

pub use command::*;
pub use session::*;
pub use store::*;
