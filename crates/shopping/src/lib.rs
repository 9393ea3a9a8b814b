mod list;
mod sort;
mod view;

pub use list::*;
pub use sort::*;
pub use view::*;
