mod aggregator;
mod catalog;
mod command;
mod conversion;
mod draft;

pub use aggregator::*;
pub use catalog::*;
pub use command::*;
pub use conversion::*;
pub use draft::*;
