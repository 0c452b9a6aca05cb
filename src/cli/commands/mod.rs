//! Command implementations

mod generate;
mod list;
mod transform;
mod validate;

pub use generate::generate;
pub use list::list;
pub use transform::{mask, unmask};
pub use validate::validate;
