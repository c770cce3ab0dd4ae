//! Where batch records come from.

mod synthetic;
mod tabular;

pub use synthetic::*;
pub use tabular::*;
