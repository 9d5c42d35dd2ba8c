mod catalog;
mod edit;
mod selector;
mod trace;
mod value;

pub use crate::catalog::*;
pub use crate::edit::*;
pub use crate::selector::*;
pub use crate::trace::*;
pub use crate::value::*;
