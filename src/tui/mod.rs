//! Interactive terminal front end.

mod collect;
mod input;
mod text;

pub use collect::*;
pub use input::*;
pub use text::*;
