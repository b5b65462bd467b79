pub mod input;
pub mod output;
pub mod paths;

pub use input::*;
pub use output::*;
pub use paths::*;
