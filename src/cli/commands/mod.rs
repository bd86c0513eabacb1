mod command_result;
pub mod context;
pub mod extract;
pub mod helper;
pub mod merge;
pub mod stats;
pub mod sync;

pub use command_result::*;
