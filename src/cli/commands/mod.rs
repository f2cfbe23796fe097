pub mod check;
mod command_result;
pub mod helper;
pub mod init;
pub mod split;
pub mod sync;
pub mod types;

pub use command_result::*;
