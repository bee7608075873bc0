/// Content service interface
pub mod content;
/// Platform service interface
pub mod platform;
