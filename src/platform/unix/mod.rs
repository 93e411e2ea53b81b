//! Unix-specific platform implementations

mod filesystem;
mod paths;
mod terminal;

pub use filesystem::UnixFilesystem;
pub use paths::UnixPaths;
pub use terminal::UnixTerminal;
