//! Windows-specific platform implementations

mod filesystem;
mod paths;
mod terminal;

pub use filesystem::WindowsFilesystem;
pub use paths::WindowsPaths;
pub use terminal::Win32Terminal;
