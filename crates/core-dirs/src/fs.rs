//! Filesystem collaborator used by directory history navigation.

use std::io;
use std::path::{Path, PathBuf};

pub trait Filesystem {
    fn change_directory(&mut self, path: &Path) -> io::Result<()>;
    fn current_dir(&self) -> io::Result<PathBuf>;
    fn home_dir(&self) -> Option<PathBuf>;

    /// Expand a leading `~` to the home directory. Other paths pass through.
    fn expand_user_home(&self, path: &str) -> String {
        let Some(rest) = path.strip_prefix('~') else {
            return path.to_string();
        };
        if !(rest.is_empty() || rest.starts_with(['/', '\\'])) {
            return path.to_string();
        }
        match self.home_dir() {
            Some(home) => format!("{}{}", home.display(), rest),
            None => path.to_string(),
        }
    }

    /// Replace a leading home directory with `~`.
    fn abbreviate_home(&self, path: &Path) -> String {
        if let Some(home) = self.home_dir()
            && let Ok(rest) = path.strip_prefix(&home)
        {
            if rest.as_os_str().is_empty() {
                return "~".to_string();
            }
            return format!("~{}{}", std::path::MAIN_SEPARATOR, rest.display());
        }
        path.display().to_string()
    }
}

/// The process working directory.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFilesystem;

impl Filesystem for OsFilesystem {
    fn change_directory(&mut self, path: &Path) -> io::Result<()> {
        std::env::set_current_dir(path)
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }
}
