use std::{env, path::Path, path::PathBuf};

/// Converts a path to a string.
///
/// Non-unicode characters are replaced by '?' in the returned string.
pub fn path_to_string<P: AsRef<Path>>(path: &P) -> String {
    path.as_ref().to_string_lossy().to_string()
}

/// Returns the user's home directory.
///
/// `$HOME` takes precedence when set and non-empty. Otherwise the platform's
/// notion of a home directory is used.
pub fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME")
        .filter(|home| !home.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_converts_paths_to_strings() {
        assert_eq!(path_to_string(&PathBuf::from("/usr/bin")), "/usr/bin");
        assert_eq!(path_to_string(&"relative/dir"), "relative/dir");
    }
}
