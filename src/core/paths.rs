use std::env;
use std::path::PathBuf;

/// Environment variable that points at an explicit config file.
pub const CONFIG_ENV_VAR: &str = "GLSCAFFOLD_CONFIG";

#[cfg(windows)]
const HOME_ENV_VAR: &str = "APPDATA";
#[cfg(not(windows))]
const HOME_ENV_VAR: &str = "HOME";

/// Base glscaffold config directory (~/.config/glscaffold/ on Unix-like systems).
/// `None` when the home directory is not set.
pub fn glscaffold() -> Option<PathBuf> {
    config_root(env::var_os(HOME_ENV_VAR).map(PathBuf::from))
}

/// Config file path, honouring `GLSCAFFOLD_CONFIG` when it is set and non-empty.
pub fn config_json() -> Option<PathBuf> {
    config_json_from(env::var(CONFIG_ENV_VAR).ok(), glscaffold())
}

fn config_root(home: Option<PathBuf>) -> Option<PathBuf> {
    let home = home.filter(|h| !h.as_os_str().is_empty())?;

    #[cfg(windows)]
    {
        Some(home.join("glscaffold"))
    }

    #[cfg(not(windows))]
    {
        Some(home.join(".config").join("glscaffold"))
    }
}

fn config_json_from(explicit: Option<String>, root: Option<PathBuf>) -> Option<PathBuf> {
    match explicit {
        Some(explicit) if !explicit.trim().is_empty() => {
            Some(PathBuf::from(shellexpand::tilde(explicit.trim()).to_string()))
        }
        _ => root.map(|root| root.join("glscaffold.json")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_home_has_no_config_location() {
        assert_eq!(config_root(None), None);
        assert_eq!(config_root(Some(PathBuf::new())), None);
        assert_eq!(config_json_from(None, config_root(None)), None);
    }

    #[cfg(not(windows))]
    #[test]
    fn config_lives_under_dot_config() {
        let path = config_json_from(None, config_root(Some(PathBuf::from("/home/dev"))));
        assert_eq!(path, Some(PathBuf::from("/home/dev/.config/glscaffold/glscaffold.json")));
    }

    #[test]
    fn explicit_path_wins_without_home() {
        let path = config_json_from(Some(" /etc/glscaffold.json ".to_string()), None);
        assert_eq!(path, Some(PathBuf::from("/etc/glscaffold.json")));
    }

    #[test]
    fn blank_explicit_path_falls_back_to_root() {
        let root = PathBuf::from("/cfg");
        let path = config_json_from(Some("  ".to_string()), Some(root.clone()));
        assert_eq!(path, Some(root.join("glscaffold.json")));
    }
}
