use std::path::PathBuf;

/// CVibe data directory (~/.cvibe)
pub fn cvibe_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(".cvibe")
}

/// credentials.json path
pub fn credentials_json_path() -> PathBuf {
    cvibe_dir().join("credentials.json")
}

/// config.toml path
pub fn config_toml_path() -> PathBuf {
    cvibe_dir().join("config.toml")
}

/// Ensure the cvibe directory exists
pub fn ensure_cvibe_dir() -> std::io::Result<PathBuf> {
    let dir = cvibe_dir();
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
