//! Open a generated map with the platform's default handler.

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

/// `file://` URL for an absolute or relative path.
pub fn file_url(path: &Path) -> io::Result<String> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };
    let s = absolute.to_string_lossy().replace('\\', "/");
    if s.starts_with('/') {
        Ok(format!("file://{}", s))
    } else {
        Ok(format!("file:///{}", s))
    }
}

fn opener(url: &str) -> Command {
    if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg(url);
        cmd
    } else if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", "", url]);
        cmd
    } else {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(url);
        cmd
    }
}

/// Launch the default browser on `path`. Does not wait for it.
pub fn open_in_browser(path: &Path) -> io::Result<()> {
    let url = file_url(path)?;
    log::info!("opening {}", url);
    opener(&url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(unix)]
    fn test_file_url_absolute() {
        assert_eq!(
            file_url(Path::new("/tmp/location_20260307_090503.html")).unwrap(),
            "file:///tmp/location_20260307_090503.html"
        );
    }

    #[test]
    fn test_file_url_relative_is_absolutized() {
        let url = file_url(Path::new("map.html")).unwrap();
        assert!(url.starts_with("file://"));
        assert!(url.ends_with("/map.html"));
    }
}
