use std::{
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::Context;

use glsl::Header;

use crate::{glsl_headers, verify_layouts};

/// Brings the headers in `dir` up to date with the host records and returns
/// the ones that were missing or stale. With `check` nothing is written.
///
/// Layouts are verified first; a mismatch aborts before any file is touched.
pub fn sync_headers(dir: &Path, check: bool) -> anyhow::Result<Vec<PathBuf>> {
    verify_layouts().context("Host layout disagrees with the GLSL definition")?;
    log::debug!("All shared records match their GLSL layout");

    sync(dir, &glsl_headers(), check)
}

fn sync(dir: &Path, headers: &[Header], check: bool) -> anyhow::Result<Vec<PathBuf>> {
    let mut stale = Vec::new();
    for header in headers {
        let path = header.path_in(dir);
        let contents = header.contents();

        let on_disk = match fs::read_to_string(&path) {
            Ok(on_disk) => Some(on_disk),
            Err(err) if err.kind() == io::ErrorKind::NotFound => None,
            Err(err) => {
                return Err(err).with_context(|| format!("Unable to read {}", path.display()));
            }
        };

        if on_disk.as_deref() == Some(contents.as_str()) {
            log::info!("{} is up to date", path.display());
            continue;
        }

        if check {
            log::warn!("{} is missing or stale", path.display());
        } else {
            fs::write(&path, contents)
                .with_context(|| format!("Unable to write {}", path.display()))?;
            log::info!("Wrote {}", path.display());
        }
        stale.push(path);
    }

    Ok(stale)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("glsl-headers-{}-{name}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn header_paths(dir: &Path) -> Vec<PathBuf> {
        glsl_headers().iter().map(|h| h.path_in(dir)).collect()
    }

    #[test]
    fn check_reports_missing_headers_without_writing() {
        let dir = scratch_dir("missing");

        let stale = sync_headers(&dir, true).unwrap();

        assert_eq!(stale, header_paths(&dir));
        assert!(stale.iter().all(|path| !path.exists()));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn check_reports_stale_headers_and_leaves_them_alone() {
        let dir = scratch_dir("stale");
        let [lights, ray] = glsl_headers();
        fs::write(lights.path_in(&dir), lights.contents()).unwrap();
        fs::write(ray.path_in(&dir), "struct Outdated {\n};\n").unwrap();

        let stale = sync_headers(&dir, true).unwrap();

        assert_eq!(stale, vec![ray.path_in(&dir)]);
        assert_eq!(
            fs::read_to_string(ray.path_in(&dir)).unwrap(),
            "struct Outdated {\n};\n"
        );
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn writing_then_checking_is_up_to_date() {
        let dir = scratch_dir("fresh");

        let written = sync_headers(&dir, false).unwrap();
        assert_eq!(written, header_paths(&dir));
        for header in glsl_headers() {
            assert_eq!(fs::read_to_string(header.path_in(&dir)).unwrap(), header.contents());
        }

        assert!(sync_headers(&dir, true).unwrap().is_empty());
        assert!(sync_headers(&dir, false).unwrap().is_empty());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn unreadable_header_is_an_error_not_stale() {
        let dir = scratch_dir("unreadable");
        let [_, ray] = glsl_headers();
        fs::create_dir(ray.path_in(&dir)).unwrap();

        let err = sync_headers(&dir, true).unwrap_err();

        assert!(err.to_string().starts_with("Unable to read"));
        assert!(err.to_string().ends_with("ray.h.glsl"));
        fs::remove_dir_all(&dir).unwrap();
    }
}
