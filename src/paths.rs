//! src/paths.rs
//! Memoized path lookups backing the `FileLine` prefix.
//!
//! Three values are computed at most once per process and reused for its
//! lifetime: the working directory, the configured root directory
//! (`CARGO_HOME`, defaulting to `<home>/.cargo`), and the `registry/src`
//! subdirectory under it where the toolchain unpacks dependency sources.
//! Staleness after the environment changes is accepted; a debug prefix is
//! not worth re-probing the filesystem on every line.

use std::env;
use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};
use std::sync::OnceLock;

/// Shortens a caller's source path for display.
///
/// The path is made relative to the working directory; when that fails, or
/// the result is empty or begins with a parent-directory component, the
/// dependency source directory is tried instead, and the raw path is the
/// final fallback.
pub(crate) fn shorten(file: &Path) -> PathBuf {
    shorten_with(file, working_dir(), registry_src())
}

fn shorten_with(file: &Path, cwd: &Path, source_dir: &Path) -> PathBuf {
    if let Some(rel) = relative_to(cwd, file) {
        let escapes = rel.as_os_str().is_empty()
            || rel.components().next() == Some(Component::ParentDir);
        if !escapes {
            return rel;
        }
    }
    relative_to(source_dir, file).unwrap_or_else(|| file.to_path_buf())
}

fn working_dir() -> &'static Path {
    static CWD: OnceLock<PathBuf> = OnceLock::new();
    CWD.get_or_init(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn cargo_root() -> &'static Path {
    static ROOT: OnceLock<PathBuf> = OnceLock::new();
    ROOT.get_or_init(|| resolve_cargo_root(env::var_os("CARGO_HOME")))
}

fn registry_src() -> &'static Path {
    static SRC: OnceLock<PathBuf> = OnceLock::new();
    SRC.get_or_init(|| cargo_root().join("registry").join("src"))
}

fn resolve_cargo_root(configured: Option<OsString>) -> PathBuf {
    match configured {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => home_dir().join(".cargo"),
    }
}

fn home_dir() -> PathBuf {
    env::var_os("HOME")
        .or_else(|| env::var_os("USERPROFILE"))
        .map_or_else(|| PathBuf::from("."), PathBuf::from)
}

/// Computes `path` relative to `base` by walking components.
///
/// Returns `None` when the two cannot be related: one is absolute and the
/// other relative, they sit under different prefixes, or `base` itself
/// contains an unresolved parent component.
fn relative_to(base: &Path, path: &Path) -> Option<PathBuf> {
    if base.is_absolute() != path.is_absolute() {
        return None;
    }

    let mut base_components = base.components().peekable();
    let mut path_components = path.components().peekable();
    while let (Some(b), Some(p)) = (base_components.peek(), path_components.peek()) {
        if b == p {
            base_components.next();
            path_components.next();
        } else {
            break;
        }
    }

    if matches!(base_components.peek(), Some(Component::Prefix(_)))
        || matches!(path_components.peek(), Some(Component::Prefix(_)))
    {
        return None;
    }

    let mut rel = PathBuf::new();
    for component in base_components {
        match component {
            Component::RootDir | Component::CurDir => {}
            Component::ParentDir => return None,
            Component::Prefix(_) | Component::Normal(_) => rel.push(".."),
        }
    }
    for component in path_components {
        match component {
            Component::CurDir => {}
            other => rel.push(other.as_os_str()),
        }
    }
    Some(rel)
}
