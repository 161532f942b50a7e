//! Join-safe handling of archived filenames.
//!
//! Archived names are attacker-controlled: an absolute path or a `..`
//! component would let a crafted archive write outside the extraction root.
//! Names stay UTF-16 inside the archive and only cross into host paths here.

use std::path::PathBuf;

use widestring::U16Str;

use crate::error::{Error, Result};

/// Forward-slash form of an archived name, used for listings.
pub fn display_name(name: &U16Str) -> String {
    name.to_string_lossy().replace('\\', "/")
}

/// Resolve an archived name to a relative path safe to join below a root.
///
/// Splits on both separator styles, drops empty and `.` components, and
/// rejects names that are rooted, escape via `..`, or resolve to nothing.
pub fn relative_path(name: &U16Str) -> Result<PathBuf> {
    let text = name.to_string_lossy();

    let mut resolved = PathBuf::new();
    for component in text.split(['/', '\\']) {
        match component {
            "" | "." => continue,
            ".." => return Err(Error::UnsafePath(display_name(name))),
            component => resolved.push(component),
        }
    }

    if resolved.as_os_str().is_empty() {
        return Err(Error::UnsafePath(display_name(name)));
    }

    Ok(resolved)
}

#[cfg(test)]
mod test {
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;
    use widestring::U16String;

    use crate::error::Error;
    use crate::path::{display_name, relative_path};

    #[test]
    fn backslashes_display_as_forward_slashes() {
        let name = U16String::from_str(r"textures\cars\body.dds");
        assert_eq!(display_name(&name), "textures/cars/body.dds");
    }

    #[test]
    fn nested_name_resolves_below_root() {
        let name = U16String::from_str(r"textures\cars/body.dds");
        assert_eq!(
            relative_path(&name).unwrap(),
            PathBuf::from("textures").join("cars").join("body.dds")
        );
    }

    #[test]
    fn rooted_name_is_stripped_of_its_root() {
        let name = U16String::from_str("/sounds/engine.wav");
        assert_eq!(
            relative_path(&name).unwrap(),
            PathBuf::from("sounds").join("engine.wav")
        );
    }

    #[test]
    fn parent_traversal_is_rejected() {
        let name = U16String::from_str("../../etc/passwd");
        assert!(matches!(relative_path(&name), Err(Error::UnsafePath(_))));
    }

    #[test]
    fn empty_name_is_rejected() {
        let name = U16String::from_str("./");
        assert!(matches!(relative_path(&name), Err(Error::UnsafePath(_))));
    }
}
