use std::fmt;

use semver::{BuildMetadata, Prerelease, Version};

use crate::error::{Result, ScaffoldKitError};

/// Semantic version impact of a change, ordered from least to most significant
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Impact {
    #[default]
    None,
    Patch,
    Minor,
    Major,
}

impl Impact {
    /// Apply this impact to a version.
    ///
    /// - **Major**: major += 1, minor = 0, patch = 0
    /// - **Minor**: minor += 1, patch = 0
    /// - **Patch**: patch += 1
    /// - **None**: unchanged
    ///
    /// Any real bump drops pre-release and build metadata.
    pub fn apply(&self, version: &Version) -> Version {
        let mut next = version.clone();
        match self {
            Impact::None => return next,
            Impact::Major => {
                next.major += 1;
                next.minor = 0;
                next.patch = 0;
            }
            Impact::Minor => {
                next.minor += 1;
                next.patch = 0;
            }
            Impact::Patch => {
                next.patch += 1;
            }
        }
        next.pre = Prerelease::EMPTY;
        next.build = BuildMetadata::EMPTY;
        next
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Impact::None => "none",
            Impact::Patch => "patch",
            Impact::Minor => "minor",
            Impact::Major => "major",
        };
        f.write_str(label)
    }
}

/// Version used when a repository has no version tag yet
pub fn initial_version() -> Version {
    Version::new(0, 1, 0)
}

/// Parse a version from a git tag string (e.g. "v1.2.3" -> 1.2.3).
///
/// One leading `v` or `V` is stripped. Build metadata is rejected so
/// that tags stay comparable.
pub fn parse_version_tag(tag: &str) -> Result<Version> {
    let clean = tag
        .strip_prefix('v')
        .or_else(|| tag.strip_prefix('V'))
        .unwrap_or(tag);

    let version = Version::parse(clean).map_err(|e| {
        ScaffoldKitError::version(format!(
            "Invalid version format: '{}' - expected X.Y.Z ({})",
            tag, e
        ))
    })?;

    if !version.build.is_empty() {
        return Err(ScaffoldKitError::version(format!(
            "Build metadata is not allowed in version tags: '{}'",
            tag
        )));
    }

    Ok(version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_impact_ordering() {
        assert!(Impact::None < Impact::Patch);
        assert!(Impact::Patch < Impact::Minor);
        assert!(Impact::Minor < Impact::Major);
        assert_eq!(
            [Impact::Patch, Impact::Major, Impact::None].iter().max(),
            Some(&Impact::Major)
        );
    }

    #[test]
    fn test_apply_major() {
        let v = Version::new(1, 2, 3);
        assert_eq!(Impact::Major.apply(&v), Version::new(2, 0, 0));
    }

    #[test]
    fn test_apply_minor() {
        let v = Version::new(1, 2, 3);
        assert_eq!(Impact::Minor.apply(&v), Version::new(1, 3, 0));
    }

    #[test]
    fn test_apply_patch() {
        let v = Version::new(1, 2, 3);
        assert_eq!(Impact::Patch.apply(&v), Version::new(1, 2, 4));
    }

    #[test]
    fn test_apply_none_keeps_version() {
        let v = Version::parse("1.2.3-rc.1").unwrap();
        assert_eq!(Impact::None.apply(&v), v);
    }

    #[test]
    fn test_apply_clears_prerelease() {
        let v = Version::parse("1.2.3-rc.1").unwrap();
        assert_eq!(Impact::Patch.apply(&v), Version::new(1, 2, 4));
    }

    #[test]
    fn test_parse_version_tag() {
        assert_eq!(parse_version_tag("v1.2.3").unwrap(), Version::new(1, 2, 3));
        assert_eq!(parse_version_tag("V0.1.0").unwrap(), Version::new(0, 1, 0));
        assert_eq!(parse_version_tag("4.5.6").unwrap(), Version::new(4, 5, 6));
    }

    #[test]
    fn test_parse_version_tag_prerelease() {
        let v = parse_version_tag("v2.0.0-beta.1").unwrap();
        assert_eq!(v.pre.as_str(), "beta.1");
    }

    #[test]
    fn test_parse_version_tag_invalid() {
        assert!(parse_version_tag("1.2").is_err());
        assert!(parse_version_tag("v1.2.3.4").is_err());
        assert!(parse_version_tag("release-1.2.3").is_err());
        assert!(parse_version_tag("vv1.2.3").is_err());
        assert!(parse_version_tag("v1.2.3+build.7").is_err());
    }

    #[test]
    fn test_impact_display() {
        assert_eq!(Impact::Minor.to_string(), "minor");
        assert_eq!(Impact::None.to_string(), "none");
    }
}
