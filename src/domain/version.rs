use crate::error::{Result, TaggerError};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Semantic version parsed from a tag name.
///
/// Wraps [`semver::Version`] so that comparisons follow SemVer 2.0 precedence,
/// which ignores build metadata. Displayed without a prefix (`1.2.3`); use
/// [`Version::tag_name`] for the `v1.2.3` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version(semver::Version);

impl Version {
    /// Create a new release version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version(semver::Version::new(major, minor, patch))
    }

    /// Parse version from a tag string (e.g., "v1.2.3-rc.1" -> 1.2.3-rc.1)
    ///
    /// A single leading `v` is accepted. Major, minor and patch are required.
    pub fn parse(tag: &str) -> Result<Self> {
        let clean_tag = tag.strip_prefix('v').unwrap_or(tag);

        semver::Version::parse(clean_tag)
            .map(Version)
            .map_err(|e| TaggerError::version(format!("Invalid version '{}': {}", tag, e)))
    }

    pub fn major(&self) -> u64 {
        self.0.major
    }

    pub fn minor(&self) -> u64 {
        self.0.minor
    }

    pub fn patch(&self) -> u64 {
        self.0.patch
    }

    /// Pre-release identifiers, empty for a release version
    pub fn pre(&self) -> &str {
        self.0.pre.as_str()
    }

    /// Build metadata, empty when absent
    pub fn build(&self) -> &str {
        self.0.build.as_str()
    }

    /// Compare two versions by precedence (major, minor, patch, pre-release).
    ///
    /// A release ranks above any of its pre-releases. Build metadata never
    /// affects the result.
    pub fn cmp_precedence(&self, other: &Self) -> Ordering {
        self.0
            .major
            .cmp(&other.0.major)
            .then(self.0.minor.cmp(&other.0.minor))
            .then(self.0.patch.cmp(&other.0.patch))
            .then_with(|| self.0.pre.cmp(&other.0.pre))
    }

    /// Bump version according to bump type.
    ///
    /// Pre-release and build metadata are always cleared. Fails when the
    /// incremented component does not fit in a `u64`.
    pub fn bump(&self, bump_type: VersionBump) -> Result<Self> {
        let v = &self.0;
        let increment = |component: u64| {
            component.checked_add(1).ok_or_else(|| {
                TaggerError::version(format!("{} bump of {} overflows", bump_type, self))
            })
        };

        Ok(match bump_type {
            VersionBump::Major => Version::new(increment(v.major)?, 0, 0),
            VersionBump::Minor => Version::new(v.major, increment(v.minor)?, 0),
            VersionBump::Patch => Version::new(v.major, v.minor, increment(v.patch)?),
        })
    }

    /// Bump the latest observed version, starting from `0.0.0` when there is none
    pub fn next(latest: Option<&Version>, bump_type: VersionBump) -> Result<Self> {
        match latest {
            Some(version) => version.bump(bump_type),
            None => Version::new(0, 0, 0).bump(bump_type),
        }
    }

    /// Tag name for this version (e.g., "v1.2.3")
    pub fn tag_name(&self) -> String {
        format!("v{}", self.0)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Version component to increment
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum VersionBump {
    Major,
    #[default]
    Minor,
    Patch,
}

impl fmt::Display for VersionBump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionBump::Major => write!(f, "major"),
            VersionBump::Minor => write!(f, "minor"),
            VersionBump::Patch => write!(f, "patch"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parse() {
        let v = Version::parse("v1.2.3").unwrap();
        assert_eq!(v.major(), 1);
        assert_eq!(v.minor(), 2);
        assert_eq!(v.patch(), 3);
    }

    #[test]
    fn test_version_parse_without_v() {
        let v = Version::parse("1.2.3").unwrap();
        assert_eq!(v, Version::new(1, 2, 3));
    }

    #[test]
    fn test_version_parse_prerelease_and_build() {
        let v = Version::parse("v1.2.3-rc.1+build.5").unwrap();
        assert_eq!(v.pre(), "rc.1");
        assert_eq!(v.build(), "build.5");
        assert_eq!(v.to_string(), "1.2.3-rc.1+build.5");
    }

    #[test]
    fn test_version_parse_invalid() {
        for tag in [
            "1.2",
            "v1.2.3.4",
            "vv1.2.3",
            "V1.2.3",
            "release-1.2.3",
            "latest",
            "v01.2.3",
            "",
        ] {
            assert!(Version::parse(tag).is_err(), "expected '{}' to be rejected", tag);
        }
    }

    #[test]
    fn test_version_round_trip_ignores_leading_v() {
        for tag in ["v0.1.0", "1.10.0", "v2.0.0-alpha.1", "3.4.5+sha.abc", "v1.0.0-rc1+b7"] {
            let v = Version::parse(tag).unwrap();
            assert_eq!(v.to_string(), tag.trim_start_matches('v'));
        }
    }

    #[test]
    fn test_precedence_numeric_not_lexicographic() {
        let a = Version::parse("v1.9.0").unwrap();
        let b = Version::parse("v1.10.0").unwrap();
        assert_eq!(a.cmp_precedence(&b), Ordering::Less);
    }

    #[test]
    fn test_precedence_release_above_prerelease() {
        let pre = Version::parse("1.0.0-rc.1").unwrap();
        let release = Version::parse("1.0.0").unwrap();
        assert_eq!(pre.cmp_precedence(&release), Ordering::Less);
    }

    #[test]
    fn test_precedence_ignores_build_metadata() {
        let a = Version::parse("1.0.0+a").unwrap();
        let b = Version::parse("1.0.0+b").unwrap();
        assert_eq!(a.cmp_precedence(&b), Ordering::Equal);
    }

    #[test]
    fn test_version_bump_major() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.bump(VersionBump::Major).unwrap(), Version::new(2, 0, 0));
    }

    #[test]
    fn test_version_bump_minor() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.bump(VersionBump::Minor).unwrap(), Version::new(1, 3, 0));
    }

    #[test]
    fn test_version_bump_patch() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.bump(VersionBump::Patch).unwrap(), Version::new(1, 2, 4));
    }

    #[test]
    fn test_version_bump_clears_prerelease() {
        let v = Version::parse("1.2.3-rc1+meta").unwrap();
        assert_eq!(v.bump(VersionBump::Minor).unwrap(), Version::new(1, 3, 0));
    }

    #[test]
    fn test_next_from_none() {
        assert_eq!(Version::next(None, VersionBump::Minor).unwrap(), Version::new(0, 1, 0));
        assert_eq!(Version::next(None, VersionBump::Major).unwrap(), Version::new(1, 0, 0));
        assert_eq!(Version::next(None, VersionBump::Patch).unwrap(), Version::new(0, 0, 1));
    }

    #[test]
    fn test_tag_name() {
        assert_eq!(Version::new(1, 2, 3).tag_name(), "v1.2.3");
    }

    #[test]
    fn test_bump_display_matches_config_names() {
        assert_eq!(VersionBump::Major.to_string(), "major");
        assert_eq!(VersionBump::Patch.to_string(), "patch");
    }

    #[test]
    fn test_version_bump_overflow() {
        let v = Version::parse("v18446744073709551615.0.0").unwrap();
        let err = v.bump(VersionBump::Major).unwrap_err();
        assert!(matches!(err, TaggerError::Version(_)));
        assert!(err.to_string().contains("overflows"));

        // Untouched components may sit at the limit
        assert_eq!(
            v.bump(VersionBump::Minor).unwrap(),
            Version::new(u64::MAX, 1, 0)
        );

        let v = Version::new(1, 2, u64::MAX);
        assert!(v.bump(VersionBump::Patch).is_err());
        assert_eq!(v.bump(VersionBump::Minor).unwrap(), Version::new(1, 3, 0));
    }
}
