use std::fmt;
use uuid::Uuid;

/// A virtual POSIX-style address over the resource graph.
///
/// Construction normalizes its input: empty and `.` segments are dropped and
/// `..` segments resolve against the root, so two differently-redundant
/// spellings of one location construct identical values. Paths built from
/// strings are always rooted; non-rooted values only come out of
/// [`Path::relative_to`] and exist for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    rooted: bool,
    segments: Vec<String>,
}

impl Path {
    pub fn root() -> Self {
        Self {
            rooted: true,
            segments: Vec::new(),
        }
    }

    /// Builds a path from already-split segments, with the same
    /// normalization as string construction.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for segment in segments {
            match segment.as_ref() {
                "" | "." => {}
                ".." => {
                    normalized.pop();
                }
                other => normalized.push(other.to_string()),
            }
        }
        Self {
            rooted: true,
            segments: normalized,
        }
    }

    /// First segment after the root, or `""` for the root itself.
    pub fn base(&self) -> &str {
        self.segments.first().map(String::as_str).unwrap_or("")
    }

    /// Final segment, or `""` for the root itself.
    pub fn name(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or("")
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.rooted && self.segments.is_empty()
    }

    /// True iff the final segment parses as a version-4 UUID. Malformed
    /// segments are not errors, they just make this false.
    pub fn is_resource(&self) -> bool {
        Uuid::parse_str(self.name())
            .map(|uuid| uuid.get_version_num() == 4)
            .unwrap_or(false)
    }

    /// True iff the path has depth one, i.e. it names a collection of
    /// resources rather than a single instance.
    pub fn is_collection(&self) -> bool {
        self.base() == self.name()
    }

    /// Expresses `self` relative to `base`. Total: when `self` is not rooted
    /// under `base` it comes back unchanged.
    pub fn relative_to(&self, base: &Path) -> Path {
        if self.rooted == base.rooted && self.segments.starts_with(&base.segments) {
            Path {
                rooted: false,
                segments: self.segments[base.segments.len()..].to_vec(),
            }
        } else {
            self.clone()
        }
    }
}

impl From<&str> for Path {
    fn from(value: &str) -> Self {
        Path::from_segments(value.split('/'))
    }
}

impl From<String> for Path {
    fn from(value: String) -> Self {
        Path::from(value.as_str())
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rooted {
            write!(f, "/{}", self.segments.join("/"))
        } else if self.segments.is_empty() {
            write!(f, ".")
        } else {
            write!(f, "{}", self.segments.join("/"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UUID4: &str = "00000000-0000-4000-8000-000000000000";

    #[test]
    fn construction_normalizes_redundant_segments() {
        let redundant = Path::from(format!("/foo/./bar/../bar/{UUID4}"));
        let canonical = Path::from(format!("/foo/bar/{UUID4}"));
        assert_eq!(redundant, canonical);
        assert_eq!(canonical.to_string(), format!("/foo/bar/{UUID4}"));
    }

    #[test]
    fn parent_segments_cannot_escape_the_root() {
        assert_eq!(Path::from("/../../foo"), Path::from("/foo"));
    }

    #[test]
    fn segment_construction_matches_string_construction() {
        assert_eq!(
            Path::from_segments(["foo", ".", "bar", "..", "baz"]),
            Path::from("/foo/baz")
        );
    }

    #[test]
    fn root_properties() {
        let root = Path::from("/");
        assert!(root.is_root());
        assert_eq!(root.base(), "");
        assert_eq!(root.name(), "");
        assert_eq!(root.to_string(), "/");
    }

    #[test]
    fn resource_paths_end_with_a_v4_uuid() {
        assert!(Path::from(format!("/foo/bar/{UUID4}")).is_resource());
        assert!(!Path::from("/foo/bar").is_resource());
        // Wrong version, well-formed UUID.
        assert!(!Path::from("/foo/00000000-0000-1000-8000-000000000000").is_resource());
    }

    #[test]
    fn collection_paths_have_depth_one() {
        assert!(Path::from("/foo").is_collection());
        assert!(!Path::from(format!("/foo/{UUID4}")).is_collection());
    }

    #[test]
    fn relative_to_strips_a_matching_base() {
        let path = Path::from("/a/b/c");
        assert_eq!(path.relative_to(&Path::from("/a")).to_string(), "b/c");
        assert_eq!(path.relative_to(&Path::root()).to_string(), "a/b/c");
        assert_eq!(path.relative_to(&path).to_string(), ".");
    }

    #[test]
    fn relative_to_is_total() {
        let path = Path::from("/a/b");
        assert_eq!(path.relative_to(&Path::from("/x")), path);
    }
}
