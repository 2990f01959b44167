use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Fully-qualified name of a resource: an ordered list of components,
/// rendered as a single `:`-joined string.
///
/// Equality is component-wise. Ordering compares the lengths of the rendered
/// strings, not the components themselves; sort orders produced by callers
/// depend on this exact comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FqName {
    components: Vec<String>,
}

impl FqName {
    pub fn new(components: Vec<String>) -> Self {
        Self { components }
    }

    pub fn components(&self) -> &[String] {
        &self.components
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// The rendered form as raw bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }

    /// Length of the rendered string, without building it.
    fn rendered_len(&self) -> usize {
        let separators = self.components.len().saturating_sub(1);
        self.components.iter().map(String::len).sum::<usize>() + separators
    }
}

impl From<&str> for FqName {
    fn from(value: &str) -> Self {
        Self {
            components: value.split(':').map(str::to_string).collect(),
        }
    }
}

impl From<Vec<String>> for FqName {
    fn from(components: Vec<String>) -> Self {
        Self { components }
    }
}

impl From<&[&str]> for FqName {
    fn from(components: &[&str]) -> Self {
        Self {
            components: components.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl FromIterator<String> for FqName {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            components: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for FqName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.components.join(":"))
    }
}

impl PartialOrd for FqName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FqName {
    // Compares rendered lengths, never components.
    fn cmp(&self, other: &Self) -> Ordering {
        self.rendered_len().cmp(&other.rendered_len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_display() {
        assert_eq!(FqName::from("a:b:c").to_string(), "a:b:c");
    }

    #[test]
    fn string_and_component_constructions_are_equal() {
        let from_components: FqName = ["a", "b", "c"].as_slice().into();
        assert_eq!(from_components, FqName::from("a:b:c"));
    }

    #[test]
    fn bytes_match_rendered_string() {
        assert_eq!(FqName::from("a:b").to_bytes(), b"a:b".to_vec());
    }

    #[test]
    fn ordering_is_by_rendered_length_not_lexicographic() {
        // "zz" renders shorter than "a:b" even though it sorts after it
        // lexicographically.
        assert!(FqName::from("zz") < FqName::from("a:b"));
        assert!(FqName::from("a:b:c") > FqName::from("a:b"));

        // Distinct names of equal rendered length are unordered relative to
        // each other; the comparator gives them no tiebreak.
        let left = FqName::from("aa:bb");
        let right = FqName::from("cc:dd");
        assert_ne!(left, right);
        assert_eq!(left.cmp(&right), Ordering::Equal);
    }

    #[test]
    fn sort_is_stable_under_length_ordering() {
        let mut names = vec![
            FqName::from("long:name:here"),
            FqName::from("b"),
            FqName::from("mid:one"),
        ];
        names.sort();
        assert_eq!(names[0].to_string(), "b");
        assert_eq!(names[1].to_string(), "mid:one");
        assert_eq!(names[2].to_string(), "long:name:here");
    }
}
