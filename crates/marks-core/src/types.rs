#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize};

/// A named URL with an ordered list of tags.
///
/// Ids are unique within a store when compared case-insensitively. Tags carry no
/// uniqueness guarantee and keep the order they were written in.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bookmark {
    pub id: String,
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "null_as_default"))]
    pub url: String,
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "null_as_default"))]
    pub tags: Vec<String>,
}

/// An explicit null (`url: ~`) reads the same as a missing key.
#[cfg(feature = "serde")]
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Bookmark {
    pub fn new(id: impl Into<String>, url: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            tags,
        }
    }

    /// Case-insensitive id equality, the rule used for every store lookup.
    pub fn id_matches(&self, id: &str) -> bool {
        self.id.to_lowercase() == id.to_lowercase()
    }

    /// True when one of the tags equals `tag`, ignoring case. Not a substring match.
    pub fn has_tag(&self, tag: &str) -> bool {
        let wanted = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == wanted)
    }

    pub fn has_all_tags<S: AsRef<str>>(&self, tags: &[S]) -> bool {
        tags.iter().all(|t| self.has_tag(t.as_ref()))
    }
}

/// Partial identifying criteria used to narrow a collection.
///
/// An empty string or an empty tag list imposes no constraint on that dimension.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub id: String,
    pub url: String,
    pub tags: Vec<String>,
}

impl FilterCriteria {
    pub fn new(id: impl Into<String>, url: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            tags,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_empty() && self.url.is_empty() && self.tags.is_empty()
    }

    /// The criteria expressed as a bookmark, used when reporting that nothing matched.
    pub fn as_bookmark(&self) -> Bookmark {
        Bookmark {
            id: self.id.clone(),
            url: self.url.clone(),
            tags: self.tags.clone(),
        }
    }
}
