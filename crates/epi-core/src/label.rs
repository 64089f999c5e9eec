//! Group-type labels.

use std::fmt;
use std::sync::Arc;

/// The specification label of a group type (`"household"`, `"company"`,
/// `"school"`…).
///
/// Used to look up contact intensities and recorded in every infection event.
/// Cloning is cheap: the label is shared behind an `Arc<str>`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupSpec(Arc<str>);

impl GroupSpec {
    pub fn new(label: impl AsRef<str>) -> Self {
        GroupSpec(Arc::from(label.as_ref()))
    }

    /// Derive the label from a CamelCase type name: `CareHome` → `care_home`.
    pub fn from_type_name(name: &str) -> Self {
        let mut label = String::with_capacity(name.len() + 4);
        for (i, ch) in name.chars().enumerate() {
            if ch.is_uppercase() {
                if i > 0 {
                    label.push('_');
                }
                label.extend(ch.to_lowercase());
            } else {
                label.push(ch);
            }
        }
        GroupSpec(Arc::from(label))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GroupSpec {
    fn from(label: &str) -> Self {
        GroupSpec::new(label)
    }
}

impl fmt::Display for GroupSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
