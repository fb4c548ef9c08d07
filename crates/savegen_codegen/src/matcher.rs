//! Annotation matching.
//!
//! Declarations and members expose the short names of their attached
//! annotations through [`Annotated`]. A [`Marker`] is matched by exact,
//! case-sensitive equality against those names. There is no aliasing and no
//! inheritance-aware lookup.

use core::fmt;

/// A marker annotation name, e.g. `save_data` or `save`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Marker(String);

impl Marker {
    /// Creates a marker from its short annotation name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the marker name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Marker {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// A node that carries annotations.
pub trait Annotated {
    /// Short names of the attached annotations, in source order.
    fn annotation_names(&self) -> impl Iterator<Item = &str>;

    /// Returns `true` if any attached annotation is named exactly `marker`.
    fn has_marker(&self, marker: &Marker) -> bool {
        self.annotation_names().any(|name| name == marker.as_str())
    }
}
