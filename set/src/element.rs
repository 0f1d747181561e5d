use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

/// What a type needs to be stored in a [`Set`](crate::Set).
///
/// Equality and hashing decide identity. `Display` is only used to render the
/// set, never to compare elements.
pub trait Element: Eq + Hash + fmt::Display {}

impl<T: Eq + Hash + fmt::Display + ?Sized> Element for T {}

/// A plain string element. Renders as itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Text(pub String);

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for Text {
    fn from(s: String) -> Self {
        Self(s)
    }
}

// Hashes like the wrapped `String`, so lookups by `&str` are sound.
impl Borrow<str> for Text {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Text {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    pub name: String,
    pub street: String,
    pub zip: i64,
}

impl Address {
    pub fn new(name: impl Into<String>, street: impl Into<String>, zip: i64) -> Self {
        Self {
            name: name.into(),
            street: street.into(),
            zip,
        }
    }
}

/// `name | street | zip`
impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {} | {}", self.name, self.street, self.zip)
    }
}
