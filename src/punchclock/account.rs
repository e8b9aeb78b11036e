use std::fmt;

/// A tag naming a bucket of work, e.g. a project or task.
///
/// Any string is accepted, including the empty one. Hierarchy is expressed
/// either by the caller joining segments with the delimiter up front, or by
/// passing several accounts which the writer joins.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Account(String);

impl Account {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Account {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Account {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Account {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Wraps each raw string, preserving order and duplicates.
pub fn into_accounts<I, S>(names: I) -> Vec<Account>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names.into_iter().map(Account::new).collect()
}
