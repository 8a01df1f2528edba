use derive_new::new;

/// Name of a local branch, relative to `refs/heads` (e.g. `feature/foo`)
///
/// Path separators are always `/`, whatever the platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord, new)]
pub struct BranchName(String);

impl BranchName {
    pub fn from_components<'a>(components: impl IntoIterator<Item = &'a str>) -> Self {
        Self(components.into_iter().collect::<Vec<_>>().join("/"))
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
