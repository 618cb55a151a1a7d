// Registry-backed font facility

use std::collections::HashSet;

use anyhow::Result;
use async_trait::async_trait;

use super::{FontSource, FontStatus};

/// Font facility answering from a fixed registry of known families
///
/// Stands in for a platform font negotiation service: activation succeeds for
/// registered families and reports inactive for everything else.
#[derive(Debug, Default, Clone)]
pub struct StaticFontSource {
    families: HashSet<String>,
}

impl StaticFontSource {
    /// Create a source knowing the given families
    pub fn new<I, S>(families: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            families: families.into_iter().map(Into::into).collect(),
        }
    }

    /// Add a family to the registry
    pub fn register(&mut self, family: impl Into<String>) {
        self.families.insert(family.into());
    }

    /// True if the family is registered
    pub fn contains(&self, family: &str) -> bool {
        self.families.contains(family)
    }
}

#[async_trait]
impl FontSource for StaticFontSource {
    async fn activate(&self, family: &str) -> Result<FontStatus> {
        match self.families.get(family) {
            Some(found) => Ok(FontStatus::Active(found.clone())),
            None => Ok(FontStatus::Inactive),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_activate_known_family() {
        let source = StaticFontSource::new(["Lobster", "Bungee"]);
        assert!(source.contains("Lobster"));

        let status = source.activate("Lobster").await.unwrap();
        assert_eq!(status, FontStatus::Active("Lobster".to_string()));
    }

    #[tokio::test]
    async fn test_activate_unknown_family_is_inactive() {
        let mut source = StaticFontSource::default();
        source.register("Lobster");

        let status = source.activate("Comic Sans").await.unwrap();
        assert_eq!(status, FontStatus::Inactive);
    }
}
