/// Lifecycle of the catalog a page was mounted with.
/// 页面目录的生命周期
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogStore<E> {
    /// Fetch not resolved yet; the page shows an empty list.
    Pending,
    Loaded(Vec<E>),
    Failed,
}

impl<E> CatalogStore<E> {
    /// Entities to query over. Empty unless loaded.
    pub fn entities(&self) -> &[E] {
        match self {
            CatalogStore::Loaded(entities) => entities,
            CatalogStore::Pending | CatalogStore::Failed => &[],
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, CatalogStore::Loaded(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, CatalogStore::Failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entities_empty_unless_loaded() {
        assert!(CatalogStore::<u8>::Pending.entities().is_empty());
        assert!(CatalogStore::<u8>::Failed.entities().is_empty());
        assert_eq!(CatalogStore::Loaded(vec![1u8, 2]).entities(), &[1, 2]);
    }
}
