use prodsign_core::ParameterSet;

use super::constants::*;

/// Variants of the `ItemSearch` operation.
///
/// Each variant selects one fixed parameter shape. A variant without a
/// mapping yields an empty [`ParameterSet`], so callers can probe whether a
/// shape is implemented without error handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemSearchVariant {
    /// The default catalogue search.
    Default,
    /// Default search with offer summaries attached.
    WithOffers,
    /// Default search with customer reviews attached.
    WithReviews,
    /// Search scoped to a single marketplace merchant.
    Marketplace,
}

/// Variants of the `ItemLookup` operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemLookupVariant {
    /// The default single-item lookup.
    Default,
    /// Lookup with product images attached.
    WithImages,
    /// Lookup with offer summaries attached.
    WithOffers,
    /// Lookup of accessory items for a product.
    Accessories,
}

/// Variants of the `BrowseNodeLookup` operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseNodeVariant {
    /// The default browse node lookup.
    Default,
    /// Lookup returning the node's best sellers.
    TopSellers,
    /// Lookup returning the node's new releases.
    NewReleases,
}

/// Variants of the `SimilarityLookup` operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimilarityVariant {
    /// Items similar to all of the given items.
    Default,
    /// A random selection among similar items.
    Random,
    /// Condensed response shape.
    Condensed,
}

/// ParameterTable yields the fixed portion of the query for each supported
/// operation variant.
///
/// The two per-instance defaults are set at construction and never mutated
/// afterwards. The table never inserts per-request values like item ids or
/// keywords, merging those is up to the caller.
#[derive(Clone, Debug)]
pub struct ParameterTable {
    availability: String,
    search_index: String,
}

impl Default for ParameterTable {
    fn default() -> Self {
        Self {
            availability: "Available".to_string(),
            search_index: "Apparel".to_string(),
        }
    }
}

impl ParameterTable {
    /// Create a new ParameterTable with the default availability filter and
    /// search index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search index used by item search variants.
    pub fn with_search_index(mut self, search_index: impl Into<String>) -> Self {
        self.search_index = search_index.into();
        self
    }

    /// Set the availability filter used by item search variants.
    pub fn with_availability(mut self, availability: impl Into<String>) -> Self {
        self.availability = availability.into();
        self
    }

    /// Parameters shared by every mapped variant.
    fn base(&self, operation: &str) -> ParameterSet {
        let mut set = ParameterSet::new();
        set.insert(OPERATION, operation);
        set.insert(SERVICE, SERVICE_NAME);
        set.insert(VERSION, API_VERSION);

        set
    }

    /// Fixed parameters for an `ItemSearch` variant.
    pub fn item_search_parameters(&self, variant: ItemSearchVariant) -> ParameterSet {
        match variant {
            ItemSearchVariant::Default => {
                let mut set = self.base(ITEM_SEARCH);
                set.insert(SEARCH_INDEX, self.search_index.as_str());
                set.insert(AVAILABILITY, self.availability.as_str());
                set.insert(RESPONSE_GROUP, "Small");
                set
            }
            ItemSearchVariant::WithOffers => {
                let mut set = self.base(ITEM_SEARCH);
                set.insert(SEARCH_INDEX, self.search_index.as_str());
                set.insert(AVAILABILITY, self.availability.as_str());
                set.insert(CONDITION, "New");
                set.insert(RESPONSE_GROUP, "Small,OfferSummary");
                set
            }
            ItemSearchVariant::WithReviews => {
                let mut set = self.base(ITEM_SEARCH);
                set.insert(SEARCH_INDEX, self.search_index.as_str());
                set.insert(AVAILABILITY, self.availability.as_str());
                set.insert(RESPONSE_GROUP, "Small,Reviews");
                set
            }
            // No parameter mapping yet.
            ItemSearchVariant::Marketplace => ParameterSet::new(),
        }
    }

    /// Fixed parameters for an `ItemLookup` variant.
    pub fn item_lookup_parameters(&self, variant: ItemLookupVariant) -> ParameterSet {
        match variant {
            ItemLookupVariant::Default => {
                let mut set = self.base(ITEM_LOOKUP);
                set.insert(RESPONSE_GROUP, "ItemAttributes");
                set
            }
            ItemLookupVariant::WithImages => {
                let mut set = self.base(ITEM_LOOKUP);
                set.insert(RESPONSE_GROUP, "ItemAttributes,Images");
                set
            }
            ItemLookupVariant::WithOffers => {
                let mut set = self.base(ITEM_LOOKUP);
                set.insert(CONDITION, "New");
                set.insert(RESPONSE_GROUP, "ItemAttributes,OfferSummary");
                set
            }
            // No parameter mapping yet.
            ItemLookupVariant::Accessories => ParameterSet::new(),
        }
    }

    /// Fixed parameters for a `BrowseNodeLookup` variant.
    pub fn browse_node_parameters(&self, variant: BrowseNodeVariant) -> ParameterSet {
        match variant {
            BrowseNodeVariant::Default => {
                let mut set = self.base(BROWSE_NODE_LOOKUP);
                set.insert(RESPONSE_GROUP, "BrowseNodeInfo");
                set
            }
            BrowseNodeVariant::TopSellers => {
                let mut set = self.base(BROWSE_NODE_LOOKUP);
                set.insert(RESPONSE_GROUP, "BrowseNodeInfo,TopSellers");
                set
            }
            // No parameter mapping yet.
            BrowseNodeVariant::NewReleases => ParameterSet::new(),
        }
    }

    /// Fixed parameters for a `SimilarityLookup` variant.
    pub fn similarity_parameters(&self, variant: SimilarityVariant) -> ParameterSet {
        match variant {
            SimilarityVariant::Default => {
                let mut set = self.base(SIMILARITY_LOOKUP);
                set.insert(SIMILARITY_TYPE, "Intersection");
                set.insert(RESPONSE_GROUP, "Small");
                set
            }
            SimilarityVariant::Random => {
                let mut set = self.base(SIMILARITY_LOOKUP);
                set.insert(SIMILARITY_TYPE, "Random");
                set.insert(RESPONSE_GROUP, "Small");
                set
            }
            // No parameter mapping yet.
            SimilarityVariant::Condensed => ParameterSet::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_item_search_default() {
        let set = ParameterTable::new().item_search_parameters(ItemSearchVariant::Default);

        assert_eq!(set.get(OPERATION), Some(ITEM_SEARCH));
        assert_eq!(set.get(SERVICE), Some(SERVICE_NAME));
        assert_eq!(set.get(VERSION), Some(API_VERSION));
        assert_eq!(set.get(SEARCH_INDEX), Some("Apparel"));
        assert_eq!(set.get(AVAILABILITY), Some("Available"));
    }

    #[test]
    fn test_item_search_unmapped_variant_is_empty() {
        let set = ParameterTable::new().item_search_parameters(ItemSearchVariant::Marketplace);
        assert!(set.is_empty());
    }

    #[test]
    fn test_item_lookup_default() {
        let set = ParameterTable::new().item_lookup_parameters(ItemLookupVariant::Default);

        assert_eq!(set.get(OPERATION), Some(ITEM_LOOKUP));
        assert_eq!(set.get(VERSION), Some(API_VERSION));
        assert!(set.get(SEARCH_INDEX).is_none());
    }

    #[test]
    fn test_browse_node_default() {
        let set = ParameterTable::new().browse_node_parameters(BrowseNodeVariant::Default);

        assert_eq!(set.get(OPERATION), Some(BROWSE_NODE_LOOKUP));
        assert_eq!(set.get(RESPONSE_GROUP), Some("BrowseNodeInfo"));
    }

    #[test]
    fn test_similarity_default() {
        let set = ParameterTable::new().similarity_parameters(SimilarityVariant::Default);

        assert_eq!(set.get(OPERATION), Some(SIMILARITY_LOOKUP));
        assert_eq!(set.get(SIMILARITY_TYPE), Some("Intersection"));
    }

    #[test]
    fn test_unmapped_variants_are_empty_not_errors() {
        let table = ParameterTable::new();

        assert!(table
            .item_lookup_parameters(ItemLookupVariant::Accessories)
            .is_empty());
        assert!(table
            .browse_node_parameters(BrowseNodeVariant::NewReleases)
            .is_empty());
        assert!(table
            .similarity_parameters(SimilarityVariant::Condensed)
            .is_empty());
    }

    #[test]
    fn test_construction_defaults_are_respected() {
        let table = ParameterTable::new()
            .with_search_index("Books")
            .with_availability("All");
        let set = table.item_search_parameters(ItemSearchVariant::Default);

        assert_eq!(set.get(SEARCH_INDEX), Some("Books"));
        assert_eq!(set.get(AVAILABILITY), Some("All"));
    }

    #[test]
    fn test_repeated_calls_return_independent_sets() {
        let table = ParameterTable::new();

        let mut first = table.item_search_parameters(ItemSearchVariant::Default);
        first.insert("Keywords", "red shirt");

        let second = table.item_search_parameters(ItemSearchVariant::Default);
        assert!(second.get("Keywords").is_none());
    }
}
