use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

// Parameter names used in product advertising requests.
pub const OPERATION: &str = "Operation";
pub const SERVICE: &str = "Service";
pub const VERSION: &str = "Version";
pub const TIMESTAMP: &str = "Timestamp";
pub const SIGNATURE: &str = "Signature";
pub const SEARCH_INDEX: &str = "SearchIndex";
pub const AVAILABILITY: &str = "Availability";
pub const RESPONSE_GROUP: &str = "ResponseGroup";
pub const CONDITION: &str = "Condition";
pub const SIMILARITY_TYPE: &str = "SimilarityType";

// Operation values emitted by the parameter table.
pub const ITEM_SEARCH: &str = "ItemSearch";
pub const ITEM_LOOKUP: &str = "ItemLookup";
pub const BROWSE_NODE_LOOKUP: &str = "BrowseNodeLookup";
pub const SIMILARITY_LOOKUP: &str = "SimilarityLookup";

// Service and protocol version pinned by the parameter table.
pub const SERVICE_NAME: &str = "AWSECommerceService";
pub const API_VERSION: &str = "2013-08-01";

// Default endpoint of the product advertising API.
pub const DEFAULT_HOST: &str = "webservices.amazon.com";
pub const DEFAULT_PATH: &str = "/onca/xml";

// Env values used to configure the signer.
pub const PRODSIGN_SECRET_KEY: &str = "PRODSIGN_SECRET_KEY";
pub const PRODSIGN_HOST: &str = "PRODSIGN_HOST";
pub const PRODSIGN_PATH: &str = "PRODSIGN_PATH";

/// AsciiSet for query canonicalization.
///
/// - URI encode every byte except the unreserved characters:
///   'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', and '~'.
/// - Space encodes to `%20`, never `+`.
pub static QUERY_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
