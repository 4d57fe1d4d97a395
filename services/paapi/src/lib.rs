//! Product advertising API request signing.
//!
//! This crate builds the fixed parameter sets for the product advertising
//! operations and turns a complete [`prodsign_core::ParameterSet`] into a
//! signed query string:
//!
//! ```no_run
//! use prodsign_paapi::{Config, ItemSearchVariant, ParameterTable, RequestSigner};
//!
//! # fn main() -> prodsign_core::Result<()> {
//! let table = ParameterTable::new();
//! let mut params = table.item_search_parameters(ItemSearchVariant::Default);
//! params.insert("Keywords", "red shirt");
//!
//! let signer = RequestSigner::new(Config::new().from_env());
//! let query = signer.sign(&params)?;
//! # Ok(())
//! # }
//! ```

mod config;
pub use config::Config;

mod params;
pub use params::BrowseNodeVariant;
pub use params::ItemLookupVariant;
pub use params::ItemSearchVariant;
pub use params::ParameterTable;
pub use params::SimilarityVariant;

mod sign_request;
pub use sign_request::RequestSigner;

mod constants;
