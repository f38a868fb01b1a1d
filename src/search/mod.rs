//! Search result presentation
//!
//! Raw hits from the search service go through [`ResultPresenter`], which
//! resolves their type codes, applies tag filters, removes duplicates and, on
//! selection, records the active variant and requests navigation.

pub mod error;
pub mod hit;
pub mod mock;
pub mod presenter;
pub mod selection;
pub mod traits;
pub mod variants;

pub use error::{InputError, SearchError};
pub use hit::{HitFormat, SearchHit, load_hits, read_hits};
pub use presenter::{Presentation, RejectedHit, ResultEntry, ResultPresenter, dedup_entries};
pub use selection::Selection;
pub use traits::{Navigator, VariantSelection};
pub use variants::VariantSelectionStore;
