//! Translation tree pipeline.
//!
//! - `classify`: prefix to namespace mapping
//! - `split`: one-time migration from flat locale files to namespace files
//! - `sync`: reconcile every locale against the base locale
//! - `typegen`: derive TypeScript key types from the base locale
//! - `table` / `layout`: file I/O and path resolution shared by the above

pub mod classify;
pub mod layout;
pub mod split;
pub mod sync;
pub mod table;
pub mod typegen;

pub use classify::{Classifier, key_prefix};
pub use layout::Layout;
pub use split::{SplitReport, split_locales};
pub use sync::{SyncMode, SyncReport, Synchronizer};
pub use table::{TranslationTable, WriteOutcome};
pub use typegen::{TypesReport, generate_types};
