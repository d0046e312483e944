//! Periodic table viewer: element dataset, search, table view state and the
//! element detail dialog, shared by the `web` server and the `periodic` CLI.

pub mod category;
pub mod dataset;
pub mod detail;
pub mod element;
pub mod html;
pub mod layout;
pub mod matcher;
pub mod session;
pub mod view;

pub use dataset::{Dataset, LoadError};
pub use element::ElementRecord;
pub use layout::Block;
pub use matcher::{match_query, suggest, MatchResult, Suggestion};
pub use session::{Snapshot, Viewer};
