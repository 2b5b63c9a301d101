//! Text input formats for the command-line layer. Read-only: graphs are never
//! written back to disk.

pub mod edge_list;
pub mod level_order;

pub use edge_list::EdgeListReader;
pub use level_order::{parse_level_order, parse_values};
