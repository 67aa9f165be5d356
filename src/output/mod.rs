//! Writers for split results.

pub mod interval_list;
