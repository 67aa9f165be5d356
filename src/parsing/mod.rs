//! Readers for the reference files the splitter depends on.
//!
//! This module provides:
//!
//! - **Picard .dict files**: Parse sequence dictionaries (`@SQ` lines)
//! - **FASTA index (.fai) files**: Parse FASTA indexes
//! - **Indexed FASTA**: Validate a reference and fetch whole contigs
//!
//! ## Supported Tags
//!
//! From `@SQ` lines, the following tags are extracted and carried into the
//! output header:
//!
//! | Tag | Description | Required |
//! |-----|-------------|----------|
//! | SN  | Sequence name | Yes |
//! | LN  | Sequence length | Yes |
//! | M5  | MD5 checksum | No |
//! | AS  | Assembly identifier | No |
//! | UR  | URI for sequence | No |
//! | SP  | Species | No |

pub mod dict;
pub mod fai;
pub mod fasta;
pub mod sam;
