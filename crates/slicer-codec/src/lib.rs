//! Hierarchy-slicer filter codec.
//!
//! Converts the host's filter representations into normalized selection
//! tuples and back:
//!
//! - **value**: raw-scalar coercion and display formatting
//! - **ident**: the two legacy string identifier encodings
//! - **target**: filter-target resolution from column query expressions
//! - **decode**: top-level decoding of host filter state
//! - **advanced**: reconstruction from stored advanced-filter conditions
//! - **encode**: tuple-filter construction and ordered persistence
//! - **predicates**: wildcard search, mobile detection, settled-depth

pub mod advanced;
pub mod decode;
pub mod encode;
pub mod ident;
pub mod predicates;
pub mod target;
pub mod value;

pub use advanced::advanced_filter_to_selection;
pub use decode::{hierarchy_columns, parse_filter};
pub use encode::{apply_filter, persist_filter};
pub use ident::{
    new_own_id, parse_expand, parse_legacy_filter_values, parse_new_own_id, parse_old_own_id,
    parse_own_id,
};
pub use predicates::{check_mobile, common_level, wildcard_filter};
pub use target::extract_filter_target;
pub use value::{coerce, format_value, type_of};
