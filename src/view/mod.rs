//! Field-of-view filtering and label layout

pub mod filter;
pub mod layout;

pub use filter::{filter_in_view, signed_view_angle};
pub use layout::LabelLayoutEngine;
