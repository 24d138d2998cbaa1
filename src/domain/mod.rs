//! Domain types shared by the search pipeline and the web layer.

pub mod deal;
pub mod search;
pub mod types;
