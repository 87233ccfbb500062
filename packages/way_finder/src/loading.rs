//! This module focuses on the fixed town & road tables and on using them to
//! generate a petgraph graph object.

pub mod petgraph;
pub mod towns;
