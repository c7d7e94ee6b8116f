//! Conversion of adjacency-style benchmark instances into weighted edge lists.
//!
//! An instance starts with an opaque header line. Every following line lists
//! the neighbors of one vertex, the first of these lines belonging to vertex 1.
//! Every undirected edge appears twice, once on each endpoint's line. The
//! converter keeps the header and emits each edge once as `u v 1` with `u < v`.
//!
//! ```rust
//! # use std::error::Error;
//! #
//! # fn main() -> Result<(), Box<dyn Error>> {
//! use instance_format::io::{transform, write_edge_list, OutputLayout};
//!
//! let transformed = transform("3 2\n2 3\n1\n1\n")?;
//! let mut out = Vec::new();
//! write_edge_list(&mut out, &transformed, OutputLayout::Lines)?;
//! assert_eq!(String::from_utf8(out)?, "3 2\n1 2 1\n1 3 1\n");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod batch;
pub mod convert;
pub mod io;

pub use batch::{run_batch, BatchConfig, BatchError, BatchReport, FailurePolicy};
pub use convert::{convert_instance, ConvertSummary};
