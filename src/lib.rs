//! waygraph: a weighted shortest-path graph engine.
//!
//! The crate provides a generic arena [`Graph`] of payload-carrying nodes
//! linked by positively-weighted one-way roads, a label-correcting
//! shortest-path search returning a [`Way`], and a geographic
//! specialization ([`MapGraph`]) with externally-identified lat/lon nodes,
//! great-circle road weights and bulk loading.
//!
//! ```
//! use waygraph::Graph;
//!
//! let mut graph = Graph::new();
//! let a = graph.create_node("a");
//! let b = graph.create_node("b");
//! let c = graph.create_node("c");
//! graph.two_way(a, b, 1.0)?;
//! graph.two_way(b, c, 2.0)?;
//!
//! let way = graph.find_way(a, c)?;
//! assert_eq!(way.weight(), 3.0);
//! # Ok::<(), waygraph::Error>(())
//! ```
//!
//! Searches keep all transient state in search-local tables, so any number
//! of them may run concurrently over a shared `&Graph`; mutation requires
//! `&mut Graph` and is therefore impossible while a search is borrowing
//! the graph.

pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;
pub use model::{Extent, Graph, MapGraph, MapPoint, MapWay, Node, NodeId, Road, Way};
