//! Bundles objects together in a collection and fans member access out
//! across all elements.
//!
//! [`Collection`] is an ordered container that broadcasts a member
//! projection or invocation uniformly across its elements, producing a
//! same-shaped collection of [`Slot`] results. Elements lacking the
//! requested member degrade to [`Slot::Missing`] instead of failing the
//! whole broadcast, so heterogeneous collections stay usable. Collections
//! of tree-capable elements merge into one aggregate [`Tree`] with a
//! first-seen-wins deep merge.
//!
//! ```
//! use fanout::{Collection, Slot};
//!
//! #[derive(Clone)]
//! struct Host {
//!     name: &'static str,
//!     region: Option<&'static str>,
//!     port: u16,
//! }
//!
//! let hosts = Collection::from(vec![
//!     Host { name: "alpha", region: Some("eu-1"), port: 8080 },
//!     Host { name: "beta", region: None, port: 9090 },
//!     Host { name: "gamma", region: Some("us-2"), port: 80 },
//! ]);
//!
//! // Projection: absent members become Missing, everything else Present.
//! let regions = hosts.project(|h| h.region);
//! assert_eq!(regions[0], Slot::Present("eu-1"));
//! assert_eq!(regions[1], Slot::Missing);
//!
//! // Filtering and mapping behave like they do on a plain vector.
//! let names = hosts
//!     .filter(|h| h.port >= 8080)
//!     .apply(|h| h.name.to_uppercase());
//! assert_eq!(names.len(), 2);
//!
//! // Chained broadcast: project a member, then invoke through it.
//! let banners = hosts
//!     .project(|h| h.region)
//!     .invoke(|region| format!("serving {region}"));
//! assert_eq!(banners[1], Slot::Skipped);
//! ```

pub mod collection;
pub mod errors;
pub mod slot;
pub mod tree;
pub mod util;

pub use collection::Collection;
pub use errors::{MergeError, MergeResult};
pub use slot::Slot;
pub use tree::{ToTree, Tree, TreeValue};
