//! Structural field mapping between independently declared schemas.
//!
//! This crate moves values between two nested struct types that know nothing
//! about each other, guided by per-field tag directives. Schema types derive
//! [`facet::Facet`]; the engine reads them through [`facet::Peek`] and writes
//! them through [`facet::Poke`].
//!
//! - [`traverse`] and [`traverse_mut`]: pre-order walks with caller-controlled
//!   recursion.
//! - [`resolve_for_read`], [`resolve_for_write`] and [`resolve_type`]: dotted
//!   path resolution; write mode allocates absent intermediate nodes.
//! - [`counterpart_path`]: tag directive or identity routing.
//! - [`normalize`]: reconciles plain and optional shapes of the same type.
//! - [`map_into`] and [`map_from`]: the two mapping directions, with
//!   unused-field reporting through callbacks.
//! - [`fill_fallbacks`]: gap filling across groups of equivalent fields.
//!
//! Static checks ([`check_acyclic`], [`validate_tags`]) catch self-nesting
//! types and dangling tag directives when a schema is registered.
//!
//! Tag directives are `hueport` attributes. The directive key is chosen by
//! the caller at mapping time; `canonical` is the one this crate declares.
//!
//! # Example
//!
//! ```
//! use facet::{Facet, Peek, Poke};
//! use hueport_core::{map_from, map_into};
//! use hueport_core as hueport;
//!
//! #[derive(Debug, Clone, Default, PartialEq, Facet)]
//! pub struct Terminal {
//!     #[facet(hueport::canonical = "colors.background")]
//!     pub bg: Option<String>,
//!     #[facet(hueport::canonical = "colors.foreground")]
//!     pub fg: Option<String>,
//! }
//!
//! #[derive(Debug, Clone, Default, PartialEq, Facet)]
//! pub struct Colors {
//!     pub background: Option<String>,
//!     pub foreground: Option<String>,
//! }
//!
//! #[derive(Debug, Clone, Default, PartialEq, Facet)]
//! pub struct Canonical {
//!     pub colors: Colors,
//! }
//!
//! let source = Terminal {
//!     bg: Some("#000000".into()),
//!     fg: None,
//! };
//!
//! let mut canonical = Canonical::default();
//! map_into(Peek::new(&source), Poke::new(&mut canonical), |_, _| {}, |_, _| {}, "canonical")
//!     .unwrap();
//! assert_eq!(canonical.colors.background.as_deref(), Some("#000000"));
//!
//! let mut back = Terminal::default();
//! map_from(Peek::new(&canonical), Poke::new(&mut back), |_, _| {}, |_, _| {}, "canonical")
//!     .unwrap();
//! assert_eq!(back, source);
//! ```

facet::define_attr_grammar! {
    ns "hueport";
    crate_path ::hueport_core;

    /// Tag directives understood by the mapper.
    pub enum Attr {
        /// Dotted path of the counterpart field in the canonical schema.
        ///
        /// Usage: `#[facet(hueport::canonical = "special_colors.background")]`
        Canonical(&'static str),
        /// Keeps the mapper from ever assigning the field.
        ///
        /// Usage: `#[facet(hueport::readonly)]`
        Readonly,
    }
}

mod error;
mod fallback;
mod mapper;
mod normalize;
mod path;
pub mod reflect;
mod resolve;
mod route;
mod traverse;
mod validate;

pub use error::{MapError, Result};
pub use fallback::{Accessor, FallbackGroup, GroupFill, fill_fallbacks, fill_group};
pub use mapper::{MapSummary, map_from, map_into};
pub use normalize::normalize;
pub use path::{FieldPath, MappedPathSet};
pub use reflect::{Node, NodeMut};
pub use resolve::{resolve_for_read, resolve_for_write, resolve_type};
pub use route::counterpart_path;
pub use traverse::{traverse, traverse_mut};
pub use validate::{ValidationError, check_acyclic, validate_tags};
