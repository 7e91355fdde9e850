//! Raw enumeration metadata, as a host pipeline hands it to the analyzer.
//!
//! Nothing in here is validated. Every piece of metadata is kept as a
//! [`RawAttribute`] (an ordered argument list plus an optional location) so
//! that missing, mistyped and wrongly-sized arguments survive until the
//! analyzer can report them.
//!
//! ```
//! use flagext_schema::*;
//!
//! let decl = EnumDeclaration::resolved(
//!     RawEnum::new("Color", "Paint", Accessibility::Public)
//!         .flags()
//!         .with_prefix(RawAttribute::new(vec![RawValue::from("Is")]))
//!         .with_member(RawMember::new("Red"))
//!         .with_member(RawMember::new("Green")),
//! );
//!
//! let symbol = decl.symbol.as_ref().unwrap();
//! assert_eq!(symbol.full_name, "Paint.Color");
//! assert_eq!(symbol.members.len(), 2);
//! ```

pub mod location;
pub mod schema;
pub mod value;

pub use location::*;
pub use schema::*;
pub use value::*;
