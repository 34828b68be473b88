//! Core types for Mercadito.
//!
//! Field names are English; the serde renames pin the Spanish wire keys of
//! the persisted store document and the browser client contract.

pub mod cart;
pub mod catalog;
pub mod id;
pub mod product;

pub use cart::{CartLine, CheckoutRequest};
pub use catalog::Catalog;
pub use id::*;
pub use product::{Category, Product};
