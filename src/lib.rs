//! Factory-method construction of input text field descriptors.
//!
//! A [creator::Creators] decides which [product::Products] gets built, the
//! product builds an [product::InputText] record and the [client] projects
//! it into an [client::InputTextUI].

pub mod common;
pub mod product;
pub mod creator;
pub mod client;
