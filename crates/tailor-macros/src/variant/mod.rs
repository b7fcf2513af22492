mod attrs;
mod derive;

pub use derive::variant_derive_impl;
