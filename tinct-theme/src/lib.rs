//! # tinct-theme
//!
//! Extractor and mutator for the two theme documents: the
//! `theme.extend.colors` object literal in a Tailwind config and the
//! `:root` / `.dark` custom-property blocks in the companion stylesheet.
//!
//! Mutations are pure text-pair transformations — parse, targeted mutate,
//! print — so a caller can write both outputs atomically or not at all.

pub mod css;
pub mod error;
pub mod extract;
pub mod mutate;
pub mod object;

pub use error::ThemeError;
pub use extract::{scan, ThemeColors};
pub use mutate::{create, delete, rename, ColorsMutation};
