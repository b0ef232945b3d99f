pub mod core;
pub mod export;
pub mod scrape;

pub use crate::core::{
    Corpus,
    FemineError,
    Term,
};
