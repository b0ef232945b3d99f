pub mod errors;
pub mod http;
pub mod models;

pub use errors::FemineError;
pub use models::{
    Corpus,
    Term,
};
