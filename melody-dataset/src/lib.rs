pub mod dataset;
pub mod error;
pub mod parser;
pub mod writer;

pub use dataset::*;
pub use error::DatasetError;
pub use parser::*;
pub use writer::*;

pub use melody_core::{parse_note, Melody, NoteError, ParsedNote};
