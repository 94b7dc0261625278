//! This is the core library for melody datasets.
//! It contains the melody and note types shared by the dataset reader and writer.

pub mod melody;
pub mod note;

pub use melody::*;
pub use note::*;
