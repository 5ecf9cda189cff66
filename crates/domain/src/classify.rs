//! Lexical classifiers. Each works on one file at a time and never touches
//! the filesystem.

pub mod declarations;
pub mod lines;
pub mod test_files;

pub use declarations::DeclarationMatcher;
pub use lines::{count_significant, is_significant};
pub use test_files::is_test_file;
