//! Extraction domain models

pub mod classifier;
pub mod fragment;
pub mod outcome;

pub use classifier::Classifier;
pub use fragment::{FragmentSet, RawFragment, ScanNote};
pub use outcome::FileOutcome;
