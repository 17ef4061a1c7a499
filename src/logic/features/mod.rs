//! Features Module - request → model input
//!
//! Layout lives in `layout.rs`; everything else builds on it.

pub mod layout;
pub mod town;
pub mod vector;
pub mod encoder;

pub use layout::{FEATURE_COUNT, LayoutInfo};
pub use vector::FeatureVector;
pub use encoder::encode;
