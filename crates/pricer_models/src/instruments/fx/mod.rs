//! FX derivatives.
//!
//! - [`FxOption`]: European FX option priced with Garman-Kohlhagen

mod option;

pub use option::FxOption;
