//! Extrapolation Facade
//!
//! High-level API for polynomial time-series extrapolation. Re-exports all
//! public types from the extrapolation stack for convenient usage.
//!
//! ## Example
//!
//! ```rust
//! use extrapolation_facade::prelude::*;
//!
//! let mut session = ExtrapolationSession::new();
//! session.collect(vec![
//!     DataPoint::new(0.0, 6.5),
//!     DataPoint::new(1.0, 6.0),
//!     DataPoint::new(2.0, 5.2),
//!     DataPoint::new(3.0, 4.8),
//! ]);
//! session.configure(Configuration::new("Hours", "DO (mg/L)", Method::Lagrange, 4, None));
//! session.set_prediction_horizon(1.0)?;
//!
//! let prediction = session.run()?;
//! assert!((prediction.y - 5.5).abs() < 1e-9);
//! assert_eq!(prediction.risk.tier, RiskTier::Caution);
//! # Ok::<(), ExtrapolationError>(())
//! ```

// Re-export everything from API (which includes SPI and core)
pub use extrapolation_api::*;

// Explicit re-exports for documentation
pub use extrapolation_api::prelude;
pub use extrapolation_api::{config, curve, report};

// Re-export core modules for direct access
pub use extrapolation_core::{evaluator, interpretation, narration, risk, selection, session};

// Re-export SPI traits
pub use extrapolation_spi::{Interpolator, RiskClassifier, SubsetSelector};
