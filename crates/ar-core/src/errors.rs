//! Error types for the arrears pricing workspace.
//!
//! Invalid inputs are caught when a curve point, volatility or request is
//! built and surface as [`Error::Configuration`]. Failures reported by the
//! analytic Black formulas surface as [`Error::ExternalFormula`] and are
//! passed through kernels and engines untouched.
//!
//! Numeric overflow of the convexity shift is deliberately *not* an error:
//! it shows up as a non-finite price.

use thiserror::Error;

/// The top-level error type used throughout the workspace.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// An input violates a construction-time invariant (curve geometry,
    /// non-positive bond, negative volatility, ...).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The analytic formula library rejected its arguments.
    #[error("analytic formula error: {0}")]
    ExternalFormula(String),

    /// A configuration value could not be mapped onto a product.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// `true` for errors raised while validating inputs at construction.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::Configuration(_) | Error::InvalidArgument(_))
    }
}

/// Shorthand `Result` type used throughout the workspace.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Configuration(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use ar_core::{ensure, errors::Error};
/// fn positive(x: f64) -> ar_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(matches!(positive(-1.0), Err(Error::Configuration(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Configuration(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::ExternalFormula(...))` if `$cond` is false.
///
/// Used by the analytic formulas to report arguments outside their domain.
///
/// # Example
/// ```
/// use ar_core::{ensure_formula, errors::Error};
/// fn root(x: f64) -> ar_core::errors::Result<f64> {
///     ensure_formula!(x >= 0.0, "x must be non-negative, got {x}");
///     Ok(x.sqrt())
/// }
/// assert!(root(4.0).is_ok());
/// assert!(matches!(root(-1.0), Err(Error::ExternalFormula(_))));
/// ```
#[macro_export]
macro_rules! ensure_formula {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::ExternalFormula(
                format!($($msg)*)
            ));
        }
    };
}
