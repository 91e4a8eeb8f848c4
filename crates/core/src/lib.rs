//! Core type aliases, errors, and constants for discrete graph curvature.
//!
//! This crate provides the foundational types and numerical parameters
//! shared by the transport, graph, and curvature crates.

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Hop distances, ground costs, and transport costs.
pub type Energy = f64;
/// Point masses of local distributions and mixing parameters.
pub type Probability = f64;
/// Curvature of an edge or a node.
pub type Kappa = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// ERRORS
// ============================================================================
/// Failure modes of a curvature computation.
///
/// Both kinds are deterministic: recomputing on the same input fails the
/// same way, so callers should not retry.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Parameters or graph shape the requested measure is not defined for.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// A solver failed to reach a finite, feasible answer.
    #[error("numerical error: {0}")]
    Numerical(String),
}

pub type Result<T> = std::result::Result<T, Error>;

// ============================================================================
// REPORTING
// ============================================================================
/// Decimal digits kept in reported edge curvature.
pub const PRECISION: i32 = 3;

/// Round a curvature value to [`PRECISION`] decimal digits.
pub fn round(kappa: Kappa) -> Kappa {
    let scale = 10f64.powi(PRECISION);
    (kappa * scale).round() / scale
}

// ============================================================================
// LOCAL MASS DISTRIBUTIONS
// ============================================================================
/// Slack allowed when checking that masses sum to one.
pub const MASS_TOLERANCE: Probability = 1e-9;

// ============================================================================
// TRANSPORTATION SIMPLEX
// Exact EMD between one-hop neighborhoods. Costs are integral hop counts, so
// reduced costs sit on a coarse lattice and a tight tolerance is safe.
// ============================================================================
/// Reduced costs above `-SIMPLEX_TOLERANCE` count as non-improving.
pub const SIMPLEX_TOLERANCE: Energy = 1e-12;
/// Maximum pivots before the solve is declared non-convergent.
pub const SIMPLEX_ITERATIONS: usize = 4096;

// ============================================================================
// MOORE-PENROSE PSEUDOINVERSE
// ============================================================================
/// Singular values at or below `PINV_RCOND * largest` are treated as zero.
/// Sits above the SVD round-off floor, so an exactly singular distance
/// matrix never has its null direction inverted.
pub const PINV_RCOND: f64 = 1e-10;
/// Iteration cap for the SVD. Zero means iterate until convergence.
pub const SVD_ITERATIONS: usize = 0;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging at INFO.
/// Safe to call more than once; later calls leave the first logger in place.
#[cfg(feature = "logging")]
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let _ = simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
}
