// All service modules
pub mod quote_cache;
pub mod renderer;
pub mod sparkline;

// Re-export for convenience
pub use quote_cache::{QuoteCache, QuoteSource};
