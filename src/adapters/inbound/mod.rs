mod api_server;

pub use api_server::{build_router, parse_fizzbuzz_query, ApiServer, ApiState};

// Re-export for external use (e.g., integration tests)
pub use api_server::{ApiError, ApiResponse, HealthResponse, MetricsResponse, NO_METRICS_MESSAGE};
