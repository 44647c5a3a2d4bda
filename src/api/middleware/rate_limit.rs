//! Per-IP rate limiting using the token bucket algorithm.
//!
//! Requests exceeding a limit receive `429 Too Many Requests`. Keys are the
//! socket peer address, so the server must be started with
//! `into_make_service_with_connect_info::<SocketAddr>()`.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

pub type RateLimitLayer =
    GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

fn bucket(per_second: u64, burst_size: u32) -> RateLimitLayer {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(per_second)
            .burst_size(burst_size)
            .finish()
            .expect("rate limit period and burst are non-zero"),
    );

    GovernorLayer::new(governor_conf)
}

/// Limiter for cheap endpoints: options, accounts and history.
///
/// - **Rate**: 2 requests per second
/// - **Burst**: 100 requests
pub fn layer() -> RateLimitLayer {
    bucket(2, 100)
}

/// Limiter for endpoints that call the generation provider.
///
/// - **Rate**: 1 request per second
/// - **Burst**: 10 requests
///
/// Each request here may hold a provider call open for up to the configured
/// timeout.
pub fn generation_layer() -> RateLimitLayer {
    bucket(1, 10)
}
