//! Rate limiting middleware using token bucket algorithm.

use anyhow::{Result, anyhow};
use axum::http::Request;
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::net::IpAddr;
use std::sync::Arc;
use tower_governor::{
    GovernorError, GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{KeyExtractor, PeerIpKeyExtractor, SmartIpKeyExtractor},
};

use crate::config::RateLimitConfig;

/// Keys requests by client IP.
///
/// Uses the socket peer address, or `X-Forwarded-For` / `X-Real-IP` /
/// `Forwarded` when the service sits behind a trusted reverse proxy.
#[derive(Debug, Clone, Copy)]
pub struct ClientIpKeyExtractor {
    behind_proxy: bool,
}

impl KeyExtractor for ClientIpKeyExtractor {
    type Key = IpAddr;

    fn extract<T>(&self, req: &Request<T>) -> Result<Self::Key, GovernorError> {
        if self.behind_proxy {
            SmartIpKeyExtractor.extract(req)
        } else {
            PeerIpKeyExtractor.extract(req)
        }
    }
}

/// Creates the per-IP rate limiter applied to the whole application.
///
/// # Limits
///
/// - **Replenish**: one request slot every `RATE_LIMIT_PER_SECOND` seconds
/// - **Burst**: `RATE_LIMIT_BURST` requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Errors
///
/// Returns an error if either limit is zero.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .nest("/api", api_routes)
///     .layer(rate_limit::layer(&config.rate_limit, config.behind_proxy)?);
/// ```
pub fn layer(
    limits: &RateLimitConfig,
    behind_proxy: bool,
) -> Result<GovernorLayer<ClientIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>>
{
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(limits.per_second)
        .burst_size(limits.burst)
        .key_extractor(ClientIpKeyExtractor { behind_proxy })
        .finish()
        .ok_or_else(|| anyhow!("rate limit values must be greater than zero"))?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::ConnectInfo;
    use std::net::SocketAddr;

    fn request_from(peer: &str, forwarded: Option<&str>) -> Request<()> {
        let mut builder = Request::builder().uri("/api/countries");
        if let Some(ip) = forwarded {
            builder = builder.header("x-forwarded-for", ip);
        }
        let mut req = builder.body(()).unwrap();
        req.extensions_mut()
            .insert(ConnectInfo(peer.parse::<SocketAddr>().unwrap()));
        req
    }

    #[test]
    fn test_peer_address_used_by_default() {
        let extractor = ClientIpKeyExtractor {
            behind_proxy: false,
        };

        let key = extractor
            .extract(&request_from("10.0.0.1:5000", Some("203.0.113.9")))
            .unwrap();

        assert_eq!(key, "10.0.0.1".parse::<IpAddr>().unwrap());
    }

    #[test]
    fn test_forwarded_header_used_behind_proxy() {
        let extractor = ClientIpKeyExtractor { behind_proxy: true };

        let key = extractor
            .extract(&request_from("10.0.0.1:5000", Some("203.0.113.9")))
            .unwrap();

        assert_eq!(key, "203.0.113.9".parse::<IpAddr>().unwrap());
    }

    #[test]
    fn test_zero_limits_rejected() {
        let limits = RateLimitConfig {
            per_second: 0,
            burst: 10,
        };

        assert!(layer(&limits, false).is_err());
    }
}
