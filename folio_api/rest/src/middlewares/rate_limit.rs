//! Limit the number of requests per client ip within a fixed window

use std::{
    net::IpAddr,
    sync::Arc,
    time::{Duration, Instant},
};

use axum::{
    extract::Request,
    middleware::{from_fn, Next},
    response::Response,
    Router,
};
use dashmap::DashMap;
use tracing::warn;

use super::client_ip::ClientIp;
use crate::{
    errors::{ApiErrorCode, TooManyRequestsError},
    RateLimitConfig,
};

/// Expired windows are pruned once this many clients are tracked.
const PRUNE_THRESHOLD: usize = 4096;

pub fn add<S: Clone + Send + Sync + 'static>(
    config: Option<RateLimitConfig>,
) -> impl FnOnce(Router<S>) -> Router<S> {
    move |router| {
        let Some(config) = config else {
            return router;
        };
        let limiter = Arc::new(RateLimiter::new(config));
        router.layer(from_fn(move |request: Request, next: Next| {
            middleware(Arc::clone(&limiter), request, next)
        }))
    }
}

async fn middleware(limiter: Arc<RateLimiter>, request: Request, next: Next) -> Response {
    // requests without a known peer address are not limited
    if let Some(&ClientIp(client_ip)) = request.extensions().get::<ClientIp>() {
        if !limiter.check(client_ip, Instant::now()) {
            warn!(%client_ip, "rate limit exceeded");
            return TooManyRequestsError
                .with_details("Too many requests from this IP, please try again later.");
        }
    }

    next.run(request).await
}

#[derive(Debug)]
struct RateLimiter {
    max_requests: u32,
    window: Duration,
    windows: DashMap<IpAddr, Window>,
}

#[derive(Debug, Clone, Copy)]
struct Window {
    start: Instant,
    count: u32,
}

impl RateLimiter {
    fn new(config: RateLimitConfig) -> Self {
        Self {
            max_requests: config.max_requests,
            window: config.window,
            windows: DashMap::new(),
        }
    }

    /// Count a request of `client_ip` and return whether it is allowed.
    fn check(&self, client_ip: IpAddr, now: Instant) -> bool {
        if self.windows.len() >= PRUNE_THRESHOLD {
            self.windows
                .retain(|_, window| !self.is_expired(window, now));
        }

        let mut window = self.windows.entry(client_ip).or_insert(Window {
            start: now,
            count: 0,
        });
        if self.is_expired(&window, now) {
            *window = Window {
                start: now,
                count: 0,
            };
        }

        window.count = window.count.saturating_add(1);
        window.count <= self.max_requests
    }

    fn is_expired(&self, window: &Window, now: Instant) -> bool {
        now.saturating_duration_since(window.start) >= self.window
    }
}

#[cfg(test)]
mod tests {
    use std::net::Ipv4Addr;

    use super::*;

    const CLIENT_A: IpAddr = IpAddr::V4(Ipv4Addr::new(203, 0, 113, 7));
    const CLIENT_B: IpAddr = IpAddr::V4(Ipv4Addr::new(198, 51, 100, 1));
    const WINDOW: Duration = Duration::from_secs(15 * 60);

    fn limiter(max_requests: u32) -> RateLimiter {
        RateLimiter::new(RateLimitConfig {
            max_requests,
            window: WINDOW,
        })
    }

    #[test]
    fn limit_per_client() {
        let sut = limiter(3);
        let now = Instant::now();

        let a = (0..4).map(|_| sut.check(CLIENT_A, now)).collect::<Vec<_>>();
        let b = sut.check(CLIENT_B, now);

        assert_eq!(a, [true, true, true, false]);
        assert!(b);
    }

    #[test]
    fn window_resets() {
        let sut = limiter(1);
        let start = Instant::now();

        assert!(sut.check(CLIENT_A, start));
        assert!(!sut.check(CLIENT_A, start + WINDOW - Duration::from_secs(1)));
        assert!(sut.check(CLIENT_A, start + WINDOW));
        assert!(!sut.check(CLIENT_A, start + WINDOW));
    }

    #[test]
    fn prune_expired_windows() {
        let sut = limiter(1);
        let start = Instant::now();
        for i in 0..PRUNE_THRESHOLD as u32 {
            sut.check(IpAddr::V4(Ipv4Addr::from(i)), start);
        }
        assert_eq!(sut.windows.len(), PRUNE_THRESHOLD);

        sut.check(CLIENT_A, start + WINDOW);

        assert_eq!(sut.windows.len(), 1);
    }
}
