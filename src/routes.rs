use crate::{
    api::{leave_request, loan},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfig, GovernorConfigBuilder, PeerIpKeyExtractor,
    governor::middleware::NoOpMiddleware,
};
use actix_web::web;
use anyhow::{Context, Result};

pub type LimiterConfig = GovernorConfig<PeerIpKeyExtractor, NoOpMiddleware>;

fn replenish_millis(requests_per_min: u32) -> u64 {
    (60_000 / u64::from(requests_per_min.max(1))).max(1)
}

/// Built once at startup so every worker shares the same quota.
/// A zero budget is rejected by `finish`, which refuses an empty burst.
pub fn build_limiter(requests_per_min: u32) -> Result<LimiterConfig> {
    GovernorConfigBuilder::default()
        .milliseconds_per_request(replenish_millis(requests_per_min))
        .burst_size(requests_per_min)
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .context("invalid rate limit configuration")
}

pub fn configure(cfg: &mut web::ServiceConfig, config: &Config, limiter: &LimiterConfig) {
    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(Governor::new(limiter))
            .service(
                web::scope("/leave")
                    // /leave/duration
                    .service(
                        web::resource("/duration")
                            .route(web::post().to(leave_request::leave_duration)),
                    )
                    // /leave/check
                    .service(
                        web::resource("/check").route(web::post().to(leave_request::check_leave)),
                    ),
            )
            .service(
                web::scope("/loan")
                    // /loan/emi
                    .service(web::resource("/emi").route(web::post().to(loan::loan_emi)))
                    // /loan/validate
                    .service(
                        web::resource("/validate")
                            .route(web::post().to(loan::validate_loan_field)),
                    )
                    // /loan/check
                    .service(web::resource("/check").route(web::post().to(loan::check_loan))),
            ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limiter_builds_for_any_positive_rate() {
        for rate in [1, 60, 600, 100_000] {
            assert!(build_limiter(rate).is_ok(), "rate {rate}");
        }
    }

    #[test]
    fn replenish_period_spreads_the_minute() {
        // 600/min refills one slot every 100 ms; above 60k/min it floors at 1 ms.
        assert_eq!(replenish_millis(600), 100);
        assert_eq!(replenish_millis(1), 60_000);
        assert_eq!(replenish_millis(100_000), 1);
    }

    #[test]
    fn zero_burst_is_rejected() {
        assert!(build_limiter(0).is_err());
    }
}
