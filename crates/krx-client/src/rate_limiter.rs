//! 요청 속도 제한.
//!
//! 호출 기록 기반 rate limiting을 제공합니다. KRX OpenAPI는 요청 빈도를
//! 제한하므로 하나의 클라이언트가 수행하는 모든 엔드포인트 호출은
//! 동일한 `RateLimiter` 인스턴스를 공유합니다.

use std::time::{Duration, Instant};

use tokio::sync::Mutex;

use crate::error::KrxError;

/// 호출 기록 기반 rate limiter.
///
/// `period` 동안 최대 `max_calls`회의 호출만 허용합니다. 한도에 도달하면
/// [`acquire`](RateLimiter::acquire)는 가장 오래된 호출이 시간 창을
/// 벗어날 때까지 대기합니다.
#[derive(Debug)]
pub struct RateLimiter {
    /// 기간 내 허용되는 최대 호출 수
    max_calls: usize,
    /// 시간 창 길이
    period: Duration,
    /// 허용된 호출 시각 기록 (오래된 순)
    calls: Mutex<Vec<Instant>>,
}

impl RateLimiter {
    /// 새 rate limiter 생성.
    ///
    /// `max_calls`가 0이거나 `period`가 0이면 설정 에러를 반환합니다.
    pub fn new(max_calls: usize, period: Duration) -> Result<Self, KrxError> {
        if max_calls == 0 {
            return Err(KrxError::Config(
                "rate limiter max_calls must be positive".to_string(),
            ));
        }
        if period.is_zero() {
            return Err(KrxError::Config(
                "rate limiter period must be positive".to_string(),
            ));
        }

        Ok(Self {
            max_calls,
            period,
            calls: Mutex::new(Vec::new()),
        })
    }

    /// 호출 슬롯을 획득합니다. 한도 초과 시 용량이 생길 때까지 대기합니다.
    ///
    /// 대기 중에도 잠금을 유지하므로 동시 호출자는 도착 순서대로
    /// 처리됩니다. 대기 후에는 호출 기록이 초기화되어 시간 창이 새로
    /// 시작됩니다.
    pub async fn acquire(&self) {
        let mut calls = self.calls.lock().await;
        let now = Instant::now();

        // 시간 창 밖의 호출 제거
        calls.retain(|&call| now.duration_since(call) < self.period);

        // 한도에 도달했으면 가장 오래된 호출이 창을 벗어날 때까지 대기
        if calls.len() >= self.max_calls {
            let oldest = calls[0];
            let wait = self.period.saturating_sub(now.duration_since(oldest));
            if !wait.is_zero() {
                tokio::time::sleep(wait).await;
                // 대기 후 호출 기록 초기화
                calls.clear();
            }
        }

        calls.push(Instant::now());
    }

    /// 설정된 최대 호출 수 반환.
    pub fn max_calls(&self) -> usize {
        self.max_calls
    }

    /// 설정된 시간 창 길이 반환.
    pub fn period(&self) -> Duration {
        self.period
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_rejects_zero_max_calls() {
        let result = RateLimiter::new(0, Duration::from_secs(1));
        assert!(matches!(result, Err(KrxError::Config(_))));
    }

    #[test]
    fn test_rejects_zero_period() {
        let result = RateLimiter::new(10, Duration::ZERO);
        assert!(matches!(result, Err(KrxError::Config(_))));
    }

    #[tokio::test]
    async fn test_calls_within_limit_do_not_wait() {
        let limiter = RateLimiter::new(5, Duration::from_millis(500)).unwrap();

        let start = Instant::now();
        for _ in 0..5 {
            limiter.acquire().await;
        }

        assert!(start.elapsed() < Duration::from_millis(100));
    }

    #[tokio::test]
    async fn test_waits_when_limit_exceeded() {
        let limiter = RateLimiter::new(3, Duration::from_millis(300)).unwrap();

        let start = Instant::now();
        for _ in 0..4 {
            limiter.acquire().await;
        }

        // 네 번째 호출은 한 시간 창 이상 대기해야 함
        assert!(start.elapsed() >= Duration::from_millis(300));
    }

    #[tokio::test]
    async fn test_history_resets_after_wait() {
        let limiter = RateLimiter::new(2, Duration::from_millis(200)).unwrap();

        limiter.acquire().await;
        limiter.acquire().await;
        limiter.acquire().await;

        // 대기 후 기록이 초기화되고 새 호출만 남아야 함
        let calls = limiter.calls.lock().await;
        assert_eq!(calls.len(), 1);
    }

    #[tokio::test]
    async fn test_allows_calls_after_period_expires() {
        let limiter = RateLimiter::new(2, Duration::from_millis(150)).unwrap();

        limiter.acquire().await;
        limiter.acquire().await;

        tokio::time::sleep(Duration::from_millis(200)).await;

        // 시간 창이 지났으므로 대기 없이 허용
        let start = Instant::now();
        limiter.acquire().await;
        limiter.acquire().await;
        assert!(start.elapsed() < Duration::from_millis(100));
    }

    #[tokio::test]
    async fn test_concurrent_calls_respect_limit() {
        let limiter = Arc::new(RateLimiter::new(2, Duration::from_millis(300)).unwrap());

        let start = Instant::now();
        let mut handles = Vec::new();
        for _ in 0..4 {
            let limiter = Arc::clone(&limiter);
            handles.push(tokio::spawn(async move {
                limiter.acquire().await;
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        // 네 개의 호출 중 두 개는 시간 창 대기를 거쳐야 함
        assert!(start.elapsed() >= Duration::from_millis(300));
    }
}
