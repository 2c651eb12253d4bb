use std::{future::Future, time::Duration};

use anyhow::Result;
use rand::{thread_rng, Rng};

pub struct ExponentialBackoff {
    base: Duration,
    current_multiplier: f32,
    multiplier: f32,
    max_sleep: Duration,
    jitter: bool,
}

impl ExponentialBackoff {
    pub fn new(base: Duration) -> Self {
        Self {
            base,
            current_multiplier: 1.0,
            multiplier: 2.0,
            max_sleep: base * 32,
            jitter: true,
        }
    }

    pub fn next_sleep(&mut self) -> Duration {
        let t = self.base.mul_f32(self.current_multiplier);
        let t = if t >= self.max_sleep {
            self.max_sleep
        } else {
            self.current_multiplier *= self.multiplier;
            t
        };
        if self.jitter && !t.is_zero() {
            // https://aws.amazon.com/cn/blogs/architecture/exponential-backoff-and-jitter/
            thread_rng().gen_range(Duration::ZERO..t)
        } else {
            t
        }
    }

    pub fn reset(&mut self) {
        self.current_multiplier = 1.0;
    }

    pub fn with_max_sleep(self, max_sleep: Duration) -> Self {
        Self { max_sleep, ..self }
    }

    pub fn with_jitter(self, jitter: bool) -> Self {
        Self { jitter, ..self }
    }
}

/// Run `f` until it succeeds. Errors accepted by `is_retryable` are
/// retried after a backoff sleep, at most `max_retries` times; any other
/// error, or the last retryable one, is returned.
pub async fn retry_with_backoff<T, F, Fut, R>(
    mut backoff: ExponentialBackoff,
    max_retries: u32,
    is_retryable: R,
    mut f: F,
) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
    R: Fn(&anyhow::Error) -> bool,
{
    let mut retries = 0;
    loop {
        match f().await {
            Ok(r) => return Ok(r),
            Err(err) if retries < max_retries && is_retryable(&err) => {
                retries += 1;
                let sleep = backoff.next_sleep();
                log::warn!(
                    "request failed, retry {}/{} in {}ms: {}",
                    retries,
                    max_retries,
                    sleep.as_millis(),
                    err
                );
                tokio::time::sleep(sleep).await;
            }
            Err(err) => return Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_backoff() {
        let mut b = ExponentialBackoff::new(Duration::from_secs(1))
            .with_max_sleep(Duration::from_secs(64));
        b.next_sleep();
        assert!(b.current_multiplier == 2.0);
        b.next_sleep();
        assert!(b.current_multiplier == 4.0);
        for _ in 0..10 {
            b.next_sleep();
        }
        assert!(b.current_multiplier == 64.0);
        b.reset();
        assert!(b.current_multiplier == 1.0);
    }

    #[tokio::test]
    async fn test_retry_until_success() {
        let attempts = &AtomicU32::new(0);
        let backoff = ExponentialBackoff::new(Duration::from_millis(1)).with_jitter(false);
        let r = retry_with_backoff(backoff, 5, |_| true, move || async move {
            if attempts.fetch_add(1, Ordering::SeqCst) < 2 {
                Err(anyhow!("connection refused"))
            } else {
                Ok(42)
            }
        })
        .await
        .unwrap();
        assert_eq!(r, 42);
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_retry_exhausted() {
        let attempts = &AtomicU32::new(0);
        let backoff = ExponentialBackoff::new(Duration::from_millis(1)).with_jitter(false);
        let r: Result<()> = retry_with_backoff(backoff, 2, |_| true, move || async move {
            attempts.fetch_add(1, Ordering::SeqCst);
            Err(anyhow!("connection refused"))
        })
        .await;
        assert!(r.is_err());
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_no_retry_on_fatal_error() {
        let attempts = &AtomicU32::new(0);
        let backoff = ExponentialBackoff::new(Duration::from_millis(1));
        let r: Result<()> = retry_with_backoff(backoff, 5, |_| false, move || async move {
            attempts.fetch_add(1, Ordering::SeqCst);
            Err(anyhow!("malformed block"))
        })
        .await;
        assert!(r.is_err());
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }
}
