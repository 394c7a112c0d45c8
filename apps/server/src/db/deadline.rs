//! Per-operation deadline and query metrics for store calls.

use crate::{metrics, Error, Result};
use std::future::Future;
use std::time::{Duration, Instant};

/// Run `fut` under `deadline`, recording duration and failures under `operation`.
///
/// Expiry drops `fut`, which releases any pooled connection or rolls back an
/// open transaction.
pub(crate) async fn run_with_deadline<T, F>(
    operation: &'static str,
    deadline: Duration,
    fut: F,
) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    let start = Instant::now();
    let outcome = match tokio::time::timeout(deadline, fut).await {
        Ok(result) => result,
        Err(_) => Err(Error::Timeout(format!(
            "{operation} exceeded {} ms",
            deadline.as_millis()
        ))),
    };

    metrics::DB_QUERY_DURATION_SECONDS
        .with_label_values(&[operation])
        .observe(start.elapsed().as_secs_f64());

    if let Err(e) = &outcome {
        metrics::DB_QUERY_ERRORS_TOTAL
            .with_label_values(&[operation, error_kind(e)])
            .inc();
    }

    outcome
}

fn error_kind(error: &Error) -> &'static str {
    match error {
        Error::Timeout(_) => "timeout",
        Error::NotFound(_) => "not_found",
        Error::Ambiguous(_) => "ambiguous",
        Error::Database(_) => "database",
        _ => "other",
    }
}
