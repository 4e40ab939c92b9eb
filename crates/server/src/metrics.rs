use once_cell::sync::Lazy;
use prometheus::{register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};

use service::errors::ServiceError;

// Prometheus metrics (default registry)
pub static SIGN_IN_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!("koopos_sign_in_total", "Sign-in attempts by outcome", &["outcome"])
        .expect("register sign_in_total")
});

pub static SIGN_UP_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!("koopos_sign_up_total", "Sign-up attempts by outcome", &["outcome"])
        .expect("register sign_up_total")
});

pub fn outcome<T>(res: &Result<T, ServiceError>) -> &'static str {
    match res {
        Ok(_) => "success",
        Err(ServiceError::Validation(_)) => "validation",
        Err(ServiceError::Conflict(_)) => "conflict",
        Err(ServiceError::NotFound(_)) => "not_found",
        Err(ServiceError::Authentication(_)) => "authentication",
        Err(ServiceError::Internal(_)) => "internal",
    }
}

pub fn record<T>(counter: &IntCounterVec, res: &Result<T, ServiceError>) {
    counter.with_label_values(&[outcome(res)]).inc();
}

pub fn encode_metrics() -> (axum::http::StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (
        axum::http::StatusCode::OK,
        String::from_utf8(buffer).unwrap_or_default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use service::response::ErrorDetail;

    #[test]
    fn outcome_labels() {
        assert_eq!(outcome::<()>(&Ok(())), "success");
        let err: Result<(), _> = Err(ServiceError::Authentication(ErrorDetail::authentication_failed()));
        assert_eq!(outcome(&err), "authentication");
    }

    #[test]
    fn counters_show_up_in_text_output() {
        record(&SIGN_UP_TOTAL, &Ok::<(), ServiceError>(()));
        let (status, body) = encode_metrics();
        assert_eq!(status, axum::http::StatusCode::OK);
        assert!(body.contains("koopos_sign_up_total"));
    }
}
