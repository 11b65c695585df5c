use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    login_successes: AtomicU64,
    login_failures: AtomicU64,
    scans_recorded: AtomicU64,
    scans_rejected: AtomicU64,
    store_errors: AtomicU64,
}

impl Metrics {
    pub fn record_login(&self, accepted: bool) {
        if accepted {
            self.login_successes.fetch_add(1, Ordering::Relaxed);
        } else {
            self.login_failures.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_scan(&self) {
        self.scans_recorded.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_scan_rejected(&self) {
        self.scans_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_store_error(&self) {
        self.store_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn scans_recorded(&self) -> u64 {
        self.scans_recorded.load(Ordering::Relaxed)
    }

    pub fn render_prometheus(&self) -> String {
        let successes = self.login_successes.load(Ordering::Relaxed);
        let failures = self.login_failures.load(Ordering::Relaxed);
        let recorded = self.scans_recorded.load(Ordering::Relaxed);
        let rejected = self.scans_rejected.load(Ordering::Relaxed);
        let store_errors = self.store_errors.load(Ordering::Relaxed);

        format!(
            "# TYPE qrtrace_login_success_total counter\n\
qrtrace_login_success_total {}\n\
# TYPE qrtrace_login_failure_total counter\n\
qrtrace_login_failure_total {}\n\
# TYPE qrtrace_scans_recorded_total counter\n\
qrtrace_scans_recorded_total {}\n\
# TYPE qrtrace_scans_rejected_total counter\n\
qrtrace_scans_rejected_total {}\n\
# TYPE qrtrace_store_errors_total counter\n\
qrtrace_store_errors_total {}\n",
            successes, failures, recorded, rejected, store_errors
        )
    }
}
