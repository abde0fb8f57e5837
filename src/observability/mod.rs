//! 可观测性模块
//!
//! 提供基于原子计数器的应用指标和 Prometheus 文本格式输出。

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// 应用指标
#[derive(Clone, Default)]
pub struct AppMetrics {
    pub http_requests_total: Arc<AtomicU64>,
    pub tool_calls_total: Arc<AtomicU64>,
    pub emergency_detections_total: Arc<AtomicU64>,
    pub chemist_lookup_failures_total: Arc<AtomicU64>,
    pub errors_total: Arc<AtomicU64>,
}

impl AppMetrics {
    /// 记录 HTTP 请求
    pub fn record_http_request(&self) {
        self.http_requests_total.fetch_add(1, Ordering::SeqCst);
    }

    /// 记录工具调用
    pub fn record_tool_call(&self) {
        self.tool_calls_total.fetch_add(1, Ordering::SeqCst);
    }

    /// 记录红旗命中
    pub fn record_emergency_detection(&self) {
        self.emergency_detections_total.fetch_add(1, Ordering::SeqCst);
    }

    /// 记录药店搜索降级
    pub fn record_chemist_lookup_failure(&self) {
        self.chemist_lookup_failures_total
            .fetch_add(1, Ordering::SeqCst);
    }

    /// 记录错误
    pub fn record_error(&self) {
        self.errors_total.fetch_add(1, Ordering::SeqCst);
    }

    /// 生成 Prometheus 格式指标
    pub fn gather(&self) -> String {
        format!(
            r#"# HELP http_requests_total Total HTTP requests
# TYPE http_requests_total counter
http_requests_total {}
# HELP tool_calls_total Total tool calls dispatched
# TYPE tool_calls_total counter
tool_calls_total {}
# HELP emergency_detections_total Total emergency red-flag detections
# TYPE emergency_detections_total counter
emergency_detections_total {}
# HELP chemist_lookup_failures_total Total chemist searches that fell back to manual guidance
# TYPE chemist_lookup_failures_total counter
chemist_lookup_failures_total {}
# HELP errors_total Total errors
# TYPE errors_total counter
errors_total {}
"#,
            self.http_requests_total.load(Ordering::SeqCst),
            self.tool_calls_total.load(Ordering::SeqCst),
            self.emergency_detections_total.load(Ordering::SeqCst),
            self.chemist_lookup_failures_total.load(Ordering::SeqCst),
            self.errors_total.load(Ordering::SeqCst),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_accumulate() {
        let metrics = AppMetrics::default();
        metrics.record_http_request();
        metrics.record_http_request();
        metrics.record_tool_call();
        metrics.record_emergency_detection();

        assert_eq!(metrics.http_requests_total.load(Ordering::SeqCst), 2);
        assert_eq!(metrics.tool_calls_total.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_gather_prometheus_format() {
        let metrics = AppMetrics::default();
        metrics.record_emergency_detection();

        let output = metrics.gather();
        assert!(output.contains("# TYPE http_requests_total counter"));
        assert!(output.contains("emergency_detections_total 1"));
    }
}
