use std::io::Write;
use std::sync::{Mutex, MutexGuard};

use crate::metrics::snapshot::LruMetricsSnapshot;
use crate::metrics::traits::MetricsExporter;

/// Prometheus text exporter for LRU metrics snapshots.
///
/// Writes the Prometheus text exposition format so output can be scraped
/// directly or forwarded to an OpenTelemetry collector. Write errors are
/// dropped: exporting is best-effort and must never fail a cache caller.
///
/// # Example
///
/// ```
/// use lrukit::metrics::exporter::PrometheusTextExporter;
/// use lrukit::metrics::snapshot::LruMetricsSnapshot;
/// use lrukit::metrics::traits::MetricsExporter;
///
/// let exporter = PrometheusTextExporter::new("sessions", Vec::new());
/// exporter.export(&LruMetricsSnapshot { get_hits: 3, ..Default::default() });
/// let text = String::from_utf8(exporter.into_inner()).unwrap();
/// assert!(text.contains("sessions_get_hits_total 3"));
/// ```
#[derive(Debug)]
pub struct PrometheusTextExporter<W: Write + Send> {
    prefix: String,
    writer: Mutex<W>,
}

impl<W: Write + Send> PrometheusTextExporter<W> {
    pub fn new(prefix: impl Into<String>, writer: W) -> Self {
        Self {
            prefix: prefix.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the exporter and returns the underlying writer.
    pub fn into_inner(self) -> W {
        match self.writer.into_inner() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, W> {
        // A panic mid-write leaves at worst a truncated line; keep exporting.
        match self.writer.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn metric_name(&self, suffix: &str) -> String {
        if self.prefix.is_empty() {
            suffix.to_string()
        } else {
            format!("{}_{}", self.prefix, suffix)
        }
    }

    fn write_metric(writer: &mut W, kind: &str, name: &str, value: u64) {
        let _ = writeln!(writer, "# TYPE {} {}", name, kind);
        let _ = writeln!(writer, "{} {}", name, value);
    }
}

impl<W: Write + Send> MetricsExporter<LruMetricsSnapshot> for PrometheusTextExporter<W> {
    fn export(&self, snapshot: &LruMetricsSnapshot) {
        let counters = [
            ("get_calls_total", snapshot.get_calls),
            ("get_hits_total", snapshot.get_hits),
            ("get_misses_total", snapshot.get_misses),
            ("insert_calls_total", snapshot.insert_calls),
            ("insert_updates_total", snapshot.insert_updates),
            ("insert_new_total", snapshot.insert_new),
            ("evict_calls_total", snapshot.evict_calls),
            ("evicted_entries_total", snapshot.evicted_entries),
            ("pop_lru_calls_total", snapshot.pop_lru_calls),
            ("pop_lru_found_total", snapshot.pop_lru_found),
            ("touch_calls_total", snapshot.touch_calls),
            ("touch_found_total", snapshot.touch_found),
            ("peek_calls_total", snapshot.peek_calls),
            ("peek_hits_total", snapshot.peek_hits),
            ("peek_lru_calls_total", snapshot.peek_lru_calls),
            ("peek_lru_found_total", snapshot.peek_lru_found),
            ("recency_rank_calls_total", snapshot.recency_rank_calls),
            ("recency_rank_found_total", snapshot.recency_rank_found),
            ("recency_rank_scan_steps_total", snapshot.recency_rank_scan_steps),
        ];
        let gauges = [
            ("cache_len", snapshot.cache_len as u64),
            ("capacity", snapshot.capacity as u64),
        ];

        let mut writer = self.lock();
        for (suffix, value) in counters {
            Self::write_metric(&mut writer, "counter", &self.metric_name(suffix), value);
        }
        for (suffix, value) in gauges {
            Self::write_metric(&mut writer, "gauge", &self.metric_name(suffix), value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_type_lines_and_values() {
        let exporter = PrometheusTextExporter::new("lru", Vec::new());
        exporter.export(&LruMetricsSnapshot {
            get_calls: 5,
            evicted_entries: 2,
            cache_len: 7,
            capacity: 8,
            ..Default::default()
        });
        let text = String::from_utf8(exporter.into_inner()).unwrap();

        assert!(text.contains("# TYPE lru_get_calls_total counter\nlru_get_calls_total 5\n"));
        assert!(text.contains("lru_evicted_entries_total 2\n"));
        assert!(text.contains("# TYPE lru_cache_len gauge\nlru_cache_len 7\n"));
        assert!(text.contains("lru_capacity 8\n"));
    }

    #[test]
    fn empty_prefix_uses_bare_names() {
        let exporter = PrometheusTextExporter::new("", Vec::new());
        exporter.export(&LruMetricsSnapshot::default());
        let text = String::from_utf8(exporter.into_inner()).unwrap();
        assert!(text.lines().any(|line| line == "get_hits_total 0"));
        assert!(!text.contains("_get_hits_total"));
    }
}
