use serde::Serialize;

/// Throughput summary for one Running→Idle interval
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub executor: &'static str,
    pub workers: u32,
    pub generations: u64,
    pub elapsed_ms: u64,
    pub generations_per_sec: u64,
}

impl RunReport {
    /// A zero-length interval counts as 1 ms
    pub fn new(executor: &'static str, workers: u32, generations: u64, elapsed_ms: u64) -> Self {
        let elapsed_ms = elapsed_ms.max(1);
        Self {
            executor,
            workers,
            generations,
            elapsed_ms,
            generations_per_sec: generations.saturating_mul(1000) / elapsed_ms,
        }
    }

    pub fn message(&self) -> String {
        format!(
            "[{}, {} worker(s)] {} generations in {} ms ({}/sec)",
            self.executor, self.workers, self.generations, self.elapsed_ms, self.generations_per_sec
        )
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "null".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_duration_counts_as_one_millisecond() {
        let report = RunReport::new("No threads", 1, 7, 0);
        assert_eq!(report.elapsed_ms, 1);
        assert_eq!(report.generations_per_sec, 7000);
    }

    #[test]
    fn throughput_is_integer_division() {
        let report = RunReport::new("Thread pool", 4, 10, 3000);
        assert_eq!(report.generations_per_sec, 3);
        assert!(report.message().contains("10 generations in 3000 ms"));
    }

    #[test]
    fn json_uses_camel_case() {
        let json = RunReport::new("Scoped threads", 2, 1, 1).to_json();
        assert!(json.contains("\"generationsPerSec\":1000"));
        assert!(json.contains("\"elapsedMs\":1"));
    }
}
