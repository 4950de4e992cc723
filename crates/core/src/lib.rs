pub mod advisory;
pub mod domain;
pub mod scoring;

pub mod config {
    use crate::advisory::DEFAULT_TOP_N;

    #[derive(Debug, Clone)]
    pub struct Settings {
        pub sentry_dsn: Option<String>,
        pub advisory_top_n: usize,
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            Self::from_vars(|key| std::env::var(key).ok())
        }

        pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
            let advisory_top_n = var("ADVISORY_TOP_N")
                .and_then(|s| s.trim().parse::<usize>().ok())
                .unwrap_or(DEFAULT_TOP_N);
            anyhow::ensure!(advisory_top_n >= 1, "ADVISORY_TOP_N must be >= 1");

            Ok(Self {
                sentry_dsn: var("SENTRY_DSN").filter(|s| !s.trim().is_empty()),
                advisory_top_n,
            })
        }
    }

    impl Default for Settings {
        fn default() -> Self {
            Self {
                sentry_dsn: None,
                advisory_top_n: DEFAULT_TOP_N,
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use std::collections::HashMap;

        fn settings(pairs: &[(&str, &str)]) -> anyhow::Result<Settings> {
            let vars: HashMap<String, String> = pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            Settings::from_vars(|key| vars.get(key).cloned())
        }

        #[test]
        fn defaults_when_unset() {
            let s = settings(&[]).unwrap();
            assert_eq!(s.advisory_top_n, DEFAULT_TOP_N);
            assert!(s.sentry_dsn.is_none());
        }

        #[test]
        fn reads_top_n_and_dsn() {
            let s = settings(&[("ADVISORY_TOP_N", "3"), ("SENTRY_DSN", "https://k@o0.ingest/1")])
                .unwrap();
            assert_eq!(s.advisory_top_n, 3);
            assert_eq!(s.sentry_dsn.as_deref(), Some("https://k@o0.ingest/1"));
        }

        #[test]
        fn unparseable_top_n_falls_back() {
            let s = settings(&[("ADVISORY_TOP_N", "five")]).unwrap();
            assert_eq!(s.advisory_top_n, DEFAULT_TOP_N);
        }

        #[test]
        fn zero_top_n_is_rejected() {
            assert!(settings(&[("ADVISORY_TOP_N", "0")]).is_err());
        }

        #[test]
        fn blank_dsn_is_ignored() {
            assert!(settings(&[("SENTRY_DSN", "  ")]).unwrap().sentry_dsn.is_none());
        }
    }
}
