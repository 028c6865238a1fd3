//! Logging setup utilities.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Build the default filter directive, e.g. `hiroba_server=info,tower_http=info`.
///
/// Crate names are normalized to their module form (`-` becomes `_`).
pub fn default_filter_directive(targets: &[&str], default_log_level: &str) -> String {
    targets
        .iter()
        .map(|target| format!("{}={}", target.replace('-', "_"), default_log_level))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize the tracing subscriber with the specified default log level.
///
/// The level applies to every crate in `targets`. It can be overridden using
/// the `RUST_LOG` environment variable.
///
/// # Arguments
///
/// * `targets` - Crates or binaries whose events should be shown (e.g. `["hiroba-server"]`)
/// * `default_log_level` - The default log level (e.g., "debug", "info", "warn", "error")
///
/// # Examples
///
/// ```no_run
/// use hiroba_shared::logger::setup_logger;
///
/// setup_logger(&["hiroba-server", "tower_http"], "debug");
/// ```
pub fn setup_logger(targets: &[&str], default_log_level: &str) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter_directive(targets, default_log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_directive_normalizes_crate_names() {
        // テスト項目: クレート名のハイフンがアンダースコアに変換される
        // given (前提条件):
        let targets = ["hiroba-server", "tower_http"];

        // when (操作):
        let directive = default_filter_directive(&targets, "debug");

        // then (期待する結果):
        assert_eq!(directive, "hiroba_server=debug,tower_http=debug");
    }

    #[test]
    fn test_default_filter_directive_parses_as_env_filter() {
        // テスト項目: 生成したディレクティブが EnvFilter として解釈できる
        // given (前提条件):
        let directive = default_filter_directive(&["hiroba-server"], "info");

        // when (操作):
        let result = EnvFilter::try_new(&directive);

        // then (期待する結果):
        assert!(result.is_ok());
    }
}
