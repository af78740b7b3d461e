use std::fs;
use std::io::IsTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log to stderr so generated output on stdout stays copy-pasteable
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "city_carousels=debug"
    } else {
        "city_carousels=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time()
                .compact(),
        )
        .init();
}

/// Create an OSC8 file:// hyperlink for terminal output
pub fn osc8_file_link(path: &str, text: &str) -> String {
    let abs_path = fs::canonicalize(path)
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|_| path.to_string());
    format!("\x1b]8;;file://{}\x1b\\{}\x1b]8;;\x1b\\", abs_path, text)
}

/// Link `path` when stderr is a terminal, plain text otherwise
pub fn display_path(path: &str) -> String {
    if std::io::stderr().is_terminal() {
        osc8_file_link(path, path)
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_osc8_file_link_falls_back_to_given_path() {
        let link = osc8_file_link("does/not/exist.html", "page");
        assert_eq!(
            link,
            "\x1b]8;;file://does/not/exist.html\x1b\\page\x1b]8;;\x1b\\"
        );
    }
}
