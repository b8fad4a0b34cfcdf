use std::panic;
use std::process;

use better_panic::Settings;
use color_eyre::config::HookBuilder;
use color_eyre::eyre::Result;

use super::paths::{get_data_dir, LOG_FILE};
use crate::infrastructure::tui::real::RealTui;

/// Install color-eyre hooks and a panic hook that puts the terminal back first.
///
/// Release builds write a human-panic crash dump; debug builds print a full
/// better-panic backtrace. Both log a plain-text report to `storefront.log`.
pub fn initialize_panic_handler() -> Result<()> {
    let (panic_hook, eyre_hook) = HookBuilder::default()
        .panic_section(panic_section())
        .capture_span_trace_by_default(false)
        .display_location_section(false)
        .display_env_section(false)
        .into_hooks();
    eyre_hook.install()?;
    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();

        let report = panic_hook.panic_report(panic_info).to_string();
        log::error!("storefront panicked: {}", plain_report(&report));

        #[cfg(not(debug_assertions))]
        {
            use human_panic::{handle_dump, print_msg, Metadata};
            let meta = Metadata::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
                .authors(env!("CARGO_PKG_AUTHORS").replace(':', ", "))
                .homepage(env!("CARGO_PKG_HOMEPAGE"));

            let file_path = handle_dump(&meta, panic_info);
            if let Err(e) = print_msg(file_path, &meta) {
                eprintln!("human-panic: printing error message to console failed: {e}");
            }
            eprintln!("{report}");
        }

        #[cfg(debug_assertions)]
        {
            Settings::auto()
                .most_recent_first(false)
                .lineno_suffix(true)
                .verbosity(better_panic::Verbosity::Full)
                .create_panic_handler()(panic_info);
        }

        process::exit(libc::EXIT_FAILURE);
    }));
    Ok(())
}

/// Leave raw mode, mouse capture and the alternate screen.
fn restore_terminal() {
    match RealTui::new() {
        Ok(mut tui) => {
            if let Err(e) = tui.exit() {
                tracing::error!("Unable to exit terminal: {e:?}");
            }
        }
        Err(e) => tracing::error!("Unable to reach terminal after panic: {e:?}"),
    }
}

/// Extra section appended to every panic report.
fn panic_section() -> String {
    let log_path = get_data_dir().join(LOG_FILE.as_str());
    format!(
        "This is a bug in {} {}. The session log is at {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        log_path.display()
    )
}

/// Colorless single-block report for the log file.
fn plain_report(report: &str) -> String {
    strip_ansi_escapes::strip_str(report).trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_panic_section_points_at_log_file() {
        let section = panic_section();
        assert!(section.starts_with("This is a bug in storefront"));
        assert!(section.contains(env!("CARGO_PKG_VERSION")));
        assert!(section.ends_with("storefront.log"));
    }

    #[test]
    fn test_plain_report_strips_colors() {
        let colored = "\u{1b}[31mThe application panicked\u{1b}[0m: boom\n\n";
        assert_eq!(plain_report(colored), "The application panicked: boom");
    }

    #[test]
    fn test_plain_report_keeps_plain_text() {
        assert_eq!(plain_report("line 1\nline 2"), "line 1\nline 2");
    }
}
