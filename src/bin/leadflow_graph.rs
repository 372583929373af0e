//! Prints the graph of a configured lead workflow as JSON.
//!
//! Usage:
//!
//! ```text
//! leadflow-graph [--pretty] [settings-path]
//! ```
//!
//! Settings are read from `settings-path`, else from the file named by
//! `LEADFLOW_SETTINGS`, else from `leadflow.toml`; a missing file means
//! defaults. The graph of the seeded workflow is written to stdout with one
//! node per status and one edge per transition. Logs go to stderr.

use leadflow::config::{self, EditorSettings};
use leadflow::telemetry;
use leadflow::workflow::{adapters::JsonGraphRenderer, adapters::RandomIdSource};
use std::env;
use std::io;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
enum ArgsError {
    #[error("unexpected argument '{0}'; usage: leadflow-graph [--pretty] [settings-path]")]
    Unexpected(String),
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    pretty: bool,
    settings_path: Option<String>,
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<Args, ArgsError> {
    let mut parsed = Args::default();
    for arg in args {
        if arg == "--pretty" {
            parsed.pretty = true;
        } else if parsed.settings_path.is_none() && !arg.starts_with('-') {
            parsed.settings_path = Some(arg);
        } else {
            return Err(ArgsError::Unexpected(arg));
        }
    }
    Ok(parsed)
}

fn main() -> Result<(), BoxError> {
    let args = parse_args(env::args().skip(1))?;
    let settings_path = EditorSettings::resolve_path(args.settings_path.as_deref());
    let loaded = EditorSettings::load_optional(&settings_path)?;
    telemetry::init_tracing(
        loaded
            .as_ref()
            .and_then(|found| found.log_filter.as_deref()),
    )?;
    config::log_loaded(&settings_path, loaded.as_ref());
    let settings = loaded.unwrap_or_default();

    let editor = settings.build_editor(Arc::new(RandomIdSource))?;
    info!(
        settings = %settings_path,
        statuses = editor.statuses().len(),
        transitions = editor.transitions().len(),
        "rendering workflow graph"
    );

    let stdout = io::stdout();
    let compact = JsonGraphRenderer::new(stdout.lock());
    let mut renderer = if args.pretty {
        compact.pretty()
    } else {
        compact
    };
    editor.render_graph(&mut renderer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Args, ArgsError, parse_args};
    use rstest::rstest;

    fn strings(values: &[&str]) -> impl Iterator<Item = String> {
        values
            .iter()
            .map(|value| (*value).to_owned())
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[rstest]
    fn parses_flag_and_path() {
        let args = parse_args(strings(&["--pretty", "flow.toml"])).expect("valid args");

        assert_eq!(
            args,
            Args {
                pretty: true,
                settings_path: Some("flow.toml".to_owned()),
            }
        );
    }

    #[rstest]
    fn no_arguments_means_defaults() {
        let args = parse_args(strings(&[])).expect("valid args");

        assert_eq!(args, Args::default());
    }

    #[rstest]
    #[case(&["--verbose"])]
    #[case(&["a.toml", "b.toml"])]
    fn rejects_unexpected_arguments(#[case] values: &[&str]) {
        let result = parse_args(strings(values));

        assert!(matches!(result, Err(ArgsError::Unexpected(_))));
    }
}
