use std::{
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, bail, Context as _};
use async_graphql::{Request, Variables};
use clap::{Parser, Subcommand};
use people_graph::SchemaConfig;
use tracing::Subscriber;
use tracing_subscriber::{registry::LookupSpan, Layer};

mod log;

pub(crate) use log::LogLevel;

use self::log::LogStyle;

pub(crate) type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync + 'static>;

const DEFAULT_CONFIG_PATH: &str = "./people-graph.toml";

pub(crate) fn parse() -> Args {
    Args::parse()
}

#[derive(Debug, Parser)]
#[command(name = "people-graph", version)]
/// Runs GraphQL operations against an in-memory people graph
pub(crate) struct Args {
    /// Path to the TOML configuration file. The default path may be missing.
    #[arg(long, short, env = "PEOPLE_GRAPH_CONFIG_PATH", default_value = DEFAULT_CONFIG_PATH, global = true)]
    pub config: PathBuf,
    /// Set the logging level
    #[arg(long = "log", env = "PEOPLE_GRAPH_LOG", global = true)]
    pub log_level: Option<LogLevel>,
    /// Set the style of log output
    #[arg(long, env = "PEOPLE_GRAPH_LOG_STYLE", default_value_t = LogStyle::Text, global = true)]
    log_style: LogStyle,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Print the schema in SDL
    Sdl,
    /// Execute one operation and print the JSON response
    Execute(ExecuteArgs),
}

#[derive(Debug, clap::Args)]
pub(crate) struct ExecuteArgs {
    /// File holding the GraphQL document, `-` for standard input
    #[arg(long, short, default_value = "-")]
    pub query: PathBuf,
    /// Variables as a JSON object
    #[arg(long, short)]
    pub variables: Option<String>,
    /// The operation to run when the document holds more than one
    #[arg(long)]
    pub operation_name: Option<String>,
}

impl Args {
    pub fn log_level(&self) -> Option<LogLevel> {
        self.log_level
    }

    /// Reads the configuration file. A missing file at the default path means defaults.
    pub fn config(&self) -> anyhow::Result<SchemaConfig> {
        let contents = match fs::read_to_string(&self.config) {
            Ok(contents) => contents,
            Err(error) if error.kind() == io::ErrorKind::NotFound && self.config == Path::new(DEFAULT_CONFIG_PATH) => {
                tracing::debug!("no configuration at {DEFAULT_CONFIG_PATH}, using defaults");
                return Ok(SchemaConfig::default());
            }
            Err(error) => return Err(anyhow!("error loading config {}:\n{error}", self.config.display())),
        };

        toml::from_str(&contents).map_err(|error| anyhow!("error parsing config {}:\n{error}", self.config.display()))
    }

    pub fn log_format<S>(&self) -> BoxedLayer<S>
    where
        S: Subscriber + for<'span> LookupSpan<'span> + Send + Sync,
    {
        // stdout carries the responses
        let layer = tracing_subscriber::fmt::layer().with_writer(io::stderr);

        match self.log_style {
            LogStyle::Text if atty::is(atty::Stream::Stderr) => layer.with_ansi(true).boxed(),
            LogStyle::Text => layer.with_ansi(false).boxed(),
            LogStyle::Json => layer.json().boxed(),
        }
    }
}

impl ExecuteArgs {
    pub fn request(&self) -> anyhow::Result<Request> {
        let document = if self.query.as_os_str() == "-" {
            io::read_to_string(io::stdin()).context("reading the operation from standard input")?
        } else {
            fs::read_to_string(&self.query).with_context(|| format!("reading {}", self.query.display()))?
        };

        let mut request = Request::new(document);

        if let Some(variables) = &self.variables {
            let variables: serde_json::Value = serde_json::from_str(variables).context("parsing variables")?;

            if !variables.is_object() {
                bail!("variables must be a JSON object");
            }

            request = request.variables(Variables::from_json(variables));
        }

        if let Some(operation_name) = &self.operation_name {
            request = request.operation_name(operation_name);
        }

        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use indoc::indoc;

    use super::*;

    #[test]
    fn execute_defaults() {
        let args = Args::try_parse_from(["people-graph", "execute"]).unwrap();

        assert_eq!(args.config, Path::new(DEFAULT_CONFIG_PATH));
        assert_eq!(args.log_level(), None);

        let Command::Execute(execute) = args.command else {
            unreachable!("expected the execute command");
        };

        assert_eq!(execute.query, Path::new("-"));
        assert_eq!(execute.variables, None);
    }

    #[test]
    fn global_flags_after_the_subcommand() {
        let args = Args::try_parse_from(["people-graph", "sdl", "--log", "debug", "--log-style", "json"]).unwrap();

        assert_eq!(args.log_level(), Some(LogLevel::Debug));
        assert_eq!(args.log_style, LogStyle::Json);
        assert!(matches!(args.command, Command::Sdl));
    }

    #[test]
    fn missing_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = Args::try_parse_from(["people-graph", "sdl"]).unwrap();

        // Tests run from the crate directory, which has no configuration file.
        assert_eq!(args.config().unwrap(), SchemaConfig::default());

        args.config = dir.path().join("people-graph.toml");
        let error = args.config().unwrap_err().to_string();

        assert!(error.starts_with("error loading config"), "{error}");
    }

    #[test]
    fn config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();

        file.write_all(
            indoc! {r#"
                introspection = false

                [operation_limits]
                depth = 3
            "#}
            .as_bytes(),
        )
        .unwrap();

        let path = file.path().to_str().unwrap();
        let args = Args::try_parse_from(["people-graph", "--config", path, "sdl"]).unwrap();
        let config = args.config().unwrap();

        assert!(!config.introspection);
        assert_eq!(config.operation_limits.depth, Some(3));
        assert_eq!(config.operation_limits.complexity, None);
    }

    #[test]
    fn invalid_config_names_the_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"introspection = \"yes\"").unwrap();

        let path = file.path().to_str().unwrap();
        let args = Args::try_parse_from(["people-graph", "--config", path, "sdl"]).unwrap();
        let error = args.config().unwrap_err().to_string();

        assert!(error.starts_with(&format!("error parsing config {path}")), "{error}");
    }

    #[test]
    fn request_from_file_with_variables() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"query Person($id: ID!) { person(id: $id) { name } }").unwrap();

        let args = ExecuteArgs {
            query: file.path().to_owned(),
            variables: Some(r#"{ "id": "2" }"#.to_owned()),
            operation_name: Some("Person".to_owned()),
        };

        let request = args.request().unwrap();

        assert_eq!(request.query, "query Person($id: ID!) { person(id: $id) { name } }");
        assert_eq!(request.operation_name.as_deref(), Some("Person"));
        assert_eq!(
            request.variables.into_value().into_json().unwrap(),
            serde_json::json!({ "id": "2" })
        );
    }

    #[test]
    fn variables_must_be_an_object() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ people { name } }").unwrap();

        let args = ExecuteArgs {
            query: file.path().to_owned(),
            variables: Some("[1, 2]".to_owned()),
            operation_name: None,
        };

        assert_eq!(
            args.request().unwrap_err().to_string(),
            "variables must be a JSON object"
        );
    }
}
