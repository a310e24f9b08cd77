use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use workflow_tags::config::{Config, LOG_ENV};
use workflow_tags::registry::Registry;
use workflow_tags::{AnyTag, TagKind, TagResult};

const USAGE: &str = "\
usage: workflow-tags list
       workflow-tags check <Kind> <value>
       workflow-tags name <Kind> <NAME>

kinds: ConversationRole, TaskStatus, ProjectStatus";

fn main() -> ExitCode {
    let config = Config::from_env();

    // Initialize tracing
    let (filter, rejected_filter) = match EnvFilter::try_new(&config.log_filter) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new("info"), Some(e)),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Some(e) = rejected_filter {
        tracing::warn!(
            "Invalid {} filter {:?} ({}), using \"info\"",
            LOG_ENV,
            config.log_filter,
            e
        );
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    match args.as_slice() {
        ["list"] => match render_registry(&config) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                tracing::error!("Failed to render registry: {}", e);
                eprintln!("failed to render registry: {}", e);
                ExitCode::FAILURE
            }
        },
        ["check", kind, value] => report(resolve(kind, value, AnyTag::parse)),
        ["name", kind, name] => report(resolve(kind, name, AnyTag::parse_name)),
        _ => {
            eprintln!("{}", USAGE);
            ExitCode::from(2)
        }
    }
}

fn render_registry(config: &Config) -> serde_json::Result<String> {
    let registry = Registry::snapshot();
    if config.compact {
        serde_json::to_string(&registry)
    } else {
        serde_json::to_string_pretty(&registry)
    }
}

fn resolve(
    kind: &str,
    input: &str,
    lookup: fn(TagKind, &str) -> TagResult<AnyTag>,
) -> TagResult<AnyTag> {
    let kind: TagKind = kind.parse()?;
    lookup(kind, input)
}

fn report(result: TagResult<AnyTag>) -> ExitCode {
    match result {
        Ok(tag) => {
            tracing::debug!(kind = %tag.kind(), value = tag.as_str(), "resolved tag");
            println!("{}::{} = {:?}", tag.kind(), tag.name(), tag.as_str());
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
