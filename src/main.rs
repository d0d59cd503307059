mod fence;
mod locales;
mod prompt;
mod service;
mod translator;
mod utils;

use anyhow::Result;
use clap::Parser;
use locales::LocaleRegistry;
use service::{OpenAiClient, ServiceConfig};
use std::path::PathBuf;
use std::time::Duration;
use translator::{Translator, load_source};
use utils::{init_log, log_msg};

// --- CLI ---
#[derive(Parser, Debug)]
#[command(author, version, about = "Translate a base locale JSON file with a chat-completions model")]
struct Cli {
    /// Base-language JSON file.
    #[arg(long, default_value = "pt-BR.json")]
    source: PathBuf,

    /// Directory that receives `<locale>.json` files.
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Language name of the source file, as written in the instruction.
    #[arg(long, default_value = prompt::DEFAULT_SOURCE_LANGUAGE)]
    source_language: String,

    /// Chat model used for every locale.
    #[arg(long, env = "TRANSLATE_MODEL", default_value = service::DEFAULT_MODEL)]
    model: String,

    /// Sampling temperature; kept low so keys and structure survive.
    #[arg(long, default_value_t = service::DEFAULT_TEMPERATURE)]
    temperature: f32,

    /// Base URL of an OpenAI-compatible API.
    #[arg(long, env = "OPENAI_BASE_URL", default_value = service::DEFAULT_API_BASE)]
    api_base: String,

    /// API key sent as a bearer token.
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Per-request timeout in seconds. Whole-file translations are slow.
    #[arg(long, default_value_t = service::DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Target locale as `code=Name`; repeat to replace the built-in list.
    #[arg(long = "locale", value_name = "CODE=NAME")]
    locales: Vec<String>,

    /// Only translate these locale codes.
    #[arg(long, value_name = "CODE")]
    only: Vec<String>,

    /// logfmt diagnostics file, truncated on every run.
    #[arg(long, default_value = "locale-translator.log")]
    log_file: PathBuf,
}

impl Cli {
    fn registry(&self) -> Result<LocaleRegistry> {
        let mut registry = if self.locales.is_empty() {
            LocaleRegistry::default()
        } else {
            LocaleRegistry::from_entries(&self.locales)?
        };
        registry.retain_codes(&self.only)?;
        registry.ensure_not_empty()?;
        Ok(registry)
    }

    fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            api_base: self.api_base.clone(),
            api_key: self.api_key.clone(),
            model: self.model.clone(),
            temperature: self.temperature,
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_log(&cli.log_file);

    let registry = cli.registry()?;
    let source = load_source(&cli.source)?;
    let client = OpenAiClient::new(cli.service_config())?;

    log_msg(
        "info",
        &format!(
            "Run started source={} locales={} model={}",
            cli.source.display(),
            registry.len(),
            client.model()
        ),
    );

    let translator = Translator::new(client, registry, cli.source_language, cli.output_dir);
    translator.run(&source)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_builtin_locale() {
        let cli = Cli::try_parse_from(["locale-translator"]).unwrap();
        assert_eq!(cli.source, PathBuf::from("pt-BR.json"));
        assert_eq!(cli.registry().unwrap(), LocaleRegistry::default());
        assert_eq!(cli.service_config().model, cli.model);
        assert_eq!(
            cli.service_config().timeout,
            Duration::from_secs(service::DEFAULT_TIMEOUT_SECS)
        );
    }

    #[test]
    fn locale_overrides_and_filters_combine() {
        let cli = Cli::try_parse_from([
            "locale-translator",
            "--locale",
            "en-US=English",
            "--locale",
            "nl-NL=Dutch (Netherlands)",
            "--only",
            "nl-NL",
            "--timeout-secs",
            "5",
        ])
        .unwrap();

        let registry = cli.registry().unwrap();
        let codes: Vec<&str> = registry.iter().map(|l| l.code.as_str()).collect();
        assert_eq!(codes, vec!["nl-NL"]);
        assert_eq!(cli.service_config().timeout, Duration::from_secs(5));
    }

    #[test]
    fn every_option_has_help_text() {
        use clap::CommandFactory;

        let command = Cli::command();
        for arg in command.get_arguments() {
            if matches!(arg.get_id().as_str(), "help" | "version") {
                continue;
            }
            assert!(arg.get_help().is_some(), "--{} has no help", arg.get_id());
        }
    }

    #[test]
    fn unknown_only_code_is_an_error() {
        let cli = Cli::try_parse_from(["locale-translator", "--only", "xx-XX"]).unwrap();
        assert!(cli.registry().is_err());
    }
}
