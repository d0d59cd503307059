use crate::fence::{is_fenced, strip_fences};
use crate::locales::{Locale, LocaleRegistry};
use crate::prompt::build_prompt;
use crate::service::CompletionService;
use crate::utils::log_msg;
use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Reads and parses the base-language document.
pub fn load_source(path: &Path) -> Result<Value> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read source file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("{} is not valid JSON", path.display()))
}

pub struct Translator<S> {
    service: S,
    registry: LocaleRegistry,
    source_language: String,
    output_dir: PathBuf,
}

impl<S: CompletionService> Translator<S> {
    pub fn new(
        service: S,
        registry: LocaleRegistry,
        source_language: impl Into<String>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            service,
            registry,
            source_language: source_language.into(),
            output_dir: output_dir.into(),
        }
    }

    /// Translates `source` into every registered locale, one blocking call at
    /// a time. Stops at the first error; files already written stay.
    pub fn run(&self, source: &Value) -> Result<Vec<PathBuf>> {
        self.registry.ensure_not_empty()?;

        let mut written = Vec::with_capacity(self.registry.len());
        for locale in self.registry.iter() {
            let path = self.translate_one(locale, source).inspect_err(|e| {
                log_msg("error", &format!("locale={} aborted: {e:#}", locale.code));
            })?;
            written.push(path);
        }

        println!("\n✅ All translations completed!");
        log_msg("info", &format!("Finished {} locales", written.len()));
        Ok(written)
    }

    fn translate_one(&self, locale: &Locale, source: &Value) -> Result<PathBuf> {
        println!("Translating to {}...", locale.name);

        let prompt = build_prompt(&self.source_language, &locale.name, source)?;
        let response = self
            .service
            .complete(&prompt)
            .with_context(|| format!("translation to {} failed", locale.code))?;

        let fenced = is_fenced(&response);
        let translated = strip_fences(&response);
        log_msg(
            "info",
            &format!(
                "locale={} response_bytes={} fence_stripped={fenced}",
                locale.code,
                response.len()
            ),
        );

        let path = self.output_dir.join(locale.file_name());
        fs::write(&path, &translated)
            .with_context(|| format!("failed to write {}", path.display()))?;
        log_msg("info", &format!("Wrote {}", path.display()));

        println!("✅ {} saved!", locale.code);
        Ok(path)
    }
}
