use anyhow::{Context, Result, bail};
use regex::Regex;
use std::sync::LazyLock;

static LOCALE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{2,3}(-[A-Za-z0-9]{2,8})*$").expect("valid regex"));

const DEFAULT_LOCALES: &[(&str, &str)] = &[
    ("en-US", "English (United States)"),
    ("es-ES", "Spanish (Spain)"),
    ("fr-FR", "French (France)"),
    ("de-DE", "German (Germany)"),
    ("it-IT", "Italian (Italy)"),
    ("ja-JP", "Japanese (Japan)"),
    ("zh-CN", "Chinese (Simplified, China)"),
    ("ko-KR", "Korean (South Korea)"),
    ("ru-RU", "Russian (Russia)"),
    ("ar-SA", "Arabic (Saudi Arabia)"),
    ("hi-IN", "Hindi (India)"),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Locale {
    /// Language tag, doubles as the output file stem.
    pub code: String,
    /// Display name used when phrasing the instruction.
    pub name: String,
}

impl Locale {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.json", self.code)
    }
}

/// Ordered list of target locales. Built once at startup and never mutated
/// while translating.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocaleRegistry {
    locales: Vec<Locale>,
}

impl Default for LocaleRegistry {
    fn default() -> Self {
        Self {
            locales: DEFAULT_LOCALES
                .iter()
                .map(|(code, name)| Locale::new(*code, *name))
                .collect(),
        }
    }
}

impl LocaleRegistry {
    /// Parses a `code=Name` override such as `pt-PT=Portuguese (Portugal)`.
    pub fn parse_entry(entry: &str) -> Result<Locale> {
        let (code, name) = entry
            .split_once('=')
            .with_context(|| format!("locale entry {entry:?} is not in code=Name form"))?;
        let (code, name) = (code.trim(), name.trim());

        if !LOCALE_CODE.is_match(code) {
            bail!("{code:?} is not a valid locale code");
        }
        if name.is_empty() {
            bail!("locale {code} has an empty display name");
        }
        Ok(Locale::new(code, name))
    }

    pub fn from_entries<S: AsRef<str>>(entries: &[S]) -> Result<Self> {
        let mut locales: Vec<Locale> = Vec::with_capacity(entries.len());
        for entry in entries {
            let locale = Self::parse_entry(entry.as_ref())?;
            if locales.iter().any(|l| l.code == locale.code) {
                bail!("locale {} is listed more than once", locale.code);
            }
            locales.push(locale);
        }
        Ok(Self { locales })
    }

    /// Keeps only the listed codes, in registry order.
    pub fn retain_codes<S: AsRef<str>>(&mut self, codes: &[S]) -> Result<()> {
        if codes.is_empty() {
            return Ok(());
        }
        for code in codes {
            let code = code.as_ref();
            if !self.locales.iter().any(|l| l.code == code) {
                bail!("unknown locale {code:?}");
            }
        }
        self.locales
            .retain(|l| codes.iter().any(|c| c.as_ref() == l.code));
        Ok(())
    }

    pub fn ensure_not_empty(&self) -> Result<()> {
        if self.is_empty() {
            bail!("no target locales configured");
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Locale> {
        self.locales.iter()
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}
