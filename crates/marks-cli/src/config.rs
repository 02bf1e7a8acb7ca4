use anyhow::Context;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub(crate) const SUPPORTED_BROWSERS: &[&str] = &["chrome", "firefox"];
pub(crate) const SUPPORTED_COLORS: &[&str] = &[
    "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white",
];

pub(crate) const DEFAULT_CONTENT_DIR: &str = ".marks";
pub(crate) const DEFAULT_MARKS_FILE: &str = "bookmarks.yaml";
pub(crate) const DEFAULT_CONFIG_FILE: &str = "config.yaml";
pub(crate) const DEFAULT_OPEN_COMMAND: &str = "open";
pub(crate) const DEFAULT_CHROME_OPEN_ARGS: &str = r#"-a "Google Chrome" {{url}}"#;
pub(crate) const DEFAULT_FIREFOX_OPEN_ARGS: &str = "-a firefox {{url}}";

/// The config file as written; every key is optional.
///
/// The camelCase and lowercase aliases are the key names used by earlier
/// releases of `marks`, so their config files keep loading.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(alias = "contentpath", alias = "contentPath")]
    content_path: Option<String>,
    #[serde(alias = "yaml")]
    marks_file: Option<String>,
    #[serde(alias = "idColor", alias = "idcolor")]
    id_color: Option<String>,
    #[serde(alias = "urlColor", alias = "urlcolor")]
    url_color: Option<String>,
    #[serde(alias = "tagsColor", alias = "tagscolor")]
    tags_color: Option<String>,
    #[serde(alias = "browserColor", alias = "browsercolor")]
    browser_color: Option<String>,
    browser: Option<String>,
    #[serde(alias = "openCommand", alias = "opencommand")]
    open_command: Option<String>,
    #[serde(alias = "chromeOpenArgs", alias = "chromeopenargs")]
    chrome_open_args: Option<String>,
    #[serde(
        alias = "firefoxOpenargs",
        alias = "firefoxOpenArgs",
        alias = "firefoxopenargs"
    )]
    firefox_open_args: Option<String>,
}

/// Color names for each rendered field, already validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Palette {
    pub(crate) id: String,
    pub(crate) url: String,
    pub(crate) tags: String,
    pub(crate) browser: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            id: "green".to_string(),
            url: "blue".to_string(),
            tags: "yellow".to_string(),
            browser: "red".to_string(),
        }
    }
}

/// Resolved, validated settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Config {
    pub(crate) marks_path: PathBuf,
    pub(crate) file_mode: u32,
    pub(crate) palette: Palette,
    pub(crate) browser: String,
    pub(crate) open_command: String,
    /// Argument template per supported browser.
    pub(crate) open_args: BTreeMap<String, String>,
}

type Rule = fn(&Config) -> Result<(), String>;

const RULES: &[Rule] = &[browser_is_supported, colors_are_supported];

fn browser_is_supported(config: &Config) -> Result<(), String> {
    check_browser(&config.browser)
}

fn colors_are_supported(config: &Config) -> Result<(), String> {
    let p = &config.palette;
    for color in [&p.id, &p.url, &p.tags, &p.browser] {
        if !SUPPORTED_COLORS.contains(&color.as_str()) {
            return Err(format!("{color} is not a supported color"));
        }
    }
    Ok(())
}

fn check_browser(browser: &str) -> Result<(), String> {
    if SUPPORTED_BROWSERS.contains(&browser) {
        Ok(())
    } else {
        Err(format!("{browser} is not a supported browser"))
    }
}

/// Lowercase and check a browser named on the command line.
pub(crate) fn validate_browser(browser: &str) -> anyhow::Result<String> {
    let browser = browser.to_lowercase();
    check_browser(&browser).map_err(anyhow::Error::msg)?;
    Ok(browser)
}

pub(crate) fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(DEFAULT_CONTENT_DIR).join(DEFAULT_CONFIG_FILE))
}

impl Config {
    /// Load from `explicit` or the default location, then apply `file_override`.
    ///
    /// A missing default file means all defaults; a missing explicit file is an error.
    pub(crate) fn load(explicit: Option<&Path>, file_override: Option<&Path>) -> anyhow::Result<Self> {
        let raw = match explicit {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("read config {}", path.display()))?;
                parse(&text).with_context(|| format!("parse config {}", path.display()))?
            }
            None => match default_config_path() {
                Some(path) => match std::fs::read_to_string(&path) {
                    Ok(text) => {
                        parse(&text).with_context(|| format!("parse config {}", path.display()))?
                    }
                    Err(e) if e.kind() == std::io::ErrorKind::NotFound => ConfigFile::default(),
                    Err(e) => {
                        return Err(e).with_context(|| format!("read config {}", path.display()))
                    }
                },
                None => ConfigFile::default(),
            },
        };

        let mut config = Self::from_file(raw, dirs::home_dir().as_deref());
        if let Some(path) = file_override {
            config.marks_path = path.to_path_buf();
        }
        config.validate()?;
        tracing::debug!(path = %config.marks_path.display(), browser = %config.browser, "loaded config");
        Ok(config)
    }

    fn from_file(raw: ConfigFile, home: Option<&Path>) -> Self {
        let defaults = Palette::default();
        let lower = |v: Option<String>, d: String| v.map(|s| s.to_lowercase()).unwrap_or(d);

        let content = raw
            .content_path
            .map(|p| expand_home(&p, home))
            .unwrap_or_else(|| home.unwrap_or(Path::new(".")).join(DEFAULT_CONTENT_DIR));
        let marks_file = raw
            .marks_file
            .unwrap_or_else(|| DEFAULT_MARKS_FILE.to_string());

        let mut open_args = BTreeMap::new();
        open_args.insert(
            "chrome".to_string(),
            raw.chrome_open_args
                .unwrap_or_else(|| DEFAULT_CHROME_OPEN_ARGS.to_string()),
        );
        open_args.insert(
            "firefox".to_string(),
            raw.firefox_open_args
                .unwrap_or_else(|| DEFAULT_FIREFOX_OPEN_ARGS.to_string()),
        );

        Self {
            marks_path: content.join(marks_file),
            file_mode: marks_format::DEFAULT_FILE_MODE,
            palette: Palette {
                id: lower(raw.id_color, defaults.id),
                url: lower(raw.url_color, defaults.url),
                tags: lower(raw.tags_color, defaults.tags),
                browser: lower(raw.browser_color, defaults.browser),
            },
            browser: lower(raw.browser, "chrome".to_string()),
            open_command: raw
                .open_command
                .unwrap_or_else(|| DEFAULT_OPEN_COMMAND.to_string()),
            open_args,
        }
    }

    /// Apply every rule in order; the first failure aborts.
    pub(crate) fn validate(&self) -> anyhow::Result<()> {
        for rule in RULES {
            rule(self).map_err(anyhow::Error::msg)?;
        }
        Ok(())
    }
}

fn parse(text: &str) -> anyhow::Result<ConfigFile> {
    if text.trim().is_empty() {
        return Ok(ConfigFile::default());
    }
    let raw: Option<ConfigFile> = serde_yaml::from_str(text)?;
    Ok(raw.unwrap_or_default())
}

fn expand_home(path: &str, home: Option<&Path>) -> PathBuf {
    match (path.strip_prefix("~/"), home) {
        (Some(rest), Some(home)) => home.join(rest),
        _ if path == "~" => home.map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from(path)),
        _ => PathBuf::from(path),
    }
}
