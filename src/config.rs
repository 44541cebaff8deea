use axum::http::HeaderValue;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_UPSTREAM_BASE: &str = "https://api.minimaxi.com";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 60;

const DEFAULT_FONT_CANDIDATES: [&str; 4] = [
    "/usr/share/fonts/truetype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-zenhei.ttc",
    "/usr/share/fonts/truetype/droid/DroidSansFallbackFull.ttf",
];

/// Loads `.env` if present. Safe to call more than once.
pub fn load_dotenv() {
    dotenv::dotenv().ok();
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub upstream_base: String,
    pub static_dir: PathBuf,
    pub upstream_timeout: Duration,
    /// Empty means `Access-Control-Allow-Origin: *`
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            upstream_base: DEFAULT_UPSTREAM_BASE.to_string(),
            static_dir: PathBuf::from("."),
            upstream_timeout: Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
            allowed_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let timeout_secs = match env::var("UPSTREAM_TIMEOUT_SECS") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                log::warn!("Ignoring invalid UPSTREAM_TIMEOUT_SECS={}", raw);
                DEFAULT_UPSTREAM_TIMEOUT_SECS
            }),
            Err(_) => DEFAULT_UPSTREAM_TIMEOUT_SECS,
        };

        Self {
            bind_addr: var_or("BIND_ADDR", DEFAULT_BIND_ADDR),
            upstream_base: var_or("UPSTREAM_BASE", DEFAULT_UPSTREAM_BASE),
            static_dir: PathBuf::from(var_or("STATIC_DIR", ".")),
            upstream_timeout: Duration::from_secs(timeout_secs),
            allowed_origins: parse_origins(&var_or("ALLOWED_ORIGINS", "")),
        }
    }
}

/// Entries that cannot be sent as a header value are dropped with a warning.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.trim_end_matches('/'))
        .filter(|s| {
            let valid = HeaderValue::from_str(s).is_ok();
            if !valid {
                log::warn!("Ignoring invalid origin in ALLOWED_ORIGINS: {:?}", s);
            }
            valid
        })
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone)]
pub struct ExtractConfig {
    pub source_dir: PathBuf,
    pub file_prefix: String,
    pub output: PathBuf,
}

impl ExtractConfig {
    pub fn from_env() -> Self {
        Self {
            source_dir: PathBuf::from(var_or("VOCAB_SOURCE_DIR", "outputs")),
            file_prefix: var_or("VOCAB_FILE_PREFIX", "economist-"),
            output: PathBuf::from(var_or("VOCAB_PATH", "vocab.json")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct IconConfig {
    pub out_dir: PathBuf,
    pub font_candidates: Vec<PathBuf>,
}

impl IconConfig {
    pub fn from_env() -> Self {
        // An explicit ICON_FONT is tried before the system fonts
        let mut font_candidates: Vec<PathBuf> = env::var("ICON_FONT")
            .ok()
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .into_iter()
            .collect();
        font_candidates.extend(DEFAULT_FONT_CANDIDATES.iter().map(PathBuf::from));

        Self {
            out_dir: PathBuf::from(var_or("ICON_OUT_DIR", ".")),
            font_candidates,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CipherConfig {
    pub key_hex: Option<String>,
    pub input: PathBuf,
    pub output: PathBuf,
}

impl CipherConfig {
    pub fn from_env() -> Self {
        Self {
            key_hex: env::var("VOCAB_KEY").ok().filter(|k| !k.trim().is_empty()),
            input: PathBuf::from(var_or("VOCAB_PATH", "vocab.json")),
            output: PathBuf::from(var_or("VOCAB_ENC_PATH", "vocab.enc")),
        }
    }
}
