//! Store, config and logging setup shared by every command.

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use formsmith_schema::id::{FieldId, SectionId, TemplateId};
use formsmith_storage::FileStorage;
use formsmith_store::{StoreConfig, TemplateStore};

pub type Store = TemplateStore<FileStorage>;

/// Looked up inside the data directory when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = "formsmith.toml";

/// `--data-dir`, or `formsmith` under the platform data directory.
pub fn data_dir(explicit: Option<&Path>) -> anyhow::Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }
    dirs::data_dir()
        .map(|dir| dir.join("formsmith"))
        .context("no platform data directory; pass --data-dir")
}

/// An explicit config file must exist. Otherwise the data directory's
/// `formsmith.toml` is used when present.
fn config_file(explicit: Option<&Path>, data_dir: &Path) -> anyhow::Result<Option<PathBuf>> {
    match explicit {
        Some(path) if path.is_file() => Ok(Some(path.to_path_buf())),
        Some(path) => bail!("config file not found: {}", path.display()),
        None => {
            let candidate = data_dir.join(CONFIG_FILE_NAME);
            Ok(candidate.is_file().then_some(candidate))
        }
    }
}

pub fn open_store(data_dir_arg: Option<&Path>, config_arg: Option<&Path>) -> anyhow::Result<Store> {
    let dir = data_dir(data_dir_arg)?;
    let config_path = config_file(config_arg, &dir)?;
    let config = StoreConfig::load(config_path.as_deref())?;
    let storage = FileStorage::open(dir.clone())?;
    tracing::debug!(dir = %dir.display(), max_templates = config.max_templates, "opening store");
    TemplateStore::open(storage, config)
        .with_context(|| format!("failed to open store in {}", dir.display()))
}

/// Log level from the `-v` count. Without `-v` the environment decides,
/// falling back to warnings only.
pub fn log_config(verbose: u8) -> formsmith_log::Config {
    let env_set = std::env::var_os(formsmith_log::ENV_LEVEL).is_some()
        || std::env::var_os("RUST_LOG").is_some();
    let config = formsmith_log::Config::from_env();
    match verbose {
        0 if env_set => config,
        0 => config.with_level("warn"),
        1 => config.with_level("info"),
        2 => config.with_level("debug"),
        _ => config.with_level("trace"),
    }
}

pub fn template_id(s: &str) -> Result<TemplateId, String> {
    TemplateId::parse(s).map_err(|e| format!("invalid template id: {e}"))
}

pub fn section_id(s: &str) -> Result<SectionId, String> {
    SectionId::parse(s).map_err(|e| format!("invalid section id: {e}"))
}

pub fn field_id(s: &str) -> Result<FieldId, String> {
    FieldId::parse(s).map_err(|e| format!("invalid field id: {e}"))
}
