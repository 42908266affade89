use std::collections::BTreeMap;
use std::path::Path;
use std::path::PathBuf;

use derive_more::Deref;
use derive_more::DerefMut;
use serde::Deserialize;
use tracing::debug;

use crate::HashParamError;
use crate::HashParamResult;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] = [
	"hashparam.toml",
	".hashparam.toml",
	".config/hashparam.toml",
];

/// Parameter values keyed by name.
///
/// Ordered so that listings and diagnostics are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Deref, DerefMut)]
#[serde(transparent)]
pub struct Params(
	#[deref]
	#[deref_mut]
	BTreeMap<String, String>,
);

impl Params {
	pub fn new() -> Self {
		Self::default()
	}

	/// Apply a `NAME=VALUE` override, replacing any existing value. The value
	/// may itself contain `=`.
	pub fn apply_override(&mut self, raw: &str) -> HashParamResult<()> {
		let Some((name, value)) = raw.split_once('=') else {
			return Err(HashParamError::InvalidParamOverride(raw.to_string()));
		};

		let name = name.trim();
		if name.is_empty() {
			return Err(HashParamError::InvalidParamOverride(raw.to_string()));
		}

		self.0.insert(name.to_string(), value.to_string());
		Ok(())
	}

	/// The entries of `names` that have no value, in their original order.
	pub fn missing<'n>(&self, names: &'n [String]) -> Vec<&'n String> {
		names.iter().filter(|name| !self.0.contains_key(*name)).collect()
	}
}

impl<K, V> FromIterator<(K, V)> for Params
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self(
			iter.into_iter()
				.map(|(name, value)| (name.into(), value.into()))
				.collect(),
		)
	}
}

/// Configuration loaded from a `hashparam.toml` file.
///
/// ```toml
/// [params]
/// env = "production"
/// region = "eu-west-1"
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct HashParamConfig {
	/// Parameter values available to `#{name}` references.
	#[serde(default)]
	pub params: Params,
}

impl HashParamConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if no config file exists.
	pub fn load(root: &Path) -> HashParamResult<Option<HashParamConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			debug!(root = %root.display(), "no config file found");
			return Ok(None);
		};

		debug!(path = %config_path.display(), "loading config");
		let content = std::fs::read_to_string(&config_path)?;
		let config = Self::parse(&content)?;

		Ok(Some(config))
	}

	/// Parse config file contents.
	pub fn parse(content: &str) -> HashParamResult<HashParamConfig> {
		toml::from_str(content).map_err(|e| HashParamError::ConfigParse(e.to_string()))
	}
}
