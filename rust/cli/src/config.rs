//! Layered table configuration: defaults, then a TOML file named by `HOLDEM_CONFIG`, then
//! `HOLDEM_*` environment variables, then command-line flags. Later layers win and every value
//! remembers where it came from.

use serde::{Deserialize, Serialize};
use std::fs;

use holdem_ai::equity::DEFAULT_SAMPLES;
use holdem_engine::game::TableConfig;
use holdem_engine::player::STARTING_STACK;
use holdem_engine::rules::{Blinds, MAX_PLAYERS, MIN_PLAYERS, table_chips_fit};

pub const ENV_CONFIG: &str = "HOLDEM_CONFIG";
pub const ENV_PLAYERS: &str = "HOLDEM_PLAYERS";
pub const ENV_SEED: &str = "HOLDEM_SEED";
pub const ENV_STACK: &str = "HOLDEM_STACK";
pub const ENV_EQUITY_SAMPLES: &str = "HOLDEM_EQUITY_SAMPLES";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Seats at the table, human included
    pub players: usize,
    pub starting_stack: u32,
    pub small_blind: u32,
    pub big_blind: u32,
    pub seed: Option<u64>,
    /// Monte Carlo run-outs per equity estimate
    pub equity_samples: u32,
}

impl Default for Config {
    fn default() -> Self {
        let blinds = Blinds::default();
        Self {
            players: 6,
            starting_stack: STARTING_STACK,
            small_blind: blinds.small,
            big_blind: blinds.big,
            seed: None,
            equity_samples: DEFAULT_SAMPLES,
        }
    }
}

impl Config {
    pub fn table_config(&self, human_seat: bool) -> TableConfig {
        TableConfig {
            players: self.players,
            starting_stack: self.starting_stack,
            blinds: Blinds {
                small: self.small_blind,
                big: self.big_blind,
            },
            seed: self.seed,
            human_seat,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
    Cli,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub players: ValueSource,
    pub starting_stack: ValueSource,
    pub small_blind: ValueSource,
    pub big_blind: ValueSource,
    pub seed: ValueSource,
    pub equity_samples: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            players: ValueSource::Default,
            starting_stack: ValueSource::Default,
            small_blind: ValueSource::Default,
            big_blind: ValueSource::Default,
            seed: ValueSource::Default,
            equity_samples: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

/// Values given on the command line. `None` leaves the lower layers in place.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub players: Option<usize>,
    pub starting_stack: Option<u32>,
    pub seed: Option<u64>,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Resolves file and environment layers from the process environment.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    resolve(|key| std::env::var(key).ok())
}

/// Resolves file and environment layers, looking variables up through `lookup`.
pub fn resolve<F>(lookup: F) -> Result<ConfigResolved, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Some(path) = lookup(ENV_CONFIG).filter(|p| !p.is_empty()) {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.players {
            cfg.players = v;
            sources.players = ValueSource::File;
        }
        if let Some(v) = f.starting_stack {
            cfg.starting_stack = v;
            sources.starting_stack = ValueSource::File;
        }
        if let Some(v) = f.small_blind {
            cfg.small_blind = v;
            sources.small_blind = ValueSource::File;
        }
        if let Some(v) = f.big_blind {
            cfg.big_blind = v;
            sources.big_blind = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.equity_samples {
            cfg.equity_samples = v;
            sources.equity_samples = ValueSource::File;
        }
    }

    if let Some(players) = lookup(ENV_PLAYERS)
        && !players.is_empty()
    {
        cfg.players = players
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {}", ENV_PLAYERS, players)))?;
        sources.players = ValueSource::Env;
    }
    if let Some(seed) = lookup(ENV_SEED)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {}", ENV_SEED, seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(stack) = lookup(ENV_STACK)
        && !stack.is_empty()
    {
        cfg.starting_stack = stack
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {}", ENV_STACK, stack)))?;
        sources.starting_stack = ValueSource::Env;
    }
    if let Some(samples) = lookup(ENV_EQUITY_SAMPLES)
        && !samples.is_empty()
    {
        cfg.equity_samples = samples.parse().map_err(|_| {
            ConfigError::Invalid(format!("Invalid {}: {}", ENV_EQUITY_SAMPLES, samples))
        })?;
        sources.equity_samples = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

impl ConfigResolved {
    /// Applies command-line values on top and re-validates.
    pub fn with_overrides(mut self, overrides: Overrides) -> Result<Self, ConfigError> {
        if let Some(v) = overrides.players {
            self.config.players = v;
            self.sources.players = ValueSource::Cli;
        }
        if let Some(v) = overrides.starting_stack {
            self.config.starting_stack = v;
            self.sources.starting_stack = ValueSource::Cli;
        }
        if let Some(v) = overrides.seed {
            self.config.seed = Some(v);
            self.sources.seed = ValueSource::Cli;
        }
        validate(&self.config)?;
        Ok(self)
    }
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    players: Option<usize>,
    #[serde(default)]
    starting_stack: Option<u32>,
    #[serde(default)]
    small_blind: Option<u32>,
    #[serde(default)]
    big_blind: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    equity_samples: Option<u32>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&cfg.players) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: players must be between {} and {} (got {})",
            MIN_PLAYERS, MAX_PLAYERS, cfg.players
        )));
    }
    if cfg.starting_stack == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: starting_stack must be >0".into(),
        ));
    }
    if !table_chips_fit(cfg.players, cfg.starting_stack) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: {} players x {} starting_stack exceeds {} chips",
            cfg.players,
            cfg.starting_stack,
            u32::MAX
        )));
    }
    if cfg.small_blind == 0 || cfg.big_blind < cfg.small_blind {
        return Err(ConfigError::Invalid(
            "Invalid configuration: blinds must satisfy 0 < small_blind <= big_blind".into(),
        ));
    }
    if cfg.equity_samples == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: equity_samples must be >=1".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let resolved = resolve(env(&[])).unwrap();
        assert_eq!(resolved.config, Config::default());
        assert_eq!(resolved.sources.players, ValueSource::Default);
        assert_eq!(resolved.sources.seed, ValueSource::Default);
    }

    #[test]
    fn env_overrides_file_and_cli_overrides_env() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "players = 4\nseed = 1\nbig_blind = 20").unwrap();
        let path = file.path().to_string_lossy().to_string();

        let resolved = resolve(env(&[(ENV_CONFIG, &path), (ENV_SEED, "2")])).unwrap();
        assert_eq!(resolved.config.players, 4);
        assert_eq!(resolved.sources.players, ValueSource::File);
        assert_eq!(resolved.config.big_blind, 20);
        assert_eq!(resolved.config.seed, Some(2));
        assert_eq!(resolved.sources.seed, ValueSource::Env);

        let resolved = resolved
            .with_overrides(Overrides {
                seed: Some(3),
                ..Overrides::default()
            })
            .unwrap();
        assert_eq!(resolved.config.seed, Some(3));
        assert_eq!(resolved.sources.seed, ValueSource::Cli);
        assert_eq!(resolved.sources.players, ValueSource::File);
    }

    #[test]
    fn player_count_outside_range_is_rejected() {
        for bad in ["1", "13"] {
            let err = resolve(env(&[(ENV_PLAYERS, bad)])).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)), "{bad}");
        }
        let resolved = resolve(env(&[])).unwrap();
        assert!(
            resolved
                .with_overrides(Overrides {
                    players: Some(0),
                    ..Overrides::default()
                })
                .is_err()
        );
    }

    #[test]
    fn table_total_beyond_u32_is_rejected() {
        let err = resolve(env(&[(ENV_PLAYERS, "2"), (ENV_STACK, "3000000000")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("starting_stack"));

        // fits for two seats, overflows once a third joins
        let resolved = resolve(env(&[(ENV_PLAYERS, "2"), (ENV_STACK, "2000000000")])).unwrap();
        assert!(
            resolved
                .with_overrides(Overrides {
                    players: Some(3),
                    ..Overrides::default()
                })
                .is_err()
        );
    }

    #[test]
    fn unparsable_env_values_are_errors() {
        assert!(resolve(env(&[(ENV_SEED, "abc")])).is_err());
        assert!(resolve(env(&[(ENV_STACK, "-5")])).is_err());
        assert!(resolve(env(&[(ENV_EQUITY_SAMPLES, "0")])).is_err());
    }

    #[test]
    fn missing_config_file_is_an_io_error() {
        let err = resolve(env(&[(ENV_CONFIG, "/nonexistent/holdem.toml")])).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn table_config_carries_blinds_and_human_seat() {
        let table = Config::default().table_config(true);
        assert!(table.human_seat);
        assert_eq!(table.blinds, Blinds::default());
        assert_eq!(table.players, 6);
    }
}
