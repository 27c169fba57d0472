use anyhow::{Context, Result};
use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use smartbudget_core::{parse_timezone, today_in};
use smartbudget_ingest::SampleOptions;
use std::fs;
use std::path::PathBuf;

use crate::state::ensure_smartbudget_home;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub general: GeneralSection,
    pub sample: SampleSection,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneralSection {
    /// IANA timezone used to decide what "today" is
    pub timezone: String,
    pub currency_symbol: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SampleSection {
    /// Fixed seed for reproducible demo data (random when unset)
    pub seed: Option<u64>,
    pub transactions: usize,
}

impl Default for GeneralSection {
    fn default() -> Self {
        Self {
            timezone: "America/Sao_Paulo".to_string(),
            currency_symbol: "R$".to_string(),
        }
    }
}

impl Default for SampleSection {
    fn default() -> Self {
        let opts = SampleOptions::default();
        Self {
            seed: opts.seed,
            transactions: opts.expenses,
        }
    }
}

impl Config {
    pub fn timezone(&self) -> Result<Tz> {
        parse_timezone(&self.general.timezone).context("config.toml [general].timezone")
    }

    /// Reference date: explicit override, else today in the configured timezone
    pub fn resolve_today(&self, today: Option<NaiveDate>) -> Result<NaiveDate> {
        match today {
            Some(d) => Ok(d),
            None => Ok(today_in(self.timezone()?)),
        }
    }

    pub fn sample_options(&self) -> SampleOptions {
        SampleOptions {
            seed: self.sample.seed,
            expenses: self.sample.transactions,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_smartbudget_home()?.join("config.toml"))
}

pub fn parse_config(s: &str) -> Result<Config> {
    toml::from_str(s).context("parse config.toml")
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    parse_config(&s)
}

pub fn save_config(cfg: &Config) -> Result<()> {
    let p = config_path()?;
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(&Config::default())?;
    println!("Wrote {}", p.display());
    Ok(())
}

pub fn show_config() -> Result<()> {
    let cfg = load_config()?;
    println!("# {}", config_path()?.display());
    print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let cfg = parse_config("[sample]\nseed = 9\n").unwrap();
        assert_eq!(cfg.sample.seed, Some(9));
        assert_eq!(cfg.sample.transactions, 300);
        assert_eq!(cfg.general.timezone, "America/Sao_Paulo");
        assert_eq!(cfg.general.currency_symbol, "R$");
    }

    #[test]
    fn test_round_trip_default() {
        let s = toml::to_string_pretty(&Config::default()).unwrap();
        assert_eq!(parse_config(&s).unwrap(), Config::default());
    }

    #[test]
    fn test_resolve_today() {
        let cfg = Config::default();
        let fixed = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
        assert_eq!(cfg.resolve_today(Some(fixed)).unwrap(), fixed);

        let mut bad = Config::default();
        bad.general.timezone = "Nowhere/Special".to_string();
        assert!(bad.resolve_today(None).is_err());
    }
}
