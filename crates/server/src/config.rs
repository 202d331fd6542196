use std::env;

use golf_core::{ScoringError, TieSplit};

#[derive(Clone, Debug)]
pub struct Config {
    /// Postgres connection string. Without one the in-memory store is used.
    pub database_url: Option<String>,
    /// Shared secret required on every mutating request.
    pub api_key: String,
    pub tie_split: TieSplit,
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Read settings from the environment. An unrecognised
    /// `GRAND_PRIX_TIE_SPLIT` is an error rather than a silent default.
    pub fn from_env() -> Result<Self, ScoringError> {
        Ok(Self {
            database_url: env::var("DATABASE_URL").ok().filter(|v| !v.is_empty()),
            api_key: env::var("SOCIETY_API_KEY")
                .unwrap_or_else(|_| "dev-society-key-change-in-production".to_string()),
            tie_split: parse_tie_split(env::var("GRAND_PRIX_TIE_SPLIT").ok())?,
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
        })
    }
}

fn parse_tie_split(value: Option<String>) -> Result<TieSplit, ScoringError> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(TieSplit::default()),
        Some(v) => v.parse(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tie_split_defaults_to_sum() {
        assert_eq!(parse_tie_split(None).unwrap(), TieSplit::SlotSum);
        assert_eq!(parse_tie_split(Some(String::new())).unwrap(), TieSplit::SlotSum);
    }

    #[test]
    fn test_tie_split_legacy() {
        assert_eq!(parse_tie_split(Some("legacy".into())).unwrap(), TieSplit::Legacy);
    }

    #[test]
    fn test_misspelled_tie_split_rejected() {
        assert_eq!(
            parse_tie_split(Some("legcy".into())),
            Err(ScoringError::UnknownTieSplit("legcy".into()))
        );
    }
}
