use thiserror::Error;
use tracing::debug;

use crate::config::NamesConfig;

use super::random::{RandomSource, ThreadRngSource};

const HONORIFICS: &[&str] = &["Sir", "Lady", "Captain", "Professor", "Duchess", "Baron"];
const NAMES: &[&str] = &["Whiskers", "Mittens", "Pounce", "Biscuit", "Marmalade", "Shadow"];
const SUFFIXES: &[&str] = &[
    "the Bold",
    "of Purrington",
    "the Fluffy",
    "the Curious",
    "McNap",
    "the Third",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("Word pool '{pool}' is empty")]
    EmptyPool { pool: &'static str },
}

/// The three word pools a name is drawn from. Each is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPools {
    honorifics: Vec<String>,
    names: Vec<String>,
    suffixes: Vec<String>,
}

impl WordPools {
    pub fn new(
        honorifics: Vec<String>,
        names: Vec<String>,
        suffixes: Vec<String>,
    ) -> Result<Self, NameError> {
        for (pool, words) in [
            ("honorifics", &honorifics),
            ("names", &names),
            ("suffixes", &suffixes),
        ] {
            if words.is_empty() {
                return Err(NameError::EmptyPool { pool });
            }
        }
        Ok(Self {
            honorifics,
            names,
            suffixes,
        })
    }

    /// Built-in pools with any configured overrides applied.
    pub fn from_config(config: &NamesConfig) -> Result<Self, NameError> {
        let defaults = Self::default();
        Self::new(
            config.honorifics.clone().unwrap_or(defaults.honorifics),
            config.names.clone().unwrap_or(defaults.names),
            config.suffixes.clone().unwrap_or(defaults.suffixes),
        )
    }
}

impl Default for WordPools {
    fn default() -> Self {
        let owned = |words: &[&str]| words.iter().map(|w| w.to_string()).collect();
        Self {
            honorifics: owned(HONORIFICS),
            names: owned(NAMES),
            suffixes: owned(SUFFIXES),
        }
    }
}

/// Most recently generated name. Overwritten on every generation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GeneratedName {
    pub value: Option<String>,
}

pub struct NameComposer<R = ThreadRngSource> {
    pools: WordPools,
    rng: R,
    generated: GeneratedName,
}

impl NameComposer<ThreadRngSource> {
    pub fn new(pools: WordPools) -> Self {
        Self::with_rng(pools, ThreadRngSource)
    }
}

impl<R: RandomSource> NameComposer<R> {
    pub fn with_rng(pools: WordPools, rng: R) -> Self {
        Self {
            pools,
            rng,
            generated: GeneratedName::default(),
        }
    }

    /// Draw "honorific name suffix". Does not touch the stored name.
    pub fn compose(&mut self) -> String {
        let honorific = pick(&mut self.rng, &self.pools.honorifics);
        let name = pick(&mut self.rng, &self.pools.names);
        let suffix = pick(&mut self.rng, &self.pools.suffixes);
        format!("{} {} {}", honorific, name, suffix)
    }

    /// Compose a name and store it as the current one.
    pub fn generate(&mut self) -> &str {
        let name = self.compose();
        debug!(name = %name, "generated display name");
        self.generated.value.insert(name).as_str()
    }

    pub fn generated(&self) -> &GeneratedName {
        &self.generated
    }
}

fn pick<'a, R: RandomSource>(rng: &mut R, pool: &'a [String]) -> &'a str {
    // Pools are non-empty by construction; the modulo guards a sloppy source.
    &pool[rng.pick(pool.len()) % pool.len()]
}
