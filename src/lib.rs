pub mod walkthrough;

use std::str::FromStr;

use collections::{HashFunction, ModeError, hash_function_1, hash_function_2};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemoError {
    /// First positional argument was not a known scenario
    #[error("Unknown scenario: {0}, expected one of: open, chained, mode, all")]
    UnknownScenario(String),

    /// Second positional argument was not `1` or `2`
    #[error("Unknown hash function: {0}, expected 1 or 2")]
    UnknownHashFunction(String),

    #[error("Too many arguments, usage: demo [scenario] [hash]")]
    TooManyArguments,

    /// Derived mode finder error
    #[error("Mode finder failed: {0}")]
    Mode(#[from] ModeError),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Scenario {
    OpenAddressing,
    Chained,
    Mode,
    All,
}

impl FromStr for Scenario {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(Scenario::OpenAddressing),
            "chained" => Ok(Scenario::Chained),
            "mode" => Ok(Scenario::Mode),
            "all" => Ok(Scenario::All),
            other => Err(DemoError::UnknownScenario(other.into())),
        }
    }
}

/// What the demo binary should run, read from its positional arguments
#[derive(Debug)]
pub struct Config {
    pub scenario: Scenario,
    pub hash_function: HashFunction,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scenario: Scenario::All,
            hash_function: hash_function_1,
        }
    }
}

impl Config {
    /// Parses `[scenario] [hash]`, both optional
    pub fn from_args<I: IntoIterator<Item = String>>(args: I) -> Result<Self, DemoError> {
        let mut args = args.into_iter();
        let mut config = Config::default();

        if let Some(scenario) = args.next() {
            config.scenario = scenario.parse()?;
        }
        if let Some(hash) = args.next() {
            config.hash_function = match hash.as_str() {
                "1" => hash_function_1,
                "2" => hash_function_2,
                other => return Err(DemoError::UnknownHashFunction(other.into())),
            };
        }
        if args.next().is_some() {
            return Err(DemoError::TooManyArguments);
        }

        Ok(config)
    }

    /// Runs the selected walkthroughs and collects their output lines
    pub fn run(&self) -> Result<Vec<String>, DemoError> {
        use walkthrough::*;

        let mut out = Vec::new();
        if matches!(self.scenario, Scenario::OpenAddressing | Scenario::All) {
            out.push("== open addressing".to_string());
            out.extend(map_walkthrough(|capacity| {
                collections::OpenAddressingMap::new(capacity, self.hash_function)
            }));
            out.extend(open_addressing_iteration(self.hash_function));
        }
        if matches!(self.scenario, Scenario::Chained | Scenario::All) {
            out.push("== separate chaining".to_string());
            out.extend(map_walkthrough(|capacity| {
                collections::ChainedMap::new(capacity, self.hash_function)
            }));
        }
        if matches!(self.scenario, Scenario::Mode | Scenario::All) {
            out.push("== find_mode".to_string());
            out.extend(mode_walkthrough()?);
        }
        Ok(out)
    }
}
