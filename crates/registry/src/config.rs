//! Capacity policy and registry configuration.

use reclaim_core::{Error, DEFAULT_INITIAL_CAPACITY};
use std::fmt;
use std::str::FromStr;

/// How a registry reacts when every slot is occupied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityPolicy {
    /// Exactly `n` slots, an add into a full registry fails
    Fixed(usize),
    /// Starts at `initial` slots and doubles when full
    Growable { initial: usize },
}

impl CapacityPolicy {
    /// Growable policy with the default initial capacity
    pub fn growable() -> Self {
        CapacityPolicy::Growable {
            initial: DEFAULT_INITIAL_CAPACITY,
        }
    }

    pub fn initial_capacity(&self) -> usize {
        match *self {
            CapacityPolicy::Fixed(capacity) => capacity,
            CapacityPolicy::Growable { initial } => initial,
        }
    }

    pub fn is_growable(&self) -> bool {
        matches!(self, CapacityPolicy::Growable { .. })
    }

    /// Reject policies that can never hold an entry
    pub fn validate(&self) -> Result<(), Error> {
        match *self {
            CapacityPolicy::Growable { initial: 0 } => Err(Error::invalid_capacity(
                0,
                "a growable registry cannot double an empty backing store",
            )),
            _ => Ok(()),
        }
    }
}

impl Default for CapacityPolicy {
    fn default() -> Self {
        Self::growable()
    }
}

impl fmt::Display for CapacityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CapacityPolicy::Fixed(capacity) => write!(f, "fixed:{capacity}"),
            CapacityPolicy::Growable { initial } => write!(f, "growable:{initial}"),
        }
    }
}

/// Parses `fixed:<n>`, `growable:<n>` or a bare `growable`
impl FromStr for CapacityPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, size) = match s.split_once(':') {
            Some((kind, size)) => (kind.trim(), Some(size.trim())),
            None => (s.trim(), None),
        };

        let parse_size = |size: &str| {
            size.parse::<usize>().map_err(|e| {
                Error::configuration(format!("invalid capacity '{size}' in policy '{s}': {e}"))
            })
        };

        let policy = match (kind, size) {
            ("fixed", Some(size)) => CapacityPolicy::Fixed(parse_size(size)?),
            ("fixed", None) => {
                return Err(Error::configuration(
                    "a fixed policy needs a capacity, e.g. 'fixed:8'",
                ))
            }
            ("growable", Some(size)) => CapacityPolicy::Growable {
                initial: parse_size(size)?,
            },
            ("growable", None) => CapacityPolicy::growable(),
            _ => {
                return Err(Error::configuration(format!(
                    "unknown capacity policy '{s}', expected 'fixed:<n>' or 'growable[:<n>]'"
                )))
            }
        };

        policy.validate()?;
        Ok(policy)
    }
}

/// Configuration for constructing a registry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Capacity policy of the registry
    pub policy: CapacityPolicy,
}

impl RegistryConfig {
    /// Create a config for a fixed-capacity registry
    pub fn fixed(capacity: usize) -> Self {
        Self {
            policy: CapacityPolicy::Fixed(capacity),
        }
    }

    /// Create a config for a growable registry
    pub fn growable(initial: usize) -> Self {
        Self {
            policy: CapacityPolicy::Growable { initial },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_is_growable_from_four() {
        let config = RegistryConfig::default();
        assert_eq!(config.policy, CapacityPolicy::Growable { initial: 4 });
        assert!(config.policy.is_growable());
    }

    #[test]
    fn parse_policies() {
        assert_eq!(
            "fixed:6".parse::<CapacityPolicy>().unwrap(),
            CapacityPolicy::Fixed(6)
        );
        assert_eq!(
            "growable:16".parse::<CapacityPolicy>().unwrap(),
            CapacityPolicy::Growable { initial: 16 }
        );
        assert_eq!(
            "growable".parse::<CapacityPolicy>().unwrap(),
            CapacityPolicy::growable()
        );
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!("fixed".parse::<CapacityPolicy>().is_err());
        assert!("fixed:many".parse::<CapacityPolicy>().is_err());
        assert!("growable:0".parse::<CapacityPolicy>().is_err());
        assert!("stack:3".parse::<CapacityPolicy>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        let policy = CapacityPolicy::Fixed(2);
        assert_eq!(
            policy.to_string().parse::<CapacityPolicy>().unwrap(),
            policy
        );
    }

    #[test]
    fn fixed_zero_is_allowed() {
        assert!(CapacityPolicy::Fixed(0).validate().is_ok());
    }
}
