//! Ordering mode and set selector enumerations.

use serde::{Deserialize, Serialize};

/// How a consumer walks partitioned rows.
///
/// The dataset only records the mode; iteration itself is done by the
/// consumer.
///
/// # Example
///
/// ```
/// use nn_data::Order;
///
/// let order = Order::default();
/// assert!(matches!(order, Order::Random));
/// assert_eq!(order.to_string(), "random");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Order {
    /// Present rows in a fresh random order each pass.
    #[default]
    Random,

    /// Present rows in the same order each pass.
    Sequential,
}

impl Order {
    /// Returns the mode name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Sequential => "sequential",
        }
    }
}

impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Selects one side of a train/test partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Set {
    /// Training rows.
    #[default]
    Train,

    /// Testing rows.
    Test,
}

impl Set {
    /// Both sets, training first.
    pub const ALL: [Self; 2] = [Self::Train, Self::Test];

    /// Returns the set name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Train => "train",
            Self::Test => "test",
        }
    }

    /// Returns the other side of the partition.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Train => Self::Test,
            Self::Test => Self::Train,
        }
    }
}

impl std::fmt::Display for Set {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_default() {
        assert!(matches!(Order::default(), Order::Random));
    }

    #[test]
    fn order_name() {
        assert_eq!(Order::Random.name(), "random");
        assert_eq!(Order::Sequential.name(), "sequential");
    }

    #[test]
    fn order_serialization() {
        let json = serde_json::to_string(&Order::Sequential);
        assert_eq!(json.as_deref().unwrap_or_default(), "\"sequential\"");

        let parsed: std::result::Result<Order, _> = serde_json::from_str("\"sequential\"");
        assert_eq!(parsed.unwrap_or_default(), Order::Sequential);
    }

    #[test]
    fn set_default_and_display() {
        assert_eq!(Set::default(), Set::Train);
        assert_eq!(format!("{}", Set::Test), "test");
    }

    #[test]
    fn set_other() {
        assert_eq!(Set::Train.other(), Set::Test);
        assert_eq!(Set::Test.other(), Set::Train);
        assert_eq!(Set::ALL, [Set::Train, Set::Test]);
    }
}
