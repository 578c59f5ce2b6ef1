use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Number of smallest units in one token.
pub const UNITS_PER_TOKEN: i64 = 10_000_000_000;

/// Token amount expressed in the smallest indivisible unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Coin(pub i64);

impl Coin {
	pub fn from_tokens(tokens: f64) -> Self {
		Coin((tokens * UNITS_PER_TOKEN as f64).round() as i64)
	}

	pub fn to_tokens(&self) -> f64 {
		self.0 as f64 / UNITS_PER_TOKEN as f64
	}
}

impl Display for Coin {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}
