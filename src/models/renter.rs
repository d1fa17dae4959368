use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_this_or_that::as_f64;

use super::error::ModelError;

const MIN_SEED_CASH: u32 = 100;
const MAX_SEED_CASH: u32 = 5000;

/// Raw renter fields. `age` may be a number or a numeric string but must be a
/// whole number; `cash` and `is_evicted` are present in stored documents and
/// optional in seed files.
#[derive(Debug, Deserialize)]
pub struct RenterInput {
    pub name: String,
    #[serde(deserialize_with = "as_f64")]
    pub age: f64,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub occupation: String,
    #[serde(default)]
    pub cash: Option<f64>,
    #[serde(default, alias = "isEvicted")]
    pub is_evicted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RenterInput")]
pub struct Renter {
    name: String,
    age: u32,
    gender: String,
    occupation: String,
    cash: f64,
    is_evicted: bool,
}

impl Renter {
    /// Creates a renter with a randomly seeded cash balance.
    pub fn new(name: &str, age: u32, gender: &str, occupation: &str) -> Result<Renter, ModelError> {
        if name.trim().is_empty() {
            return Err(ModelError::EmptyField("name"));
        }
        if age == 0 {
            return Err(ModelError::InvalidAge(age.to_string()));
        }

        Ok(Renter {
            name: name.trim().to_string(),
            age,
            gender: gender.trim().to_string(),
            occupation: occupation.trim().to_string(),
            cash: seed_cash(),
            is_evicted: false,
        })
    }

    pub fn parse(name: &str, age: &str, gender: &str, occupation: &str) -> Result<Renter, ModelError> {
        let age = age
            .trim()
            .parse::<u32>()
            .map_err(|_| ModelError::InvalidAge(age.to_string()))?;
        Renter::new(name, age, gender, occupation)
    }

    pub fn with_cash(mut self, cash: f64) -> Result<Renter, ModelError> {
        if !cash.is_finite() || cash < 0.0 {
            return Err(ModelError::InvalidCash(cash));
        }
        self.cash = cash;
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn gender(&self) -> &str {
        &self.gender
    }

    pub fn occupation(&self) -> &str {
        &self.occupation
    }

    pub fn cash(&self) -> f64 {
        self.cash
    }

    pub fn is_evicted(&self) -> bool {
        self.is_evicted
    }

    /// Flags the renter for removal on the next purge.
    pub fn evict(&mut self) {
        self.is_evicted = true;
    }

    /// Debits the full share or nothing. Returns whether the renter paid.
    pub(crate) fn charge(&mut self, share: f64) -> bool {
        if self.cash >= share {
            self.cash -= share;
            self.is_evicted = false;
            true
        } else {
            self.is_evicted = true;
            false
        }
    }
}

impl TryFrom<RenterInput> for Renter {
    type Error = ModelError;

    fn try_from(input: RenterInput) -> Result<Self, Self::Error> {
        let age = whole_age(input.age)?;
        let mut renter = Renter::new(&input.name, age, &input.gender, &input.occupation)?;
        if let Some(cash) = input.cash {
            renter = renter.with_cash(cash)?;
        }
        renter.is_evicted = input.is_evicted;
        Ok(renter)
    }
}

fn whole_age(age: f64) -> Result<u32, ModelError> {
    if age.is_finite() && age.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(&age) {
        Ok(age as u32)
    } else {
        Err(ModelError::InvalidAge(age.to_string()))
    }
}

fn seed_cash() -> f64 {
    rand::thread_rng().gen_range(MIN_SEED_CASH..=MAX_SEED_CASH) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn charge_is_all_or_nothing() {
        let mut renter = Renter::new("sue", 27, "f", "coder")
            .unwrap()
            .with_cash(500.0)
            .unwrap();

        assert!(!renter.charge(833.34));
        assert_eq!(renter.cash(), 500.0);
        assert!(renter.is_evicted());

        assert!(renter.charge(200.0));
        assert_eq!(renter.cash(), 300.0);
        assert!(!renter.is_evicted());
    }

    #[test]
    fn age_must_be_whole() {
        assert_eq!(whole_age(35.0), Ok(35));
        assert_eq!(whole_age(35.7), Err(ModelError::InvalidAge("35.7".to_string())));
        assert!(whole_age(-1.0).is_err());
        assert!(whole_age(f64::NAN).is_err());
    }

    #[test]
    fn seeded_cash_in_range() {
        for _ in 0..50 {
            let cash = seed_cash();
            assert!((MIN_SEED_CASH as f64..=MAX_SEED_CASH as f64).contains(&cash));
        }
    }
}
