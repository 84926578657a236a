//! Either distribution family behind one interface

use crate::algorithm::mode::UnimodalPmf;
use crate::io::error::Result;
use crate::math::binomial::Binomial;
use crate::math::poisson_binomial::PoissonBinomial;
use crate::math::validation::checked_probability;

/// A Binomial or Poisson Binomial distribution
#[derive(Debug, Clone, PartialEq)]
pub enum Distribution {
    /// Trials sharing one success probability
    Binomial(Binomial),
    /// Trials with individual success probabilities
    PoissonBinomial(PoissonBinomial),
}

impl Distribution {
    /// Probability of at most `k` successes
    ///
    /// # Errors
    ///
    /// Propagates computation failures of the underlying family
    pub fn cdf(&self, k: usize) -> Result<f64> {
        match self {
            Self::Binomial(binomial) => binomial.cdf(k),
            Self::PoissonBinomial(poisson) => poisson.cdf(k),
        }
    }

    /// Expected number of successes
    pub fn mean(&self) -> f64 {
        match self {
            Self::Binomial(binomial) => binomial.mean(),
            Self::PoissonBinomial(poisson) => poisson.mean(),
        }
    }

    /// Variance of the number of successes
    pub fn variance(&self) -> f64 {
        match self {
            Self::Binomial(binomial) => binomial.variance(),
            Self::PoissonBinomial(poisson) => poisson.variance(),
        }
    }

    /// Per-trial success probabilities
    pub fn probabilities(&self) -> Vec<f64> {
        match self {
            Self::Binomial(binomial) => binomial.probabilities(),
            Self::PoissonBinomial(poisson) => poisson.probabilities().to_vec(),
        }
    }

    /// `(pmf, cdf)` for every outcome count `0..=n`
    ///
    /// # Errors
    ///
    /// Returns a computation error if any entry is not a probability
    pub fn table(&self) -> Result<Vec<(f64, f64)>> {
        let masses = match self {
            Self::Binomial(binomial) => (0..=binomial.trials())
                .map(|k| binomial.pmf(k))
                .collect::<Result<Vec<_>>>()?,
            Self::PoissonBinomial(poisson) => poisson.pmf_table()?,
        };

        let mut cumulative = 0.0;
        masses
            .into_iter()
            .map(|mass| -> Result<(f64, f64)> {
                cumulative += mass;
                Ok((mass, checked_probability("Distribution::table", cumulative)?))
            })
            .collect()
    }
}

impl UnimodalPmf for Distribution {
    fn trials(&self) -> usize {
        match self {
            Self::Binomial(binomial) => binomial.trials(),
            Self::PoissonBinomial(poisson) => poisson.trials(),
        }
    }

    fn pmf(&self, k: usize) -> Result<f64> {
        match self {
            Self::Binomial(binomial) => binomial.pmf(k),
            Self::PoissonBinomial(poisson) => poisson.pmf(k),
        }
    }
}

impl From<Binomial> for Distribution {
    fn from(binomial: Binomial) -> Self {
        Self::Binomial(binomial)
    }
}

impl From<PoissonBinomial> for Distribution {
    fn from(poisson: PoissonBinomial) -> Self {
        Self::PoissonBinomial(poisson)
    }
}
