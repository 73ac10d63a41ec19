use super::{ConfigError, GenerationPolicy};

/// Construction parameters for a board. Fixed for the lifetime of a game.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    /// Chance each light starts on. Only read by [`GenerationPolicy::Independent`].
    pub initial_lit_probability: f64,
    pub policy: GenerationPolicy,
}

impl GameConfig {
    pub const DEFAULT_ROWS: usize = 5;
    pub const DEFAULT_COLS: usize = 5;
    pub const DEFAULT_LIT_PROBABILITY: f64 = 0.5;

    /// Config for a `rows` x `cols` board with default generation settings
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    pub fn with_lit_probability(mut self, probability: f64) -> Self {
        self.initial_lit_probability = probability;
        self
    }

    pub fn with_policy(mut self, policy: GenerationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::ZeroRows);
        }
        if self.cols == 0 {
            return Err(ConfigError::ZeroCols);
        }
        // NaN fails the range check too
        if !(0.0..=1.0).contains(&self.initial_lit_probability) {
            return Err(ConfigError::ProbabilityOutOfRange(self.initial_lit_probability));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: Self::DEFAULT_ROWS,
            cols: Self::DEFAULT_COLS,
            initial_lit_probability: Self::DEFAULT_LIT_PROBABILITY,
            policy: GenerationPolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!((config.rows, config.cols), (5, 5));
        assert_eq!(config.initial_lit_probability, 0.5);
        assert_eq!(config.policy, GenerationPolicy::Scramble { moves: 100 });
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(GameConfig::new(0, 5).validate(), Err(ConfigError::ZeroRows));
        assert_eq!(GameConfig::new(5, 0).validate(), Err(ConfigError::ZeroCols));
    }

    #[test]
    fn test_probability_bounds() {
        assert!(GameConfig::default().with_lit_probability(0.0).validate().is_ok());
        assert!(GameConfig::default().with_lit_probability(1.0).validate().is_ok());
        assert_eq!(
            GameConfig::default().with_lit_probability(1.5).validate(),
            Err(ConfigError::ProbabilityOutOfRange(1.5))
        );
        assert_eq!(
            GameConfig::default().with_lit_probability(-0.1).validate(),
            Err(ConfigError::ProbabilityOutOfRange(-0.1))
        );
        assert!(GameConfig::default().with_lit_probability(f64::NAN).validate().is_err());
    }
}
