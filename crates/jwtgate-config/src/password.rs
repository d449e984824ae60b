use crate::{ConfigError, parsed_or};

#[derive(Clone, Copy, Debug)]
pub struct PasswordConfig {
    /// bcrypt work factor
    pub cost: u32,
}

impl PasswordConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let cost = parsed_or("BCRYPT_COST", bcrypt::DEFAULT_COST)?;
        // bcrypt only accepts 4..=31
        if !(4..=31).contains(&cost) {
            return Err(ConfigError::Invalid {
                name: "BCRYPT_COST",
                value: cost.to_string(),
            });
        }
        Ok(Self { cost })
    }
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }
}
