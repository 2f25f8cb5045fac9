use crate::errors::{ConvertError, Result};

/// Configuration for converting a hand history export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterConfig {
    /// Marker written in front of every converted amount
    pub currency_symbol: String,
    /// Currency code written after the stakes in the hand header
    pub currency_code: String,
    /// Number of chips that make up one whole currency unit
    pub chip_scale: u64,
    /// Table mode accepted by the header parser
    pub play_money_marker: String,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            currency_code: "USD".to_string(),
            chip_scale: 100_000,
            play_money_marker: "Play Money".to_string(),
        }
    }
}

impl ConverterConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_currency(mut self, symbol: impl Into<String>, code: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self.currency_code = code.into();
        self
    }

    /// Number of fractional digits implied by `chip_scale`.
    ///
    /// Only meaningful once `validate` has accepted the scale.
    pub fn decimal_places(&self) -> usize {
        let mut places = 0;
        let mut scale = self.chip_scale;
        while scale > 1 {
            scale /= 10;
            places += 1;
        }
        places
    }

    /// Validate the converter configuration
    pub fn validate(&self) -> Result<()> {
        if self.currency_symbol.is_empty() {
            return Err(ConvertError::InvalidConfig(
                "currency_symbol must not be empty".to_string(),
            ));
        }

        // Digit runs directly after the symbol are treated as converted.
        if self.currency_symbol.ends_with(|c: char| c.is_ascii_digit()) {
            return Err(ConvertError::InvalidConfig(format!(
                "currency_symbol ({}) cannot end in a digit",
                self.currency_symbol
            )));
        }

        if self.chip_scale == 0 {
            return Err(ConvertError::InvalidConfig(
                "chip_scale must be greater than 0".to_string(),
            ));
        }

        let mut scale = self.chip_scale;
        while scale % 10 == 0 {
            scale /= 10;
        }
        if scale != 1 {
            return Err(ConvertError::InvalidConfig(format!(
                "chip_scale ({}) must be a power of ten",
                self.chip_scale
            )));
        }

        if self.play_money_marker.is_empty() {
            return Err(ConvertError::InvalidConfig(
                "play_money_marker must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = ConverterConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.decimal_places(), 5);
    }

    #[test]
    fn test_rejects_zero_scale() {
        let config = ConverterConfig {
            chip_scale: 0,
            ..ConverterConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConvertError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rejects_non_power_of_ten_scale() {
        let config = ConverterConfig {
            chip_scale: 250,
            ..ConverterConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_scale_of_one_has_no_decimals() {
        let config = ConverterConfig {
            chip_scale: 1,
            ..ConverterConfig::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.decimal_places(), 0);
    }

    #[test]
    fn test_rejects_bad_symbols() {
        assert!(ConverterConfig::new()
            .with_currency("", "USD")
            .validate()
            .is_err());
        assert!(ConverterConfig::new()
            .with_currency("P1", "PM")
            .validate()
            .is_err());
        assert!(ConverterConfig::new()
            .with_currency("€", "EUR")
            .validate()
            .is_ok());
    }
}
