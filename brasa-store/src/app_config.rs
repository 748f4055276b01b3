use brasa_catalog::PricingPolicy;
use brasa_order::KitchenPolicy;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub business_rules: BusinessRules,
}

/// Tunable business rules; defaults match the standing house rules
#[derive(Debug, Deserialize, Clone)]
pub struct BusinessRules {
    #[serde(default = "default_take_away_discount_rate")]
    pub take_away_discount_rate: f64,

    #[serde(default = "default_invoice_discount_amount")]
    pub invoice_discount_amount: f64,

    #[serde(default = "default_delivery_overhead_minutes")]
    pub delivery_overhead_minutes: i64,
}

fn default_take_away_discount_rate() -> f64 {
    0.10
}

fn default_invoice_discount_amount() -> f64 {
    10.0
}

fn default_delivery_overhead_minutes() -> i64 {
    10
}

impl Default for BusinessRules {
    fn default() -> Self {
        Self {
            take_away_discount_rate: default_take_away_discount_rate(),
            invoice_discount_amount: default_invoice_discount_amount(),
            delivery_overhead_minutes: default_delivery_overhead_minutes(),
        }
    }
}

impl BusinessRules {
    pub fn pricing_policy(&self) -> PricingPolicy {
        PricingPolicy {
            take_away_discount_rate: self.take_away_discount_rate,
            invoice_discount_amount: self.invoice_discount_amount,
        }
    }

    pub fn kitchen_policy(&self) -> KitchenPolicy {
        KitchenPolicy {
            delivery_overhead_minutes: self.delivery_overhead_minutes,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Base configuration file, then the per-environment overlay
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Environment overrides, e.g. BRASA__BUSINESS_RULES__TAKE_AWAY_DISCOUNT_RATE
            .add_source(config::Environment::with_prefix("BRASA").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_house_rules() {
        let rules = BusinessRules::default();

        assert_eq!(rules.take_away_discount_rate, 0.10);
        assert_eq!(rules.invoice_discount_amount, 10.0);
        assert_eq!(rules.delivery_overhead_minutes, 10);
    }

    #[test]
    fn test_rules_map_into_policies() {
        let rules = BusinessRules {
            take_away_discount_rate: 0.2,
            invoice_discount_amount: 25.0,
            delivery_overhead_minutes: 15,
        };

        let pricing = rules.pricing_policy();
        assert_eq!(pricing.take_away_discount_rate, 0.2);
        assert_eq!(pricing.invoice_discount_amount, 25.0);

        let kitchen = rules.kitchen_policy();
        assert_eq!(kitchen.delivery_overhead_minutes, 15);
    }

    #[test]
    fn test_load_without_files_uses_defaults() {
        let config = Config::load().expect("config loads from defaults");

        assert_eq!(config.business_rules.take_away_discount_rate, 0.10);
    }
}
