use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Categories excluded from campaign and coupon discounting unless configured
/// otherwise.
pub const DEFAULT_EXEMPT_CATEGORIES: [&str; 2] = ["real_estate", "vehicles"];

/// Pricing policy knobs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    #[serde(default = "default_exempt_categories")]
    pub exempt_categories: BTreeSet<String>,
}

fn default_exempt_categories() -> BTreeSet<String> {
    DEFAULT_EXEMPT_CATEGORIES
        .iter()
        .map(|category| category.to_string())
        .collect()
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            exempt_categories: default_exempt_categories(),
        }
    }
}

impl PricingConfig {
    pub fn is_exempt(&self, category: &str) -> bool {
        self.exempt_categories.contains(category)
    }

    /// Discounts every category, exempt ones included.
    pub fn without_exemptions(mut self) -> Self {
        self.exempt_categories.clear();
        self
    }

    /// Replaces the exempt set when `categories` is non-empty. Use
    /// [`PricingConfig::without_exemptions`] to clear it.
    pub fn with_exempt_categories<I>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let categories: BTreeSet<String> = categories.into_iter().collect();
        if !categories.is_empty() {
            self.exempt_categories = categories;
        }
        self
    }
}
