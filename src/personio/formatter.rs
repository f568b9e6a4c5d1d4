use std::collections::BTreeMap;

use phonenumber::Mode;
use phonenumber::country;
use serde::{Deserialize, Serialize};

/// Output format of a normalized phone number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PhoneNumberFormat {
    /// e.g. +41446681800
    E164,
    /// e.g. +41 44 668 18 00
    International,
    /// e.g. 044 668 18 00
    National,
    /// e.g. tel:+41-44-668-18-00
    Rfc3966,
}

impl Default for PhoneNumberFormat {
    /// Defaults to the international format.
    fn default() -> Self {
        PhoneNumberFormat::International
    }
}

impl PhoneNumberFormat {
    fn mode(self) -> Mode {
        match self {
            PhoneNumberFormat::E164 => Mode::E164,
            PhoneNumberFormat::International => Mode::International,
            PhoneNumberFormat::National => Mode::National,
            PhoneNumberFormat::Rfc3966 => Mode::Rfc3966,
        }
    }
}

/// Phone number normalization settings for one dynamic attribute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhoneNumberConfig {
    /// Default region for the phone number, if not clear from the number.
    pub default_region: String,
    /// Output format of the normalized number.
    #[serde(default)]
    pub format: Option<PhoneNumberFormat>,
}

/// Binds one transform to one dynamic attribute key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatterConfig {
    /// The dynamic attribute key that should be formatted.
    pub attribute: String,
    /// Phone number normalization, if configured for this key.
    #[serde(default)]
    pub phonenumber: Option<PhoneNumberConfig>,
}

/// A transform applied to one dynamic attribute value.
pub trait AttributeFormatter {
    /// Format the input, returning it unchanged when it cannot be
    /// interpreted.
    fn format(&self, input: &str) -> String;
}

/// Parses values as phone numbers and renders them in a fixed format.
pub struct PhoneNumberFormatter {
    default_region: Option<country::Id>,
    format: PhoneNumberFormat,
}

impl PhoneNumberFormatter {
    /// Configure from the per-key settings. An unrecognized region code
    /// falls back to the unknown region, which leaves region-dependent
    /// numbers unparseable and therefore unchanged.
    pub fn from_config(cfg: &PhoneNumberConfig) -> Self {
        PhoneNumberFormatter {
            default_region: cfg.default_region.parse::<country::Id>().ok(),
            format: cfg.format.unwrap_or_default(),
        }
    }
}

impl AttributeFormatter for PhoneNumberFormatter {
    fn format(&self, input: &str) -> String {
        match phonenumber::parse(self.default_region, input) {
            Ok(number) => number.format().mode(self.format.mode()).to_string(),
            Err(_) => input.to_string(),
        }
    }
}

struct BoundFormatter {
    attribute_key: String,
    formatter: Box<dyn AttributeFormatter + Send + Sync>,
}

/// Ordered pipeline of per-key formatters applied after record assembly.
#[derive(Default)]
pub struct FormatterCollection {
    formatters: Vec<BoundFormatter>,
}

impl FormatterCollection {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        FormatterCollection {
            formatters: Vec::new(),
        }
    }

    /// Build the pipeline in configuration order. Bindings without a
    /// configured transform are skipped. Several bindings on the same key
    /// apply in order, so the last one wins.
    pub fn from_config(cfg: &[FormatterConfig]) -> Self {
        let mut formatters: Vec<BoundFormatter> = Vec::new();

        for binding in cfg {
            if let Some(phone_cfg) = &binding.phonenumber {
                formatters.push(BoundFormatter {
                    attribute_key: binding.attribute.clone(),
                    formatter: Box::new(PhoneNumberFormatter::from_config(phone_cfg)),
                });
            }
        }

        FormatterCollection { formatters }
    }

    /// Apply every bound formatter to its dynamic attribute. Keys that are
    /// absent or unreadable are skipped.
    pub fn format_all(&self, attrs: &mut BTreeMap<String, Option<String>>) {
        for bound in &self.formatters {
            let Some(Some(value)) = attrs.get(&bound.attribute_key) else {
                continue;
            };
            let formatted = bound.formatter.format(value);
            attrs.insert(bound.attribute_key.clone(), Some(formatted));
        }
    }
}
