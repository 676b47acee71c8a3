use regex::Regex;

use crate::config::GroceryConfig;
use crate::units::BaseUnit;

/// Result of parsing one raw measurement string.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedQuantity {
    pub amount: f64,
    pub unit: String,
}

/// Parses free-form measurement strings ("1 cup + 2 tbsp", "1/2 tsp",
/// "200g", "Dash") into a numeric amount and a standardized unit label.
pub struct QuantityParser<'a> {
    config: &'a GroceryConfig,
    segment_pattern: Regex,
}

impl<'a> QuantityParser<'a> {
    pub fn new(config: &'a GroceryConfig) -> Result<Self, regex::Error> {
        // Leading numeric token (digits, '.', '/') with an optional
        // alphabetic unit token after it. Anything else in the segment
        // is ignored.
        let segment_pattern = Regex::new(r"^([\d./]+)\s*([a-zA-Z]*)")?;
        Ok(QuantityParser {
            config,
            segment_pattern,
        })
    }

    /// Parse a raw measurement for the given ingredient.
    ///
    /// Compound measurements joined with '+' are summed. Segments whose
    /// numeric token is malformed are skipped and contribute zero. The
    /// resolved unit is the base unit of the last segment that matched the
    /// unit table; when no segment resolves one, the ingredient's logical
    /// unit ("pieces" by default) is assigned instead.
    pub fn parse(&self, raw_quantity: &str, ingredient: &str) -> ParsedQuantity {
        let mut total = 0.0;
        let mut resolved: Option<BaseUnit> = None;

        for segment in raw_quantity.split('+').map(str::trim) {
            let Some(caps) = self.segment_pattern.captures(segment) else {
                continue;
            };
            let Some(value) = parse_numeric_token(&caps[1]) else {
                continue;
            };
            let unit_token = caps.get(2).map_or("", |m| m.as_str());
            match self.config.unit_conversion(unit_token) {
                Some(conversion) => {
                    total += value * conversion.multiplier;
                    resolved = Some(conversion.base);
                }
                // Empty or unrecognized unit: keep the raw numeric value.
                None => total += value,
            }
        }

        let unit = match resolved {
            Some(base) => base.label().to_string(),
            None => self.config.logical_unit(ingredient).to_string(),
        };

        ParsedQuantity {
            amount: total,
            unit,
        }
    }
}

/// Evaluate a numeric token: an integer, a decimal, or a single-slash
/// fraction of those. Anything else (including a zero denominator) is
/// rejected so the segment gets skipped.
fn parse_numeric_token(token: &str) -> Option<f64> {
    let mut operands = token.split('/');
    let numerator = operands.next()?;
    match operands.next() {
        None => parse_decimal(numerator),
        Some(denominator) => {
            if operands.next().is_some() {
                return None;
            }
            let n = parse_decimal(numerator)?;
            let d = parse_decimal(denominator)?;
            if d == 0.0 {
                None
            } else {
                Some(n / d)
            }
        }
    }
}

/// Strict non-negative decimal: digits with at most one '.', nothing else.
/// Kept separate from `str::parse::<f64>` alone so tokens like "1e9" or
/// "inf" never sneak through.
fn parse_decimal(text: &str) -> Option<f64> {
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }
    text.parse().ok()
}
