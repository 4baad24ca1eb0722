//! Tiered quantity pricing.
//!
//! A product carries a list of price tiers: buy at least `min_quantity`
//! units and every unit costs `price`. Resolution picks the tier with the
//! largest `min_quantity` not exceeding the requested quantity, so better
//! bulk discounts apply as soon as their threshold is met. All derived
//! values (line totals, savings, badges, upsell hints) are computed on
//! demand and never cached, which keeps discounts from going stale.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CommerceError;
use crate::money::{Currency, Money};

/// A single quantity-based pricing rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceTier {
    /// Minimum order quantity at which this tier applies.
    pub min_quantity: i64,
    /// Per-unit price at this tier.
    pub price: Money,
    /// Percentage discount relative to the base tier. Authoritative
    /// data supplied with the tier, never derived from the price delta.
    pub discount_percentage: u8,
}

impl PriceTier {
    /// Create a new tier.
    pub fn new(min_quantity: i64, price: Money, discount_percentage: u8) -> Self {
        Self {
            min_quantity,
            price,
            discount_percentage,
        }
    }

    /// The zero-price fallback used when a product has no tiers.
    pub fn fallback(currency: Currency) -> Self {
        Self::new(1, Money::zero(currency), 0)
    }
}

/// Upsell hint: how far the shopper is from a cheaper tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NextTierIncentive {
    /// The tier being advertised.
    pub tier: PriceTier,
    /// Units to add before the tier applies.
    pub additional_units_needed: i64,
    /// Per-unit saving versus the currently resolved tier.
    pub per_unit_savings: Money,
}

/// Badge metadata for product listings. Display-only, never used in
/// pricing math.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscountBadge {
    /// Whether any tier carries a discount.
    pub has_discount: bool,
    /// The largest discount percentage across tiers.
    pub max_discount: u8,
}

/// Everything derived from resolving a tier for a quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct TierQuote {
    /// The resolved tier.
    pub tier: PriceTier,
    /// `tier.price * quantity`.
    pub line_total: Money,
    /// Base-tier unit price minus this tier's unit price.
    pub savings_per_unit: Money,
    /// `savings_per_unit * quantity`.
    pub line_savings: Money,
}

/// A product's validated, normalized tier list.
///
/// The list may be empty (resolution falls back to a zero-price tier)
/// and carries no guaranteed order; resolution never assumes one.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TierSchedule {
    tiers: Vec<PriceTier>,
}

impl TierSchedule {
    /// Build a schedule from typed tiers, validating the invariants the
    /// resolver relies on.
    pub fn new(tiers: Vec<PriceTier>) -> Result<Self, CommerceError> {
        for tier in &tiers {
            if tier.min_quantity < 1 {
                return Err(CommerceError::InvalidTierData(format!(
                    "tier minQuantity must be positive, got {}",
                    tier.min_quantity
                )));
            }
            if tier.price.amount_cents < 0 {
                return Err(CommerceError::InvalidTierData(format!(
                    "tier price must be non-negative, got {}",
                    tier.price.amount_cents
                )));
            }
            if tier.discount_percentage > 100 {
                return Err(CommerceError::InvalidTierData(format!(
                    "tier discountPercentage must be 0-100, got {}",
                    tier.discount_percentage
                )));
            }
        }
        Ok(Self { tiers })
    }

    /// An empty schedule; resolves everything to the zero-price fallback.
    pub fn empty() -> Self {
        Self { tiers: Vec::new() }
    }

    /// Normalize a raw `priceTiers` field into a schedule.
    ///
    /// The remote record store returns the field either as a structured
    /// JSON array or as a JSON-encoded string, and sometimes omits it
    /// entirely. Absent/null fields yield an empty schedule; anything
    /// else malformed is `InvalidTierData`.
    pub fn from_json_value(value: &Value, currency: Currency) -> Result<Self, CommerceError> {
        match value {
            Value::Null => Ok(Self::empty()),
            Value::String(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Ok(Self::empty());
                }
                let parsed: Value = serde_json::from_str(trimmed).map_err(|e| {
                    CommerceError::InvalidTierData(format!(
                        "priceTiers string is not valid JSON: {e}"
                    ))
                })?;
                match parsed {
                    Value::Array(_) => Self::from_json_value(&parsed, currency),
                    other => Err(CommerceError::InvalidTierData(format!(
                        "priceTiers string decoded to {other}, expected an array"
                    ))),
                }
            }
            Value::Array(items) => {
                let mut tiers = Vec::with_capacity(items.len());
                for item in items {
                    tiers.push(parse_tier(item, currency)?);
                }
                Self::new(tiers)
            }
            other => Err(CommerceError::InvalidTierData(format!(
                "priceTiers must be an array or JSON string, got {other}"
            ))),
        }
    }

    /// Whether the schedule has no tiers.
    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    /// Iterate tiers in stored order (for rendering tier tables).
    pub fn tiers(&self) -> &[PriceTier] {
        &self.tiers
    }

    /// The base tier, if one exists (`min_quantity == 1`).
    pub fn base(&self) -> Option<&PriceTier> {
        self.tiers.iter().find(|t| t.min_quantity == 1)
    }

    /// The base tier's unit price, used as the reference for savings.
    pub fn base_price(&self) -> Money {
        self.base()
            .or_else(|| self.tiers.first())
            .map(|t| t.price)
            .unwrap_or_else(|| Money::zero(self.currency()))
    }

    /// Resolve the applicable tier for a quantity.
    ///
    /// The tier with the largest `min_quantity <= quantity` wins. If no
    /// tier qualifies, falls back to the base tier, then to the first
    /// tier; an empty schedule resolves to the zero-price fallback.
    pub fn resolve(&self, quantity: i64) -> PriceTier {
        let mut best: Option<&PriceTier> = None;
        for tier in &self.tiers {
            if tier.min_quantity <= quantity
                && best.map_or(true, |b| tier.min_quantity > b.min_quantity)
            {
                best = Some(tier);
            }
        }
        best.or_else(|| self.base())
            .or_else(|| self.tiers.first())
            .cloned()
            .unwrap_or_else(|| PriceTier::fallback(self.currency()))
    }

    /// Resolve a tier and compute the derived line values.
    pub fn quote(&self, quantity: i64) -> TierQuote {
        let tier = self.resolve(quantity);
        let base_price = self.base_price();
        let savings_per_unit = base_price
            .try_subtract(&tier.price)
            .unwrap_or_else(|| Money::zero(tier.price.currency));
        TierQuote {
            line_total: tier.price.multiply(quantity),
            savings_per_unit,
            line_savings: savings_per_unit.multiply(quantity),
            tier,
        }
    }

    /// Discount badge metadata for listings.
    pub fn badge(&self) -> DiscountBadge {
        DiscountBadge {
            has_discount: self.tiers.iter().any(|t| t.discount_percentage > 0),
            max_discount: self
                .tiers
                .iter()
                .map(|t| t.discount_percentage)
                .max()
                .unwrap_or(0),
        }
    }

    /// The cheapest tier the shopper has not yet reached, if any.
    ///
    /// Returns the tier with the smallest `min_quantity` strictly greater
    /// than the current quantity, for upsell messaging.
    pub fn next_tier_incentive(&self, quantity: i64) -> Option<NextTierIncentive> {
        let current = self.resolve(quantity);
        let next = self
            .tiers
            .iter()
            .filter(|t| t.min_quantity > quantity)
            .min_by_key(|t| t.min_quantity)?;
        let per_unit_savings = current
            .price
            .try_subtract(&next.price)
            .unwrap_or_else(|| Money::zero(next.price.currency));
        Some(NextTierIncentive {
            tier: next.clone(),
            additional_units_needed: next.min_quantity - quantity,
            per_unit_savings,
        })
    }

    fn currency(&self) -> Currency {
        self.tiers
            .first()
            .map(|t| t.price.currency)
            .unwrap_or_default()
    }
}

fn parse_tier(item: &Value, currency: Currency) -> Result<PriceTier, CommerceError> {
    let obj = item.as_object().ok_or_else(|| {
        CommerceError::InvalidTierData(format!("tier entry must be an object, got {item}"))
    })?;

    let min_quantity = obj
        .get("minQuantity")
        .and_then(Value::as_i64)
        .ok_or_else(|| {
            CommerceError::InvalidTierData("tier minQuantity is missing or non-numeric".into())
        })?;

    let price = obj.get("price").and_then(Value::as_f64).ok_or_else(|| {
        CommerceError::InvalidTierData("tier price is missing or non-numeric".into())
    })?;

    let discount = match obj.get("discountPercentage") {
        None | Some(Value::Null) => 0,
        Some(v) => v.as_u64().and_then(|d| u8::try_from(d).ok()).ok_or_else(|| {
            CommerceError::InvalidTierData("tier discountPercentage is not an integer 0-100".into())
        })?,
    };

    Ok(PriceTier::new(
        min_quantity,
        Money::from_decimal(price, currency),
        discount,
    ))
}
