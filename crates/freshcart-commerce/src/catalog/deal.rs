//! Time-limited deal types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{DealId, ProductId};

/// How close a deal is to expiring, for showcase styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DealUrgency {
    /// Two hours or less remaining.
    Critical,
    /// Six hours or less remaining.
    High,
    /// Twelve hours or less remaining.
    Medium,
    /// More than twelve hours remaining.
    Low,
}

impl DealUrgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            DealUrgency::Critical => "critical",
            DealUrgency::High => "high",
            DealUrgency::Medium => "medium",
            DealUrgency::Low => "low",
        }
    }
}

/// A time-limited promotional deal grouping several products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    /// Unique deal identifier.
    pub id: DealId,
    /// Display title.
    pub title: String,
    /// Products included in the deal.
    pub product_ids: Vec<ProductId>,
    /// When the deal stops applying.
    pub expires_at: DateTime<Utc>,
    /// Sort position within the showcase.
    pub position: i32,
}

impl Deal {
    /// Whether the deal has not yet expired.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.expires_at > now
    }

    /// Hours remaining until expiry, floored at zero.
    pub fn hours_left(&self, now: DateTime<Utc>) -> i64 {
        (self.expires_at - now).num_hours().max(0)
    }

    /// Urgency band for showcase styling.
    pub fn urgency(&self, now: DateTime<Utc>) -> DealUrgency {
        match self.hours_left(now) {
            0..=2 => DealUrgency::Critical,
            3..=6 => DealUrgency::High,
            7..=12 => DealUrgency::Medium,
            _ => DealUrgency::Low,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn deal(hours_from_now: i64, now: DateTime<Utc>) -> Deal {
        Deal {
            id: DealId::new("1"),
            title: "Weekend Fruit Fest".to_string(),
            product_ids: vec![ProductId::new("2"), ProductId::new("6")],
            expires_at: now + Duration::hours(hours_from_now),
            position: 1,
        }
    }

    #[test]
    fn test_active_window() {
        let now = Utc::now();
        assert!(deal(5, now).is_active(now));
        assert!(!deal(-1, now).is_active(now));
    }

    #[test]
    fn test_urgency_bands() {
        let now = Utc::now();
        assert_eq!(deal(1, now).urgency(now), DealUrgency::Critical);
        assert_eq!(deal(5, now).urgency(now), DealUrgency::High);
        assert_eq!(deal(10, now).urgency(now), DealUrgency::Medium);
        assert_eq!(deal(48, now).urgency(now), DealUrgency::Low);
    }

    #[test]
    fn test_expired_deal_is_critical() {
        let now = Utc::now();
        assert_eq!(deal(-3, now).urgency(now), DealUrgency::Critical);
        assert_eq!(deal(-3, now).hours_left(now), 0);
    }
}
