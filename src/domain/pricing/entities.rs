use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::value_objects::{Price, PricingRule};

/// Domain entity - one generated price.
///
/// Field names and shapes match the persisted `priceHistory` layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedResult {
    #[serde(with = "js_date")]
    timestamp: DateTime<Utc>,
    original_price: f64,
    final_price: f64,
    applied_rule: PricingRule,
}

impl PricedResult {
    pub fn new(timestamp: DateTime<Utc>, original_price: Price, rule: PricingRule) -> Self {
        Self {
            timestamp,
            original_price: original_price.value(),
            final_price: rule.apply(original_price),
            applied_rule: rule,
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn original_price(&self) -> f64 {
        self.original_price
    }

    pub fn final_price(&self) -> f64 {
        self.final_price
    }

    pub fn applied_rule(&self) -> PricingRule {
        self.applied_rule
    }

    /// True when `final_price` equals `original_price` times the rule's multiplier.
    pub fn is_consistent(&self) -> bool {
        self.final_price == self.original_price * self.applied_rule.multiplier()
    }
}

/// Timestamps in the shape `JSON.stringify(new Date())` produces:
/// `2024-05-01T10:00:00.000Z`. Epoch milliseconds are accepted on read.
mod js_date {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawDate {
        Text(String),
        Millis(i64),
    }

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        match RawDate::deserialize(deserializer)? {
            RawDate::Text(text) => DateTime::parse_from_rfc3339(&text)
                .map(|ts| ts.with_timezone(&Utc))
                .map_err(D::Error::custom),
            RawDate::Millis(millis) => DateTime::from_timestamp_millis(millis)
                .ok_or_else(|| D::Error::custom(format!("timestamp {} out of range", millis))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn final_price_follows_rule() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        let result = PricedResult::new(ts, Price::new(100.0).unwrap(), PricingRule::OneAndHalf);
        assert_eq!(result.final_price(), 150.0);
        assert_eq!(result.original_price(), 100.0);
        assert_eq!(result.applied_rule(), PricingRule::OneAndHalf);
        assert_eq!(result.timestamp(), ts);
        assert!(result.is_consistent());
    }

    #[test]
    fn serializes_in_camel_case_with_label() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        let result = PricedResult::new(ts, Price::new(100.0).unwrap(), PricingRule::TwoAndHalf);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["originalPrice"], 100.0);
        assert_eq!(json["finalPrice"], 250.0);
        assert_eq!(json["appliedRule"], "2.5x Original Price (60%)");
        assert_eq!(json["timestamp"], "2024-05-01T10:00:00.000Z");
    }

    #[test]
    fn accepts_javascript_date_strings() {
        let raw = r#"{"timestamp":"2024-05-01T10:00:00.000Z","originalPrice":10,"finalPrice":10,"appliedRule":"Original Price (0.1%)"}"#;
        let result: PricedResult = serde_json::from_str(raw).unwrap();
        assert_eq!(result.applied_rule(), PricingRule::Original);
        assert_eq!(result.final_price(), 10.0);
        assert_eq!(
            result.timestamp(),
            Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap()
        );
    }

    #[test]
    fn accepts_epoch_millis_and_rejects_garbage_dates() {
        let millis = r#"{"timestamp":0,"originalPrice":1,"finalPrice":2.5,"appliedRule":"2.5x Original Price (60%)"}"#;
        let result: PricedResult = serde_json::from_str(millis).unwrap();
        assert_eq!(result.timestamp(), DateTime::<Utc>::UNIX_EPOCH);

        let garbage = r#"{"timestamp":"yesterday","originalPrice":1,"finalPrice":2.5,"appliedRule":"2.5x Original Price (60%)"}"#;
        assert!(serde_json::from_str::<PricedResult>(garbage).is_err());
    }
}
