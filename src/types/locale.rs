//! Caller-supplied display strings

use std::borrow::Cow;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::DayCount;

/// Month names, weekday initials (Sunday first) and tooltip/legend words
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Locale {
    pub months: [String; 12],
    pub days: [String; 7],
    #[serde(rename = "No", alias = "no")]
    pub no: String,
    pub on: String,
    #[serde(rename = "Less", alias = "less")]
    pub less: String,
    #[serde(rename = "More", alias = "more")]
    pub more: String,
}

impl Default for Locale {
    fn default() -> Self {
        let months = [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ];
        let days = ["S", "M", "T", "W", "T", "F", "S"];
        Self {
            months: months.map(String::from),
            days: days.map(String::from),
            no: "No".into(),
            on: "on".into(),
            less: "Less".into(),
            more: "More".into(),
        }
    }
}

impl Locale {
    /// Label for a month number (1-12)
    pub fn month(&self, month: u32) -> &str {
        month
            .checked_sub(1)
            .and_then(|i| self.months.get(i as usize))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Tooltip text: "{count|No} {unit} on MM/DD/YY"
    pub fn tooltip(&self, unit: &TooltipUnit, day: DayCount) -> String {
        let count = if day.count == 0 {
            self.no.clone()
        } else {
            day.count.to_string()
        };
        format!(
            "{} {} {} {}",
            count,
            unit.for_count(day.count),
            self.on,
            day.date.format("%m/%d/%y")
        )
    }
}

/// Unit shown in tooltips: a word pluralized with a trailing "s",
/// or explicit per-range rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TooltipUnit {
    Word(String),
    Rules(Vec<UnitRule>),
}

impl Default for TooltipUnit {
    fn default() -> Self {
        Self::Word("Event".into())
    }
}

impl TooltipUnit {
    /// Resolve the unit for a count. Rules are checked in order; no match
    /// yields an empty unit.
    pub fn for_count(&self, count: u64) -> Cow<'_, str> {
        match self {
            Self::Word(word) if count == 1 => Cow::Borrowed(word),
            Self::Word(word) => Cow::Owned(format!("{}s", word)),
            Self::Rules(rules) => rules
                .iter()
                .find(|rule| rule.matches(count))
                .map(|rule| Cow::Borrowed(rule.unit.as_str()))
                .unwrap_or(Cow::Borrowed("")),
        }
    }
}

/// `{min, max?, unit}`; a missing max means exactly `min`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitRule {
    pub min: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<UpperBound>,
    pub unit: String,
}

impl UnitRule {
    pub fn matches(&self, count: u64) -> bool {
        let within_max = match self.max {
            // A zero max falls back to min
            Some(UpperBound::At(0)) | None => count <= self.min,
            Some(UpperBound::At(max)) => count <= max,
            Some(UpperBound::Unbounded) => true,
        };
        count >= self.min && within_max
    }
}

/// Rule upper bound: a count or `"Infinity"`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpperBound {
    At(u64),
    Unbounded,
}

impl<'de> Deserialize<'de> for UpperBound {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Count(u64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Count(n) => Ok(Self::At(n)),
            Raw::Text(s) if s.eq_ignore_ascii_case("infinity") => Ok(Self::Unbounded),
            Raw::Text(s) => Err(serde::de::Error::custom(format!(
                "invalid rule max: {:?}",
                s
            ))),
        }
    }
}

impl Serialize for UpperBound {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::At(n) => serializer.serialize_u64(*n),
            Self::Unbounded => serializer.serialize_str("Infinity"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(count: u64) -> DayCount {
        DayCount {
            date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            count,
        }
    }

    #[test]
    fn test_default_locale() {
        let locale = Locale::default();
        assert_eq!(locale.month(1), "Jan");
        assert_eq!(locale.month(12), "Dec");
        assert_eq!(locale.days[0], "S");
        assert_eq!(locale.days[1], "M");
        assert_eq!(locale.less, "Less");
    }

    #[test]
    fn test_month_out_of_range_is_empty() {
        let locale = Locale::default();
        assert_eq!(locale.month(0), "");
        assert_eq!(locale.month(13), "");
        assert_eq!(locale.month(u32::MAX), "");
    }

    #[test]
    fn test_partial_locale_keeps_defaults() {
        let locale: Locale = serde_json::from_str(r#"{"No": "Kein", "on": "am"}"#).unwrap();
        assert_eq!(locale.no, "Kein");
        assert_eq!(locale.on, "am");
        assert_eq!(locale.more, "More");
        assert_eq!(locale.month(5), "May");
    }

    #[test]
    fn test_locale_rejects_wrong_month_count() {
        let result: Result<Locale, _> = serde_json::from_str(r#"{"months": ["Jan"]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_word_unit_pluralization() {
        let unit = TooltipUnit::default();
        assert_eq!(unit.for_count(0), "Events");
        assert_eq!(unit.for_count(1), "Event");
        assert_eq!(unit.for_count(2), "Events");
    }

    #[test]
    fn test_rule_units() {
        let unit: TooltipUnit = serde_json::from_str(
            r#"[
                {"min": 0, "unit": "contributions"},
                {"min": 1, "max": 1, "unit": "contribution"},
                {"min": 2, "max": "Infinity", "unit": "contributions"}
            ]"#,
        )
        .unwrap();
        assert_eq!(unit.for_count(0), "contributions");
        assert_eq!(unit.for_count(1), "contribution");
        assert_eq!(unit.for_count(250), "contributions");
    }

    #[test]
    fn test_rule_units_no_match_is_empty() {
        let unit = TooltipUnit::Rules(vec![UnitRule {
            min: 5,
            max: Some(UpperBound::At(10)),
            unit: "runs".into(),
        }]);
        assert_eq!(unit.for_count(4), "");
        assert_eq!(unit.for_count(11), "");
        assert_eq!(unit.for_count(7), "runs");
    }

    #[test]
    fn test_rule_zero_max_falls_back_to_min() {
        let rule = UnitRule {
            min: 3,
            max: Some(UpperBound::At(0)),
            unit: "x".into(),
        };
        assert!(rule.matches(3));
        assert!(!rule.matches(4));
    }

    #[test]
    fn test_invalid_rule_max() {
        let result: Result<TooltipUnit, _> =
            serde_json::from_str(r#"[{"min": 1, "max": "lots", "unit": "x"}]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_upper_bound_serializes_infinity() {
        let json = serde_json::to_string(&UpperBound::Unbounded).unwrap();
        assert_eq!(json, r#""Infinity""#);
    }

    #[test]
    fn test_tooltip_text() {
        let locale = Locale::default();
        let unit = TooltipUnit::default();
        assert_eq!(locale.tooltip(&unit, day(0)), "No Events on 03/05/24");
        assert_eq!(locale.tooltip(&unit, day(1)), "1 Event on 03/05/24");
        assert_eq!(locale.tooltip(&unit, day(12)), "12 Events on 03/05/24");
    }
}
