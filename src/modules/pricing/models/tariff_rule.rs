use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Timelike, Weekday};
use rust_decimal::Decimal;

/// Unit a rental is billed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BillingUnit {
    Hour,
    Day,
}

/// Predicate evaluated against the local start time of a billing unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleCondition {
    /// Unit starts on a Saturday or Sunday
    Weekend,
    /// Unit starts at a local hour in `[start, end)`. Wraps midnight when `start > end`.
    HourWindow { start: u32, end: u32 },
    /// Unit starts on one of the listed local dates
    Dates(Vec<NaiveDate>),
}

impl RuleCondition {
    pub fn matches(&self, local_start: &DateTime<FixedOffset>) -> bool {
        match self {
            RuleCondition::Weekend => {
                matches!(local_start.weekday(), Weekday::Sat | Weekday::Sun)
            }
            RuleCondition::HourWindow { start, end } => {
                let hour = local_start.hour();
                if start <= end {
                    hour >= *start && hour < *end
                } else {
                    hour >= *start || hour < *end
                }
            }
            RuleCondition::Dates(dates) => dates.contains(&local_start.date_naive()),
        }
    }
}

/// One entry of the multiplier table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TariffRule {
    pub name: String,
    pub units: Vec<BillingUnit>,
    pub condition: RuleCondition,
    pub multiplier: Decimal,
}

impl TariffRule {
    pub fn new(
        name: impl Into<String>,
        units: &[BillingUnit],
        condition: RuleCondition,
        multiplier: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            units: units.to_vec(),
            condition,
            multiplier,
        }
    }

    pub fn applies(&self, unit: BillingUnit, local_start: &DateTime<FixedOffset>) -> bool {
        self.units.contains(&unit) && self.condition.matches(local_start)
    }

    /// Weekend surcharge, x1.2 on hours and days
    pub fn weekend() -> Self {
        Self::new(
            "weekend",
            &[BillingUnit::Hour, BillingUnit::Day],
            RuleCondition::Weekend,
            Decimal::new(12, 1),
        )
    }

    /// Peak-hour surcharge, x1.5 on hours inside the window
    pub fn peak(name: impl Into<String>, start: u32, end: u32) -> Self {
        Self::new(
            name,
            &[BillingUnit::Hour],
            RuleCondition::HourWindow { start, end },
            Decimal::new(15, 1),
        )
    }

    /// Holiday surcharge on the given dates, for hours and days
    pub fn holidays(dates: Vec<NaiveDate>, multiplier: Decimal) -> Self {
        Self::new(
            "holiday",
            &[BillingUnit::Hour, BillingUnit::Day],
            RuleCondition::Dates(dates),
            multiplier,
        )
    }
}

/// Standard table: weekend x1.2, morning peak 07-09 x1.5, evening peak 17-19 x1.5
pub fn default_rules() -> Vec<TariffRule> {
    vec![
        TariffRule::weekend(),
        TariffRule::peak("morning_peak", 7, 9),
        TariffRule::peak("evening_peak", 17, 19),
    ]
}
