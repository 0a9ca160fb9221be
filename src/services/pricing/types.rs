//! Type definitions for the pricing engine

use serde::{Deserialize, Deserializer, Serialize};

/// Calendar month used by [`FixedCostPolicy::CalendarHours`]: 30 days of 24 hours
pub const CALENDAR_HOURS_PER_MONTH: f64 = 30.0 * 24.0;

/// Working month assumed by [`FixedCostPolicy::WorkingHours`] when the labor
/// configuration yields zero hours: 22 days of 8 hours
pub const DEFAULT_WORKING_HOURS_PER_MONTH: f64 = 22.0 * 8.0;

/// Labor configuration of the business owner
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LaborConfig {
    /// Salary the owner wants to take home per month
    #[serde(alias = "desired_salary", alias = "salary")]
    pub monthly_salary: f64,
    /// Days worked per month. Files may give any number: fractions are
    /// truncated, negative and non-finite values read as 0.
    #[serde(
        alias = "working_days",
        alias = "work_days",
        deserialize_with = "deserialize_day_count"
    )]
    pub working_days_per_month: u32,
    /// Hours worked per day
    #[serde(alias = "working_hours", alias = "work_hours")]
    pub working_hours_per_day: f64,
}

impl LaborConfig {
    pub fn new(monthly_salary: f64, working_days_per_month: u32, working_hours_per_day: f64) -> Self {
        Self {
            monthly_salary,
            working_days_per_month,
            working_hours_per_day,
        }
    }

    /// Hours worked in a month
    pub fn total_monthly_hours(&self) -> f64 {
        f64::from(self.working_days_per_month) * self.working_hours_per_day
    }
}

fn deserialize_day_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let days = f64::deserialize(deserializer)?;
    // Saturating cast: NaN and negatives become 0, fractions truncate.
    Ok(days as u32)
}

/// Recurring monthly expense (rent, utilities, software subscriptions)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FixedCostItem {
    #[serde(default)]
    pub name: String,
    #[serde(alias = "monthly_cost")]
    pub monthly_amount: f64,
}

impl FixedCostItem {
    pub fn new(name: impl Into<String>, monthly_amount: f64) -> Self {
        Self {
            name: name.into(),
            monthly_amount,
        }
    }
}

/// What a consumable is used for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsumableKind {
    /// Paper, vinyl, packaging... anything consumed per piece
    #[default]
    Material,
    /// Ink or toner, consumed per printed impression
    Ink,
}

/// A purchasable pack of something that gets used up.
///
/// Ink cartridges are consumables too: their yield is the number of prints
/// one cartridge produces.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsumableItem {
    /// Catalog identifier, referenced by [`ConsumableUsage`]
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub kind: ConsumableKind,
    /// Price paid for one pack or cartridge
    #[serde(alias = "item_cost", alias = "unit_price", alias = "cartridge_price")]
    pub pack_cost: f64,
    /// Usable units in one pack (yield)
    #[serde(alias = "yield", alias = "items_per_pack", alias = "cartridge_yield")]
    pub units_per_pack: f64,
    /// Display name of a unit, e.g. "sheets" or "prints"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_name: Option<String>,
}

impl ConsumableItem {
    pub fn new(id: impl Into<String>, pack_cost: f64, units_per_pack: f64) -> Self {
        Self {
            id: id.into(),
            pack_cost,
            units_per_pack,
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_kind(mut self, kind: ConsumableKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_unit_name(mut self, unit_name: impl Into<String>) -> Self {
        self.unit_name = Some(unit_name.into());
        self
    }
}

/// Join record: how much of a catalog consumable one product uses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumableUsage {
    #[serde(alias = "material_id")]
    pub consumable_id: String,
    #[serde(alias = "quantity_used")]
    pub quantity: f64,
}

impl ConsumableUsage {
    pub fn new(consumable_id: impl Into<String>, quantity: f64) -> Self {
        Self {
            consumable_id: consumable_id.into(),
            quantity,
        }
    }
}

/// Product being priced
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductSpec {
    pub name: String,
    pub time_spent_hours: f64,
    pub desired_profit_margin_percent: f64,
    pub consumables_used: Vec<ConsumableUsage>,
}

impl ProductSpec {
    pub fn new(name: impl Into<String>, time_spent_hours: f64, desired_profit_margin_percent: f64) -> Self {
        Self {
            name: name.into(),
            time_spent_hours,
            desired_profit_margin_percent,
            consumables_used: Vec::new(),
        }
    }
}

/// How monthly fixed costs are spread over hours.
///
/// Both amortizations are in use and give materially different hourly figures,
/// so callers always pick one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixedCostPolicy {
    /// Divide by every hour of a calendar month (720 by default)
    CalendarHours,
    /// Divide by the hours actually worked, falling back to a standard working
    /// month (176 by default) when the labor configuration has none
    WorkingHours,
}

impl std::str::FromStr for FixedCostPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "calendar_hours" | "calendar" => Ok(Self::CalendarHours),
            "working_hours" | "working" => Ok(Self::WorkingHours),
            other => Err(format!(
                "Unknown fixed cost policy '{}', expected calendar_hours or working_hours",
                other
            )),
        }
    }
}

impl std::fmt::Display for FixedCostPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CalendarHours => write!(f, "calendar_hours"),
            Self::WorkingHours => write!(f, "working_hours"),
        }
    }
}

/// Hour figures the fixed cost policies divide by
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationHours {
    pub calendar_hours_per_month: f64,
    pub fallback_working_hours_per_month: f64,
}

impl Default for AmortizationHours {
    fn default() -> Self {
        Self {
            calendar_hours_per_month: CALENDAR_HOURS_PER_MONTH,
            fallback_working_hours_per_month: DEFAULT_WORKING_HOURS_PER_MONTH,
        }
    }
}

/// Cost breakdown of one product, the engine's output.
///
/// Every field is finite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub labor_cost: f64,
    pub fixed_cost_share: f64,
    pub variable_cost: f64,
    pub total_cost: f64,
    pub profit_amount: f64,
    pub suggested_price: f64,
    /// Suggested price rounded up to a whole currency unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rounded_suggested_price: Option<f64>,
}

/// Profit achieved at the price the seller actually charges
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceComparison {
    /// Price the profit is measured against
    pub price_basis: f64,
    /// Whether `price_basis` is the manual price
    pub manual_price_applied: bool,
    pub profit_amount: f64,
    pub profit_margin_percent: f64,
    /// Manual price undercuts the suggested price
    pub below_suggested: bool,
}

/// Split of a product's variable cost by origin.
///
/// `material_cost + print_cost + other_cost` is the breakdown's `variable_cost`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct VariableCostDetail {
    pub material_cost: f64,
    pub print_cost: f64,
    pub other_cost: f64,
}

impl VariableCostDetail {
    pub fn total(&self) -> f64 {
        self.material_cost + self.print_cost + self.other_cost
    }
}

/// Everything the service derives from one quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteResult {
    pub product_name: String,
    pub fixed_cost_policy: FixedCostPolicy,
    pub monthly_labor_hours: f64,
    pub hourly_labor_rate: f64,
    pub total_monthly_fixed_cost: f64,
    pub reference_monthly_hours: f64,
    pub hourly_fixed_cost_rate: f64,
    pub variable: VariableCostDetail,
    pub breakdown: CostBreakdown,
    pub comparison: PriceComparison,
    /// Usages whose consumable id is not in the catalog; they contribute nothing
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unresolved_consumables: Vec<String>,
}
