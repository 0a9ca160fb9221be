//! Test fixtures and data factories
//!
//! Factories build real quotes with the figures of the worked examples.

use print_pricing::{
    ConsumableItem, ConsumableKind, ConsumableUsage, FixedCostItem, LaborConfig, OtherCost, Quote,
    QuoteProduct,
};

/// Factory for creating test quotes
pub struct QuoteFactory;

impl QuoteFactory {
    /// Owner wants 1500 a month working 20 days of 8 hours
    pub fn labor() -> LaborConfig {
        LaborConfig::new(1500.0, 20, 8.0)
    }

    /// Rent and internet, 132 a month in total
    pub fn fixed_costs() -> Vec<FixedCostItem> {
        vec![
            FixedCostItem::new("Rent", 60.0),
            FixedCostItem::new("Internet", 72.0),
        ]
    }

    /// Vinyl pack of 50 sheets for 22, plus two ink cartridges
    pub fn catalog() -> Vec<ConsumableItem> {
        vec![
            ConsumableItem::new("vinyl", 22.0, 50.0)
                .with_name("Adhesive vinyl")
                .with_unit_name("sheets"),
            ConsumableItem::new("black", 80.0, 400.0)
                .with_name("Black cartridge")
                .with_kind(ConsumableKind::Ink)
                .with_unit_name("prints"),
            ConsumableItem::new("color", 120.0, 300.0)
                .with_name("Color cartridge")
                .with_kind(ConsumableKind::Ink)
                .with_unit_name("prints"),
        ]
    }

    /// Two hours of work, 70 vinyl sheets, 50% margin
    pub fn sticker_sheet() -> Quote {
        Quote {
            labor: Self::labor(),
            fixed_costs: Self::fixed_costs(),
            consumables: vec![ConsumableItem::new("vinyl", 22.0, 50.0)],
            product: QuoteProduct {
                name: "Sticker sheet".to_string(),
                time_spent_hours: Some(2.0),
                desired_profit_margin_percent: 50.0,
                consumables_used: vec![ConsumableUsage::new("vinyl", 70.0)],
                ..QuoteProduct::default()
            },
            manual_price: None,
        }
    }

    /// Invitations printed on the full catalog, with packaging
    pub fn printed_invitations() -> Quote {
        Quote {
            labor: Self::labor(),
            fixed_costs: Self::fixed_costs(),
            consumables: Self::catalog(),
            product: QuoteProduct {
                name: "Invitations".to_string(),
                production_time_minutes: Some(90.0),
                desired_profit_margin_percent: 40.0,
                consumables_used: vec![ConsumableUsage::new("vinyl", 10.0)],
                print_quantity: 50.0,
                other_costs: vec![OtherCost::new("Envelopes", 12.5)],
                ..QuoteProduct::default()
            },
            manual_price: None,
        }
    }

    /// Sticker sheet priced by hand at `price`
    pub fn with_manual_price(price: f64) -> Quote {
        let mut quote = Self::sticker_sheet();
        quote.manual_price = Some(price);
        quote
    }
}
