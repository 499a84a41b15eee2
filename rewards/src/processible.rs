use processing::model::{Feature, FeatureValue, Processible};

use crate::model::Receipt;

pub const FEATURE_RETAILER: &str = "retailer";
pub const FEATURE_TOTAL: &str = "total";
pub const FEATURE_ITEM_COUNT: &str = "item_count";
pub const FEATURE_ITEM_DESCRIPTIONS: &str = "item_descriptions";
pub const FEATURE_ITEM_PRICES: &str = "item_prices";
pub const FEATURE_PURCHASE_DATE: &str = "purchase_date";
pub const FEATURE_PURCHASE_TIME: &str = "purchase_time";

impl Processible for Receipt {
    fn extract_features(&self) -> Vec<Feature> {
        let mut features = Vec::new();

        features.push(Feature {
            name: FEATURE_RETAILER.to_string(),
            value: Box::new(FeatureValue::String(self.retailer.clone())),
        });

        features.push(Feature {
            name: FEATURE_TOTAL.to_string(),
            value: Box::new(FeatureValue::String(self.total.clone())),
        });

        features.push(Feature {
            name: FEATURE_ITEM_COUNT.to_string(),
            value: Box::new(FeatureValue::Int(self.items.len() as i64)),
        });

        // Index-aligned per-item lists; the description rule zips them back
        // together.
        features.push(Feature {
            name: FEATURE_ITEM_DESCRIPTIONS.to_string(),
            value: Box::new(FeatureValue::StringList(
                self.items
                    .iter()
                    .map(|item| item.short_description.clone())
                    .collect(),
            )),
        });

        features.push(Feature {
            name: FEATURE_ITEM_PRICES.to_string(),
            value: Box::new(FeatureValue::StringList(
                self.items.iter().map(|item| item.price.clone()).collect(),
            )),
        });

        features.push(Feature {
            name: FEATURE_PURCHASE_DATE.to_string(),
            value: Box::new(FeatureValue::String(self.purchase_date.clone())),
        });

        features.push(Feature {
            name: FEATURE_PURCHASE_TIME.to_string(),
            value: Box::new(FeatureValue::String(self.purchase_time.clone())),
        });

        features
    }
}
