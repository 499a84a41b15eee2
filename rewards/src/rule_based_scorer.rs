use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::{Decimal, prelude::ToPrimitive};

use processing::model::{Feature, FeatureValue, Points, ScorerResult, find_feature};
use processing::scorers::RuleBasedScorer;

use crate::processible::{
    FEATURE_ITEM_COUNT, FEATURE_ITEM_DESCRIPTIONS, FEATURE_ITEM_PRICES, FEATURE_PURCHASE_DATE,
    FEATURE_PURCHASE_TIME, FEATURE_RETAILER, FEATURE_TOTAL,
};

static ALPHANUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new("[a-zA-Z0-9]").unwrap());

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

fn feature_str<'a>(features: &'a [Feature], name: &str) -> Option<&'a str> {
    match find_feature(features, name) {
        Some(FeatureValue::String(value)) => Some(value),
        _ => None,
    }
}

fn feature_int(features: &[Feature], name: &str) -> Option<i64> {
    match find_feature(features, name) {
        Some(FeatureValue::Int(value)) => Some(*value),
        _ => None,
    }
}

fn feature_list<'a>(features: &'a [Feature], name: &str) -> Option<&'a [String]> {
    match find_feature(features, name) {
        Some(FeatureValue::StringList(values)) => Some(values),
        _ => None,
    }
}

// Amounts are exact decimals, never binary floats, so the round-dollar and
// quarter-multiple checks cannot suffer representation drift.
fn parse_amount(text: &str) -> Option<Decimal> {
    text.parse::<Decimal>().ok()
}

fn description_points(price: &str) -> Points {
    match parse_amount(price) {
        Some(amount) => (amount * Decimal::new(2, 1)).ceil().to_i64().unwrap_or(0),
        None => 0,
    }
}

/// Builds the receipt scorer with the full rule set. A field that fails to
/// parse contributes zero to the rules that depend on it; scoring itself
/// never fails.
pub fn get_rule_based_scorer() -> RuleBasedScorer {
    let mut scorer = RuleBasedScorer::new();

    // One point per ASCII letter or digit in the retailer name
    scorer.add_rule(|features| {
        let retailer = feature_str(features, FEATURE_RETAILER)?;
        let count = ALPHANUMERIC.find_iter(retailer).count() as Points;
        (count > 0).then(|| ScorerResult {
            name: "Retailer name characters".to_string(),
            score: count,
        })
    });

    // 50 points for a round dollar total
    scorer.add_rule(|features| {
        let total = parse_amount(feature_str(features, FEATURE_TOTAL)?)?;
        total.fract().is_zero().then(|| ScorerResult {
            name: "Round dollar total".to_string(),
            score: 50,
        })
    });

    // 25 points when the total is a multiple of 0.25; a round dollar amount
    // is always one, so this fires together with the rule above
    scorer.add_rule(|features| {
        let total = parse_amount(feature_str(features, FEATURE_TOTAL)?)?;
        (total % Decimal::new(25, 2)).is_zero().then(|| ScorerResult {
            name: "Quarter multiple total".to_string(),
            score: 25,
        })
    });

    // 5 points per complete pair of items
    scorer.add_rule(|features| {
        let count = feature_int(features, FEATURE_ITEM_COUNT)?;
        let score = (count / 2) * 5;
        (score > 0).then(|| ScorerResult {
            name: "Item pairs".to_string(),
            score,
        })
    });

    // ceil(price * 0.2) per item whose trimmed description length is a
    // multiple of 3; zero length counts as a multiple
    scorer.add_rule(|features| {
        let descriptions = feature_list(features, FEATURE_ITEM_DESCRIPTIONS)?;
        let prices = feature_list(features, FEATURE_ITEM_PRICES)?;
        let score: Points = descriptions
            .iter()
            .zip(prices)
            .filter(|(description, _)| description.trim().len() % 3 == 0)
            .map(|(_, price)| description_points(price))
            .sum();
        (score > 0).then(|| ScorerResult {
            name: "Item description length".to_string(),
            score,
        })
    });

    // 6 points when the day of the purchase date is odd
    scorer.add_rule(|features| {
        let text = feature_str(features, FEATURE_PURCHASE_DATE)?;
        let date = NaiveDate::parse_from_str(text, DATE_FORMAT).ok()?;
        (date.day() % 2 == 1).then(|| ScorerResult {
            name: "Odd purchase day".to_string(),
            score: 6,
        })
    });

    // 10 points for purchases from 14:00 inclusive up to 16:00 exclusive
    scorer.add_rule(|features| {
        let text = feature_str(features, FEATURE_PURCHASE_TIME)?;
        let time = NaiveTime::parse_from_str(text, TIME_FORMAT).ok()?;
        ((14..16).contains(&time.hour())).then(|| ScorerResult {
            name: "Afternoon purchase window".to_string(),
            score: 10,
        })
    });

    scorer
}
