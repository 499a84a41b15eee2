use processing::model::{FeatureValue, Points, Processible, find_feature};
use processing::scorers::Scorer;

use rewards::model::{Item, Receipt};
use rewards::rule_based_scorer::get_rule_based_scorer;

fn receipt(
    retailer: &str,
    date: &str,
    time: &str,
    total: &str,
    items: Vec<(&str, &str)>,
) -> Receipt {
    Receipt {
        retailer: retailer.to_string(),
        purchase_date: date.to_string(),
        purchase_time: time.to_string(),
        total: total.to_string(),
        items: items
            .into_iter()
            .map(|(short_description, price)| Item {
                short_description: short_description.to_string(),
                price: price.to_string(),
            })
            .collect(),
    }
}

async fn score(receipt: &Receipt) -> Points {
    let scorer = get_rule_based_scorer();
    let results = scorer.score(receipt.extract_features()).await;
    results.iter().map(|r| r.score).sum()
}

#[tokio::test]
async fn target_receipt_combines_retailer_item_and_day_rules() {
    // 6 retailer characters + 5 for one pair + 3 + 3 description bonuses
    // (ceil(12.25 * 0.2), ceil(12.00 * 0.2)) + 6 for the odd day; the total
    // 35.35 is neither round nor a quarter multiple and 13:01 is outside
    // the afternoon window.
    let receipt = receipt(
        "Target",
        "2022-01-01",
        "13:01",
        "35.35",
        vec![
            ("Emils Cheese Pizza", "12.25"),
            ("Klarbrunn 12-PK 12 FL OZ", "12.00"),
        ],
    );

    assert_eq!(score(&receipt).await, 23);
}

#[tokio::test]
async fn round_dollar_total_earns_both_total_bonuses() {
    // 9.00 is a whole dollar amount and therefore also a quarter multiple
    let receipt = receipt("", "2022-01-02", "13:01", "9.00", vec![]);

    assert_eq!(score(&receipt).await, 75);
}

#[tokio::test]
async fn quarter_multiple_without_round_dollar() {
    let receipt = receipt("", "2022-01-02", "13:01", "9.25", vec![]);

    assert_eq!(score(&receipt).await, 25);
}

#[tokio::test]
async fn afternoon_window_receipt() {
    // 14 retailer characters ('&' and spaces do not count) + 50 + 25 for the
    // 10.00 total + 10 for the 14:33 purchase time; day 20 is even.
    let receipt = receipt("M&M Corner Market", "2022-03-20", "14:33", "10.00", vec![]);

    assert_eq!(score(&receipt).await, 99);
}

#[tokio::test]
async fn window_is_inclusive_at_fourteen_exclusive_at_sixteen() {
    let base = |time: &str| receipt("R", "2022-01-02", time, "1.01", vec![]);

    assert_eq!(score(&base("14:00")).await, 11);
    assert_eq!(score(&base("15:59")).await, 11);
    assert_eq!(score(&base("16:00")).await, 1);
    assert_eq!(score(&base("13:59")).await, 1);
}

#[tokio::test]
async fn zero_length_trimmed_description_earns_price_bonus() {
    // Whitespace-only description trims to length zero, a multiple of 3
    let receipt = receipt("", "2022-01-02", "13:01", "1.01", vec![("   ", "2.00")]);

    assert_eq!(score(&receipt).await, 1);
}

#[tokio::test]
async fn odd_remainder_item_earns_no_pair_bonus() {
    // Three items make one pair; descriptions of length 1 earn nothing
    let receipt = receipt(
        "",
        "2022-01-02",
        "13:01",
        "1.01",
        vec![("a", "1.00"), ("b", "1.00"), ("c", "1.00")],
    );

    assert_eq!(score(&receipt).await, 5);
}

#[tokio::test]
async fn unparseable_total_earns_no_total_bonuses() {
    let receipt = receipt("ab", "2022-01-02", "13:01", "not-a-number", vec![]);

    assert_eq!(score(&receipt).await, 2);
}

#[tokio::test]
async fn unparseable_price_contributes_nothing() {
    // "abc" has a qualifying description but a garbage price; "def" earns
    // ceil(5.00 * 0.2) = 1; the two items form a pair.
    let receipt = receipt(
        "",
        "2022-01-02",
        "13:01",
        "1.01",
        vec![("abc", "oops"), ("def", "5.00")],
    );

    assert_eq!(score(&receipt).await, 6);
}

#[tokio::test]
async fn unparseable_date_and_time_contribute_nothing() {
    let receipt = receipt("a", "01/02/2022", "2 pm", "1.01", vec![]);

    assert_eq!(score(&receipt).await, 1);
}

#[tokio::test]
async fn non_ascii_retailer_characters_do_not_count() {
    let receipt = receipt("Café & Ale 42", "2022-01-02", "13:01", "1.01", vec![]);

    assert_eq!(score(&receipt).await, 8);
}

#[tokio::test]
async fn empty_receipt_scores_zero() {
    let receipt = Receipt::default();

    assert_eq!(score(&receipt).await, 0);
}

#[tokio::test]
async fn scoring_is_deterministic() {
    let receipt = receipt(
        "Target",
        "2022-01-01",
        "14:01",
        "35.00",
        vec![("Gatorade", "2.25"), ("Gatorade", "2.25")],
    );

    let first = score(&receipt).await;
    let second = score(&receipt).await;

    assert_eq!(first, second);
    assert!(first >= 0);
}

#[test]
fn receipt_features_stay_index_aligned() {
    let receipt = receipt(
        "Target",
        "2022-01-01",
        "13:01",
        "35.35",
        vec![("Pepsi", "1.25"), ("Dasani", "1.40")],
    );

    let features = receipt.extract_features();

    assert_eq!(
        find_feature(&features, "item_count"),
        Some(&FeatureValue::Int(2))
    );
    assert_eq!(
        find_feature(&features, "item_descriptions"),
        Some(&FeatureValue::StringList(vec![
            "Pepsi".to_string(),
            "Dasani".to_string(),
        ]))
    );
    assert_eq!(
        find_feature(&features, "item_prices"),
        Some(&FeatureValue::StringList(vec![
            "1.25".to_string(),
            "1.40".to_string(),
        ]))
    );
    assert_eq!(
        find_feature(&features, "retailer"),
        Some(&FeatureValue::String("Target".to_string()))
    );
}
