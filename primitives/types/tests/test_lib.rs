use serde_json::json;
use types::*;

#[test]
fn test_key_entry_parses_from_written_form() {
    let raw = json!([{
        "code": "NFT9F00AA12",
        "description": "Members-only lions.",
        "project_name": "Lazy Lions",
        "category": "CATEGORY_A_ANIMAL_APE",
        "total_supply": "Unknown",
        "contract_address": "",
        "official_url": "https://lazylionsnft.com"
    }]);

    let entries: Vec<AnonymizedEntry> = serde_json::from_value(raw).expect("key should parse");
    assert_eq!(entries.len(), 1);
    let entry = &entries[0];
    assert_eq!(entry.code, "NFT9F00AA12");
    assert_eq!(entry.record.project_name, "Lazy Lions");
    assert_eq!(entry.record.total_supply, None);
    assert_eq!(entry.record.contract_address, None);
    assert_eq!(entry.record.official_url.as_deref(), Some("https://lazylionsnft.com"));
    assert_eq!(entry.record.opensea_url, None);
}

#[test]
fn test_category_round_trips_through_json() {
    let category = Category::new("CATEGORY_B_FANTASY_ART", ["Azuki", "Wizards & Dragons Game"]);
    let text = serde_json::to_string(&category).expect("serialize");
    let back: Category = serde_json::from_str(&text).expect("deserialize");
    assert_eq!(back, category);
    assert_eq!(back.indexed().last(), Some((2, "Wizards & Dragons Game")));
}
