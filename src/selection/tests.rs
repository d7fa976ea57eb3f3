//! Tests for payment requirement selection

use super::*;
use crate::types::networks::{
    BASE_MAINNET, BASE_SEPOLIA, KAIA_KAIROS, KAIA_MAINNET, SOLANA_DEVNET, SOLANA_MAINNET,
};

fn requirement(network: &str) -> PaymentRequirements {
    PaymentRequirements::exact(network)
        .with_pay_to("0x209693Bc6afc0C5328bA36FaF03C514EF312287C")
        .with_term("amount", "10000")
}

#[test]
fn test_normalize_single_requirement() {
    let single = requirement(BASE_MAINNET);
    let normalized = normalize_payment_requirements(single.clone());

    assert_eq!(normalized, vec![single]);
}

#[test]
fn test_normalize_list_is_unchanged() {
    let list = vec![
        requirement(SOLANA_MAINNET),
        requirement(BASE_MAINNET),
        requirement("eip155:137"),
    ];

    assert_eq!(normalize_payment_requirements(list.clone()), list);
    assert_eq!(normalize_payment_requirements(list.as_slice()), list);
    assert!(normalize_payment_requirements(Vec::<PaymentRequirements>::new()).is_empty());
}

#[test]
fn test_preferred_networks() {
    assert_eq!(
        get_preferred_networks(false),
        &[BASE_MAINNET, KAIA_MAINNET, SOLANA_MAINNET]
    );
    assert_eq!(
        get_preferred_networks(true),
        &[BASE_SEPOLIA, KAIA_KAIROS, SOLANA_DEVNET]
    );
}

#[test]
fn test_choose_single_requirement_regardless_of_network() {
    for testnet in [true, false] {
        let single = requirement("cosmos:cosmoshub-4");
        let chosen = choose_payment_requirement(single.clone(), testnet).unwrap();
        assert_eq!(chosen, single);
    }
}

#[test]
fn test_choose_evm_before_solana_devnet() {
    let offered = vec![requirement(SOLANA_DEVNET), requirement(BASE_SEPOLIA)];

    let chosen = choose_payment_requirement(offered, true).unwrap();
    assert_eq!(chosen.network, BASE_SEPOLIA);
}

#[test]
fn test_choose_follows_preference_not_offer_order() {
    let offered = vec![
        requirement(SOLANA_MAINNET),
        requirement(KAIA_MAINNET),
        requirement(BASE_MAINNET),
    ];
    assert_eq!(
        choose_payment_requirement(offered.clone(), false)
            .unwrap()
            .network,
        BASE_MAINNET
    );

    let without_base = offered[..2].to_vec();
    assert_eq!(
        choose_payment_requirement(without_base, false)
            .unwrap()
            .network,
        KAIA_MAINNET
    );
}

#[test]
fn test_choose_ignores_other_mode() {
    // Mainnet offers are not preferred in testnet mode
    let offered = vec![requirement("eip155:137"), requirement(BASE_MAINNET)];

    let chosen = choose_payment_requirement(offered, true).unwrap();
    assert_eq!(chosen.network, "eip155:137");
}

#[test]
fn test_choose_falls_back_to_first() {
    let offered = vec![
        requirement("eip155:43114"),
        requirement("eip155:137"),
        requirement("eip155:42161"),
    ];

    let chosen = choose_payment_requirement(offered.clone(), false).unwrap();
    assert_eq!(chosen, offered[0]);
}

#[test]
fn test_choose_first_of_duplicate_networks() {
    let first = requirement(BASE_SEPOLIA).with_term("amount", "1");
    let second = requirement(BASE_SEPOLIA).with_term("amount", "2");

    let chosen = choose_payment_requirement(vec![first.clone(), second], true).unwrap();
    assert_eq!(chosen, first);
}

#[test]
fn test_choose_empty_input() {
    let result = choose_payment_requirement(Vec::<PaymentRequirements>::new(), true);
    assert!(matches!(result, Err(X402Error::NoPaymentRequirements)));
}

#[test]
fn test_select_preferred_with_custom_order() {
    let offered = vec![requirement(BASE_MAINNET), requirement(SOLANA_MAINNET)];
    let preferred = vec![SOLANA_MAINNET.to_string(), BASE_MAINNET.to_string()];

    let chosen = select_preferred(&offered, &preferred).unwrap();
    assert_eq!(chosen.network, SOLANA_MAINNET);
    assert!(select_preferred::<&str>(&[], &[]).is_none());
}

#[test]
fn test_input_from_json_response_body() {
    let input = RequirementsInput::from_json(
        r#"{
            "x402Version": 2,
            "error": "Payment required",
            "accepts": [
                {"scheme": "exact", "network": "solana:EtWTRABZaYq6iMfeYKouRu166VU2xqa1", "amount": "1000"},
                {"scheme": "exact", "network": "eip155:84532", "amount": "1000"}
            ]
        }"#,
    )
    .unwrap();

    assert_eq!(input.len(), 2);
    let chosen = choose_payment_requirement(input, true).unwrap();
    assert_eq!(chosen.network, BASE_SEPOLIA);
    assert_eq!(chosen.term("amount").unwrap(), "1000");
}

#[test]
fn test_input_from_json_array_and_object() {
    let many = RequirementsInput::from_json(
        r#"[{"scheme": "exact", "network": "eip155:8453"}, {"network": "eip155:8217"}]"#,
    )
    .unwrap();
    assert!(matches!(many, RequirementsInput::Many(ref list) if list.len() == 2));

    let one = RequirementsInput::from_json(
        r#"{"scheme": "exact", "network": "eip155:8453", "payTo": "0xabc", "resource": "https://example.com"}"#,
    )
    .unwrap();
    let normalized = normalize_payment_requirements(one);
    assert_eq!(normalized.len(), 1);
    assert_eq!(normalized[0].pay_to(), Some("0xabc"));
    assert_eq!(
        normalized[0].term("resource").unwrap(),
        "https://example.com"
    );

    let empty = RequirementsInput::from_json("[]").unwrap();
    assert!(empty.is_empty());
}

#[test]
fn test_input_from_json_rejects_garbage() {
    assert!(matches!(
        RequirementsInput::from_json(r#"{"scheme": "exact"}"#),
        Err(X402Error::InvalidPaymentRequirements { .. })
    ));
    assert!(matches!(
        RequirementsInput::from_json("42"),
        Err(X402Error::InvalidPaymentRequirements { .. })
    ));
    assert!(matches!(
        RequirementsInput::from_json("not json"),
        Err(X402Error::Json(_))
    ));
}

#[test]
fn test_requirement_round_trips_unknown_terms() {
    let json = r#"{"scheme":"exact","network":"eip155:8453","amount":"5","extra":{"name":"USDC"}}"#;
    let requirements: PaymentRequirements = serde_json::from_str(json).unwrap();

    assert_eq!(requirements.term("extra").unwrap()["name"], "USDC");
    let value = serde_json::to_value(&requirements).unwrap();
    assert_eq!(value, serde_json::from_str::<serde_json::Value>(json).unwrap());
}

#[test]
fn test_input_from_json_keeps_terms_of_any_shape() {
    for json in [
        r#"[{"network": "eip155:8453", "maxTimeoutSeconds": "60"}]"#,
        r#"[{"network": "eip155:8453", "maxTimeoutSeconds": 5000000000}]"#,
        r#"[{"network": "eip155:8453", "asset": {"address": "0x1"}}]"#,
        r#"[{"network": "eip155:8453", "scheme": 7, "payTo": null}]"#,
    ] {
        let input = RequirementsInput::from_json(json).unwrap();
        let chosen = choose_payment_requirement(input, false).unwrap();
        assert_eq!(chosen.network, BASE_MAINNET, "{json}");
    }

    let input = RequirementsInput::from_json(
        r#"[{"network": "eip155:8453", "asset": {"address": "0x1"}, "scheme": 7}]"#,
    )
    .unwrap();
    let chosen = choose_payment_requirement(input, false).unwrap();
    assert_eq!(chosen.term("asset").unwrap()["address"], "0x1");
    assert_eq!(chosen.asset(), None);
    assert_eq!(chosen.scheme(), None);
}

#[test]
fn test_requirement_round_trips_null_terms() {
    let json = r#"{"scheme":"exact","network":"eip155:8453","extra":null,"asset":null,"maxTimeoutSeconds":"60"}"#;
    let requirements: PaymentRequirements = serde_json::from_str(json).unwrap();

    assert_eq!(requirements.term("extra"), Some(&serde_json::Value::Null));
    let value = serde_json::to_value(&requirements).unwrap();
    assert_eq!(value, serde_json::from_str::<serde_json::Value>(json).unwrap());
}

#[test]
fn test_parse_json_and_base64_header() {
    let response = PaymentRequirementsResponse::new(vec![
        requirement(SOLANA_DEVNET),
        requirement(BASE_SEPOLIA),
    ]);
    let header = response.to_base64().unwrap();

    let from_header = RequirementsInput::parse(&format!("  {header}\n")).unwrap();
    assert_eq!(from_header.len(), 2);
    assert_eq!(
        choose_payment_requirement(from_header, true).unwrap().network,
        BASE_SEPOLIA
    );

    let from_json = RequirementsInput::parse(&serde_json::to_string(&response).unwrap()).unwrap();
    assert_eq!(from_json, RequirementsInput::Many(response.accepts));

    assert!(matches!(
        RequirementsInput::parse("not base64!!"),
        Err(X402Error::Base64(_))
    ));
}
