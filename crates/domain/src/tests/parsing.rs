// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    ContactFields, ParserRegistry, STANDARD_STRATEGY, SeatClassRegistry, SeatCounts,
    contact_parsers, parse_contact, seat_layout_parsers,
};
use std::sync::Arc;

fn counts_by_name(counts: &SeatCounts) -> Vec<(String, i64)> {
    counts
        .iter()
        .map(|(class, count)| (class.name().to_string(), *count))
        .collect()
}

#[test]
fn test_parse_contact_splits_three_fields() {
    let fields: ContactFields = parse_contact("user@example.com|+84123456789|123 Street").unwrap();
    assert_eq!(
        fields,
        ContactFields::new("user@example.com", "+84123456789", "123 Street")
    );
}

#[test]
fn test_parse_contact_keeps_empty_address() {
    let fields: ContactFields = parse_contact("user@example.com|0123456789|").unwrap();
    assert_eq!(fields.address, "");
}

#[test]
fn test_parse_contact_rejects_missing_fields() {
    assert!(parse_contact("").is_none());
    assert!(parse_contact("user@example.com").is_none());
    assert!(parse_contact("user@example.com|0123456789").is_none());
    assert!(parse_contact("|0123456789|street").is_none());
    assert!(parse_contact("user@example.com||street").is_none());
}

#[test]
fn test_standard_layout_parser_resolves_names_and_codes() {
    let classes: Arc<SeatClassRegistry> = Arc::new(SeatClassRegistry::new());
    let parsers: ParserRegistry<SeatCounts> = seat_layout_parsers(classes);

    let counts: SeatCounts = parsers
        .parse(STANDARD_STRATEGY, "economy:100,B:20,FIRST:10")
        .unwrap();
    assert_eq!(
        counts_by_name(&counts),
        vec![
            (String::from("BUSINESS"), 20),
            (String::from("ECONOMY"), 100),
            (String::from("FIRST"), 10),
        ]
    );
}

#[test]
fn test_standard_layout_parser_skips_unknown_and_malformed_entries() {
    let classes: Arc<SeatClassRegistry> = Arc::new(SeatClassRegistry::new());
    let parsers: ParserRegistry<SeatCounts> = seat_layout_parsers(classes);

    let counts: SeatCounts = parsers
        .parse(STANDARD_STRATEGY, "PREMIUM:30,ECONOMY:abc,BUSINESS,FIRST:-2")
        .unwrap();
    assert_eq!(counts_by_name(&counts), vec![(String::from("FIRST"), -2)]);
}

#[test]
fn test_standard_layout_parser_sees_runtime_registrations() {
    let classes: Arc<SeatClassRegistry> = Arc::new(SeatClassRegistry::new());
    let parsers: ParserRegistry<SeatCounts> = seat_layout_parsers(Arc::clone(&classes));

    let before: SeatCounts = parsers.parse(STANDARD_STRATEGY, "PREMIUM:30").unwrap();
    assert!(before.is_empty());

    classes.register_seat_class("PREMIUM", "P").unwrap();
    let after: SeatCounts = parsers.parse(STANDARD_STRATEGY, "PREMIUM:30").unwrap();
    assert_eq!(counts_by_name(&after), vec![(String::from("PREMIUM"), 30)]);
}

#[test]
fn test_unknown_strategy_falls_back_to_standard() {
    let parsers: ParserRegistry<ContactFields> = contact_parsers();
    assert!(!parsers.contains("semicolon"));

    let fields: ContactFields = parsers
        .parse("semicolon", "user@example.com|0123456789|Hanoi")
        .unwrap();
    assert_eq!(fields.address, "Hanoi");
}

#[test]
fn test_registered_strategy_is_selected_by_name() {
    let parsers: ParserRegistry<ContactFields> = contact_parsers();
    parsers.register("semicolon", |input: &str| -> Option<ContactFields> {
        let parts: Vec<&str> = input.splitn(3, ';').collect();
        match parts.as_slice() {
            [email, phone, address] => Some(ContactFields::new(email, phone, address)),
            _ => None,
        }
    });

    assert_eq!(parsers.names(), vec!["semicolon", "standard"]);
    let fields: ContactFields = parsers
        .parse("semicolon", "user@example.com;0123456789;Hanoi")
        .unwrap();
    assert_eq!(fields.phone, "0123456789");
    assert!(parsers.parse(STANDARD_STRATEGY, "user@example.com;0123456789;Hanoi").is_none());
}
