//! Property tests for raw string literal emission.

use proptest::prelude::*;

use assetgen::domain::value_objects::{choose_delimiter, DelimiterChoice, Identifier};
use assetgen::{AssetEntry, EmbeddedAsset, GeneratedHeader, HeaderTemplate};

/// Read a raw string literal back the way a C++ compiler does: the body
/// ends at the first closing sequence.
fn parse_raw_literal(literal: &str) -> Option<(String, String)> {
    let rest = literal.strip_prefix("R\"")?;
    let open = rest.find('(')?;
    let delimiter = &rest[..open];
    let body = &rest[open + 1..];
    let close = format!("){}\"", delimiter);
    let end = body.find(&close)?;
    Some((delimiter.to_string(), body[..end].to_string()))
}

fn svgish() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<String>(),
        proptest::string::string_regex("<svg>[a-z ()\"<>!0-9]{0,40}</svg>\n?").unwrap(),
        "[)<!>\"0-9]{0,24}",
    ]
}

fn entry() -> AssetEntry {
    AssetEntry::new(
        Identifier::parse("ios").unwrap(),
        Identifier::parse("logo").unwrap(),
        Identifier::parse("svg").unwrap(),
        "logo.svg",
        "out/ios/logo_svg.gen.h",
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A wrapped payload parses back to exactly the payload.
    #[test]
    fn property_literal_round_trips(payload in svgish()) {
        let DelimiterChoice::Chosen(delimiter) = choose_delimiter(&payload) else {
            return Ok(());
        };
        let literal = delimiter.wrap(&payload);

        let (parsed_delimiter, body) = parse_raw_literal(&literal)
            .ok_or_else(|| TestCaseError::fail("literal did not parse"))?;
        prop_assert_eq!(parsed_delimiter, delimiter.as_str());
        prop_assert_eq!(body, payload);
    }

    /// PROPERTY: The header's last statement embeds the payload unchanged.
    #[test]
    fn property_header_ends_with_declaration(payload in svgish()) {
        let entry = entry();
        let asset = EmbeddedAsset::new(entry.constant_name(), payload.clone());
        let Ok(header) = GeneratedHeader::compose(&entry, &asset, &HeaderTemplate::default()) else {
            return Ok(());
        };

        let prefix = "inline constexpr const char *_ios_logo_svg = ";
        let start = header.content().find(prefix)
            .ok_or_else(|| TestCaseError::fail("declaration missing"))?;
        let declaration = &header.content()[start + prefix.len()..];
        let literal = declaration.strip_suffix(";\n")
            .ok_or_else(|| TestCaseError::fail("declaration not terminated"))?;

        let (_, body) = parse_raw_literal(literal)
            .ok_or_else(|| TestCaseError::fail("literal did not parse"))?;
        prop_assert_eq!(body, payload);
    }
}
