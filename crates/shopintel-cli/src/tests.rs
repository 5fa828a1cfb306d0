use shopintel_scraper::BrandInsights;

use super::*;

#[test]
fn parses_fetch_command() {
    let cli = Cli::try_parse_from(["shopintel-cli", "fetch", "https://shop.example.com"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Fetch {
            ref url,
            pretty: false,
            timeout_secs: None,
        } if url == "https://shop.example.com"
    ));
}

#[test]
fn parses_fetch_flags() {
    let cli = Cli::try_parse_from([
        "shopintel-cli",
        "fetch",
        "https://shop.example.com",
        "--pretty",
        "--timeout-secs",
        "30",
    ])
    .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Fetch {
            pretty: true,
            timeout_secs: Some(30),
            ..
        }
    ));
}

#[test]
fn zero_timeout_is_rejected() {
    let result = Cli::try_parse_from([
        "shopintel-cli",
        "fetch",
        "https://shop.example.com",
        "--timeout-secs",
        "0",
    ]);
    assert!(result.is_err());
}

#[test]
fn fetch_requires_url() {
    assert!(Cli::try_parse_from(["shopintel-cli", "fetch"]).is_err());
}

#[test]
fn no_command_is_an_error() {
    assert!(Cli::try_parse_from(["shopintel-cli"]).is_err());
}

#[test]
fn write_insights_compact_is_single_line() {
    let mut buf = Vec::new();
    fetch::write_insights(&mut buf, &BrandInsights::empty("https://a.example"), false)
        .expect("write");
    let text = String::from_utf8(buf).expect("utf8");
    assert_eq!(text.lines().count(), 1);
    let json: serde_json::Value = serde_json::from_str(&text).expect("json");
    assert_eq!(json["website_url"], "https://a.example");
    assert_eq!(json["faqs"], serde_json::json!([]));
}

#[test]
fn write_insights_pretty_is_multiline() {
    let mut buf = Vec::new();
    fetch::write_insights(&mut buf, &BrandInsights::empty("https://a.example"), true)
        .expect("write");
    let text = String::from_utf8(buf).expect("utf8");
    assert!(text.lines().count() > 1);
}
