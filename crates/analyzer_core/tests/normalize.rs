use analyzer_core::{normalize, InvalidUrl};

#[test]
fn explicit_scheme_is_preserved() {
    let target = normalize("https://example.com/page").expect("valid");
    assert_eq!(target.as_str(), "https://example.com/page");

    let target = normalize("http://example.com").expect("valid");
    assert_eq!(target.as_str(), "http://example.com");
}

#[test]
fn bare_domain_gets_https_prefix() {
    let target = normalize("example.com").expect("valid");
    assert_eq!(target.as_str(), "https://example.com");
}

#[test]
fn surrounding_whitespace_is_trimmed_before_prefixing() {
    let target = normalize("  example.com/contact  ").expect("valid");
    assert_eq!(target.as_str(), "https://example.com/contact");
}

#[test]
fn empty_input_is_rejected() {
    assert_eq!(normalize(""), Err(InvalidUrl::Empty));
    assert_eq!(normalize("   "), Err(InvalidUrl::Empty));
}

#[test]
fn garbage_input_is_rejected() {
    assert!(matches!(
        normalize("not a url"),
        Err(InvalidUrl::Unparseable(_))
    ));
}

#[test]
fn scheme_without_host_is_rejected() {
    assert!(matches!(
        normalize("https://"),
        Err(InvalidUrl::Unparseable(_))
    ));
}
