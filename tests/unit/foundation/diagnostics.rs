use super::*;

#[test]
fn add_once_dedups_by_key() {
    let mut d = Diagnostics::new();
    assert!(d.add_once("k", DiagnosticLevel::Warn, "first", None));
    assert!(!d.add_once("k", DiagnosticLevel::Error, "second", None));
    assert!(d.warn_once("other", "x"));

    assert_eq!(d.len(), 2);
    let events = d.into_events();
    assert_eq!(events[0].message, "first");
    assert_eq!(events[0].level, DiagnosticLevel::Warn);
    assert_eq!(events[1].key, "other");
}

#[test]
fn merge_keeps_first_report() {
    let mut a = Diagnostics::new();
    a.warn_once("shared", "from a");

    let mut b = Diagnostics::new();
    b.warn_once("shared", "from b");
    b.add_once(
        "only_b",
        DiagnosticLevel::Error,
        "boom",
        Some("detail".to_owned()),
    );

    a.merge(b);
    assert_eq!(a.len(), 2);
    assert!(a.contains("only_b"));
    assert_eq!(a.iter().next().unwrap().message, "from a");
}
