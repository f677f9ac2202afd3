use greeter_core::greeting::{self, GREETING};

/// Mirrors the call shape of a hosted function runtime: two string
/// arguments, both empty in the only invocation seen in the wild.
#[test]
fn greeting_for_empty_request_and_context() {
    let greeting: String = greeting::entry_point("", "");

    assert_eq!(greeting, "Hello World");
}

#[test]
fn greeting_is_exact() {
    let greeting: String = greeting::entry_point("", "");

    // Case, the single space and the absence of punctuation all matter.
    assert_eq!(greeting, GREETING);
    assert_ne!(greeting, "hello world");
    assert_ne!(greeting, "Hello World!");
    assert_ne!(greeting, "Hello  World");
}

#[test]
fn greeting_ignores_both_arguments() {
    let baseline: String = greeting::entry_point("", "");

    for (request, context) in [
        ("request", "context"),
        ("{\"body\":\"ping\"}", ""),
        ("", "invocation-ctx"),
        ("\u{1F980}", "\n"),
    ] {
        assert_eq!(
            greeting::entry_point(request, context),
            baseline,
            "arguments ({:?}, {:?}) changed the result",
            request,
            context
        );
    }
}

#[test]
fn greeting_is_idempotent() {
    let first: String = greeting::entry_point("", "");

    for _ in 0..100 {
        assert_eq!(greeting::entry_point("", ""), first);
    }
}
