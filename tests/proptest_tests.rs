//! Property-based tests using proptest.
//!
//! These tests verify the blob codec's round-trip and substitution
//! invariants over randomly generated dictionary literals.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use proptest::prelude::*;

use jobfix::blob;
use jobfix::report::ConvertReport;
use jobfix::{SectionKind, rename};

/// Keys the codec treats as module references, in its priority order.
const MODULE_KEYS: &[&str] = &["editModule", "OpPageModule", "module"];

/// Strategy for dictionary keys that are NOT module references.
fn plain_key_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z_][A-Za-z0-9_]{0,11}"
        .prop_filter("must not be a module key", |key| {
            !MODULE_KEYS.contains(&key.as_str())
        })
}

/// Strategy for dictionary values: printable ASCII without quotes or
/// backslashes, matching what the legacy serializer emits.
fn value_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_. {}:,]{0,20}"
}

/// Strategy for old module paths drawn from the object rename table.
fn mapped_module_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("PathScripts.PathAdaptive"),
        Just("PathScripts.PathDrilling"),
        Just("PathScripts.PathJob"),
        Just("PathScripts.PathPocketShape"),
        Just("PathScripts.PathToolController"),
        Just("PathScripts.PathWaterline"),
    ]
}

fn serialize(pairs: &[(String, String)]) -> String {
    let body = pairs
        .iter()
        .map(|(key, value)| format!("\"{key}\": \"{value}\""))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{body}}}")
}

proptest! {
    /// A dictionary without a recognized key must round-trip untouched: the
    /// returned Base64 decodes to byte-identical text.
    #[test]
    fn keyless_blob_round_trips(
        pairs in proptest::collection::vec((plain_key_strategy(), value_strategy()), 0..6)
    ) {
        let text = serialize(&pairs);
        let encoded = BASE64.encode(&text);
        let mut report = ConvertReport::default();
        let output = blob::patch(&encoded, SectionKind::ObjectData, &mut report).unwrap();
        prop_assert_eq!(
            BASE64.decode(&output).unwrap(),
            text.into_bytes(),
            "pass-through must be byte-identical"
        );
    }

    /// Substituting a mapped module preserves every other pair and the key
    /// order.
    #[test]
    fn substitution_preserves_other_pairs(
        before in proptest::collection::vec((plain_key_strategy(), value_strategy()), 0..3),
        after in proptest::collection::vec((plain_key_strategy(), value_strategy()), 0..3),
        module in mapped_module_strategy(),
    ) {
        let mut pairs = before.clone();
        pairs.push(("module".to_owned(), module.to_owned()));
        pairs.extend(after.clone());

        let encoded = BASE64.encode(serialize(&pairs));
        let mut report = ConvertReport::default();
        let output = blob::patch(&encoded, SectionKind::ObjectData, &mut report).unwrap();

        let new_path = rename::lookup(SectionKind::ObjectData, module).unwrap();
        let mut expected = before;
        expected.push(("module".to_owned(), new_path.to_owned()));
        expected.extend(after);

        prop_assert_eq!(
            BASE64.decode(&output).unwrap(),
            serialize(&expected).into_bytes()
        );
        prop_assert!(!report.has_warnings());
    }

    /// Text that is not brace-delimited always passes through unchanged and
    /// silently, whatever it contains.
    #[test]
    fn non_dictionary_text_passes_through(text in "[ -~]{0,40}") {
        prop_assume!(!(text.starts_with('{') && text.ends_with('}')));
        let encoded = BASE64.encode(&text);
        let mut report = ConvertReport::default();
        let output = blob::patch(&encoded, SectionKind::ViewProviderData, &mut report).unwrap();
        prop_assert_eq!(&output, &encoded);
        prop_assert!(!report.has_warnings());
    }
}
