//! Property tests for the single-open accordion.

use proptest::prelude::*;

use folio::AccordionState;

fn toggle_sequence() -> impl Strategy<Value = Vec<String>> {
    let id = prop_oneof![
        Just("a".to_string()),
        Just("b".to_string()),
        Just("c".to_string()),
        "[a-z]{1,3}",
    ];
    proptest::collection::vec(id, 0..40)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: After any toggle sequence, at most one id is open and it is
    /// the one `expanded()` reports.
    #[test]
    fn property_at_most_one_open(toggles in toggle_sequence()) {
        let state = AccordionState::replay(toggles.iter().map(String::as_str));

        let open: Vec<&String> = toggles.iter().filter(|id| state.is_expanded(id)).collect();
        match state.expanded() {
            Some(id) => prop_assert!(open.iter().all(|o| o.as_str() == id)),
            None => prop_assert!(open.is_empty()),
        }
    }

    /// PROPERTY: Toggling matches a plain Option model step by step.
    #[test]
    fn property_matches_option_model(toggles in toggle_sequence()) {
        let mut state = AccordionState::new();
        let mut model: Option<String> = None;

        for id in &toggles {
            state.toggle(id);
            model = if model.as_deref() == Some(id.as_str()) {
                None
            } else {
                Some(id.clone())
            };
            prop_assert_eq!(state.expanded(), model.as_deref());
        }
    }

    /// PROPERTY: Toggling the open id twice restores the previous state.
    #[test]
    fn property_double_toggle_is_identity(toggles in toggle_sequence(), extra in "[a-z]{1,3}") {
        let before = AccordionState::replay(toggles.iter().map(String::as_str));
        let mut after = before.clone();
        after.toggle(&extra);
        after.toggle(&extra);

        // Opening `extra` closed whatever was open; a second toggle closes it
        if before.expanded().is_some() && before.expanded() != Some(extra.as_str()) {
            prop_assert_eq!(after.expanded(), None);
        } else {
            prop_assert_eq!(after, before);
        }
    }
}
