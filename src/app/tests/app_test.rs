use crate::app::core::{init, transition, Analysis, Event, Screen};
use crate::app::tests::fixture::Fixture;
use crate::error::DetectError;

/// Runs the single effect produced by a transition synchronously and feeds
/// the completion event back through the core, the way the UI loop does.
fn run_round_trip(f: &Fixture, state: crate::app::core::State) -> crate::app::core::State {
    let (state, effects) = transition(state, Event::AnalyzePressed);
    for effect in effects {
        f.run_effect.run_effect(effect);
    }

    let done = f.event_receiver.recv().expect("no completion event");
    let (state, effects) = transition(state, done);
    assert!(effects.is_empty());
    state
}

#[test]
fn test_upload_and_analyze_end_to_end() {
    let f = Fixture::with_classifier_returning(3);

    let (state, _) = init();
    assert_eq!(state.screen, Screen::Home);
    assert!(matches!(state.analysis, Analysis::Idle));

    let (state, _) = transition(state, Event::NavigateDetect);
    let (state, _) = transition(state, Event::ImageUploaded(Fixture::leaf_upload()));

    let state = run_round_trip(&f, state);

    match state.analysis {
        Analysis::Done(label) => assert_eq!(label, "Apple___healthy"),
        other => panic!("unexpected analysis state: {:?}", other),
    }
}

#[test]
fn test_undecodable_upload_surfaces_a_decode_error() {
    let f = Fixture::with_classifier_returning(3);

    let (state, _) = init();
    let (state, _) = transition(state, Event::NavigateDetect);
    let (state, effects) = transition(state, Event::ImageUploaded(Fixture::garbage_upload()));
    assert!(effects.is_empty());

    let (state, effects) = transition(state, Event::AnalyzePressed);
    for effect in effects {
        f.run_effect.run_effect(effect);
    }

    let done = f.event_receiver.recv().expect("no completion event");
    assert!(matches!(
        done,
        Event::AnalyzeDone(Err(DetectError::ImageDecode(_)))
    ));

    // The session survives and no prediction was recorded.
    let (state, _) = transition(state, done);
    assert_eq!(state.screen, Screen::Detect);
    assert!(matches!(state.analysis, Analysis::Failed(_)));
}

#[test]
fn test_out_of_range_class_index_is_caught_by_the_label_guard() {
    let f = Fixture::with_classifier_returning(38);

    let (state, _) = init();
    let (state, _) = transition(state, Event::ImageUploaded(Fixture::leaf_upload()));

    let state = run_round_trip(&f, state);

    match state.analysis {
        Analysis::Failed(message) => assert!(message.contains("class index 38")),
        other => panic!("unexpected analysis state: {:?}", other),
    }
}
