//! Integration tests for the session flow.
use bw_core::LocationId;
use bw_session::{ActionRequest, ErrorKind, Phase, SessionStore, Snapshot};
use proptest::prelude::*;

const KINDS: [&str; 5] = ["move", "investigate", "verify", "hunt", "complete_action"];

fn request(kind: usize, target: usize) -> ActionRequest {
    let request = ActionRequest::new(KINDS[kind]);
    match KINDS[kind] {
        "move" => request.with_target(LocationId::ALL[target].code()),
        "investigate" => request.with_note(format!("whispers #{target}")),
        _ => request,
    }
}

/// Everything except the wall-clock parts of a snapshot.
fn replayable(s: &Snapshot) -> serde_json::Value {
    let mut json = serde_json::to_value(s).unwrap();
    let obj = json.as_object_mut().unwrap();
    obj.remove("id");
    obj.remove("created_at");
    let lines: Vec<_> = s.log.iter().map(|e| e.text.clone()).collect();
    obj.insert("log".into(), serde_json::json!(lines));
    json
}

#[test]
fn full_day_cycle() {
    let store = SessionStore::new();
    let (id, start) = store.create_session("The Moon Hag of Sockburn", "Mercy", Some(42)).unwrap();
    assert_eq!(start.phase, Phase::Actions);

    store
        .dispatch_action(id, &ActionRequest::new("investigate").with_note("a shriek at dusk"))
        .unwrap();
    let after_verify = store.dispatch_action(id, &ActionRequest::new("verify")).unwrap();
    assert_eq!(after_verify.actions_remaining, 0);
    assert_eq!(
        after_verify.inquisitor.knowledge,
        10 * after_verify.secrets.len() as u32
    );

    let err = store
        .dispatch_action(id, &ActionRequest::new("move").with_target("II"))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    let next = store
        .dispatch_action(id, &ActionRequest::new("complete_action"))
        .unwrap();
    assert_eq!(next.day, 2);
    assert_eq!(next.actions_remaining, 2);
    assert_eq!(next.movements.len(), 1);
    assert_eq!(next.movements[0].day, 2);
    assert_eq!(next.beast.location, next.movements[0].location);
}

proptest! {
    #[test]
    fn random_play_keeps_invariants(
        seed in any::<u64>(),
        steps in proptest::collection::vec((0usize..5, 0usize..8), 1..40),
    ) {
        let store = SessionStore::new();
        let (id, _) = store.create_session("Beast", "Mercy", Some(seed)).unwrap();
        for (kind, target) in steps {
            let before = store.get_session(id).unwrap();
            match store.dispatch_action(id, &request(kind, target)) {
                Ok(after) => {
                    prop_assert!(after.actions_remaining <= 2);
                    prop_assert!(after.inquisitor.health.value() <= 100);
                    prop_assert!(after.day >= before.day);
                }
                Err(_) => {
                    // A rejected action leaves no trace.
                    let after = store.get_session(id).unwrap();
                    prop_assert_eq!(replayable(&before), replayable(&after));
                }
            }
        }
    }

    #[test]
    fn two_stores_replay_the_same_game(
        seed in any::<u64>(),
        steps in proptest::collection::vec((0usize..5, 0usize..8), 1..30),
    ) {
        let play = || {
            let store = SessionStore::new();
            let (id, _) = store.create_session("Beast", "Mercy", Some(seed)).unwrap();
            for (kind, target) in &steps {
                let _ = store.dispatch_action(id, &request(*kind, *target));
            }
            replayable(&store.get_session(id).unwrap())
        };
        prop_assert_eq!(play(), play());
    }
}
