use trace_splice::chain::{attach, chain, chain_state, ChainState};
use trace_splice::host::{SandboxContext, SandboxError};
use trace_splice::registry::BoundaryRegistry;
use trace_splice::snapshot;
use trace_splice::traits::HiddenSlots;
use trace_splice::types::TraceNode;

#[test]
fn state_machine_progresses_unseen_attached_chained() {
    let registry = BoundaryRegistry::new();
    let mut error = SandboxError::new("Error", "boom");

    assert_eq!(chain_state(&error, &registry), ChainState::Unseen);

    chain(&mut error, &registry, snapshot!["s1.js":1:1 => "first"]);
    assert_eq!(chain_state(&error, &registry), ChainState::Attached);

    chain(&mut error, &registry, snapshot!["s2.js":2:2 => "second"]);
    assert_eq!(chain_state(&error, &registry), ChainState::Chained);

    chain(&mut error, &registry, snapshot!["s3.js":3:3 => "third"]);
    assert_eq!(chain_state(&error, &registry), ChainState::Chained);
}

#[test]
fn each_crossing_wraps_one_level_deeper() {
    let registry = BoundaryRegistry::new();
    let mut error = SandboxError::new("Error", "boom");

    chain(&mut error, &registry, snapshot!["s1.js":1:1]);
    chain(&mut error, &registry, snapshot!["s2.js":2:2]);
    chain(&mut error, &registry, snapshot!["s3.js":3:3]);

    let node = error.hidden_get(registry.key()).unwrap();
    assert_eq!(node.segments(), 3);

    // Right-leaning: Pair(newest, Pair(middle, oldest)).
    match node {
        TraceNode::Pair { newer, older } => {
            assert_eq!(**newer, TraceNode::snapshot(snapshot!["s3.js":3:3]));
            assert!(older.is_pair());
        }
        other => panic!("expected a pair, got {other:?}"),
    }
}

#[test]
fn attach_then_chain_matches_two_chains() {
    let registry = BoundaryRegistry::new();
    let s1 = snapshot!["s1.js":1:1 => "first"];
    let s2 = snapshot!["s2.js":2:2 => "second"];

    let mut via_attach = SandboxError::new("Error", "boom");
    attach(&mut via_attach, &registry, s1.clone());
    chain(&mut via_attach, &registry, s2.clone());

    let mut via_chain = SandboxError::new("Error", "boom");
    chain(&mut via_chain, &registry, s1);
    chain(&mut via_chain, &registry, s2);

    assert_eq!(
        via_attach.hidden_get(registry.key()),
        via_chain.hidden_get(registry.key())
    );
}

#[test]
fn chain_recovers_a_runtime_native_stack_as_the_older_leaf() {
    let registry = BoundaryRegistry::new();
    let native = snapshot!["thrown.js":5:5 => "throwing"];
    let mut error = SandboxError::new("Error", "boom").with_native_stack(native.clone());

    chain(&mut error, &registry, snapshot!["outer.js":10:1 => "run"]);

    assert_eq!(chain_state(&error, &registry), ChainState::Chained);
    let expected = TraceNode::pair(
        TraceNode::snapshot(snapshot!["outer.js":10:1 => "run"]),
        TraceNode::snapshot(native),
    );
    assert_eq!(error.hidden_get(registry.key()), Some(&expected));
}

#[test]
fn chain_recovers_a_flattened_text_stack_as_the_older_leaf() {
    let registry = BoundaryRegistry::new();
    let mut error = SandboxError::new("TypeError", "x is not a function")
        .with_plain_stack("TypeError: x is not a function\n    at foo:1:1");

    chain(&mut error, &registry, snapshot!["outer.js":10:1 => "run"]);

    let expected = TraceNode::pair(
        TraceNode::snapshot(snapshot!["outer.js":10:1 => "run"]),
        TraceNode::text("TypeError: x is not a function\n    at foo:1:1"),
    );
    assert_eq!(error.hidden_get(registry.key()), Some(&expected));
}

#[test]
fn native_stack_wins_over_a_flattened_text_stack() {
    let registry = BoundaryRegistry::new();
    let native = snapshot!["thrown.js":5:5 => "throwing"];
    let mut error = SandboxError::new("Error", "boom")
        .with_native_stack(native.clone())
        .with_plain_stack("Error: boom\n    at stale:1:1");

    chain(&mut error, &registry, snapshot!["outer.js":10:1 => "run"]);

    match error.hidden_get(registry.key()).unwrap() {
        TraceNode::Pair { older, .. } => {
            assert_eq!(**older, TraceNode::snapshot(native));
        }
        other => panic!("expected a pair, got {other:?}"),
    }
}

#[test]
fn chain_on_a_bare_error_degrades_to_attach() {
    let registry = BoundaryRegistry::new();
    let mut error = SandboxError::new("Error", "boom");

    chain(&mut error, &registry, snapshot!["outer.js":10:1 => "run"]);

    assert_eq!(chain_state(&error, &registry), ChainState::Attached);
    assert_eq!(
        error.hidden_get(registry.key()),
        Some(&TraceNode::snapshot(snapshot!["outer.js":10:1 => "run"]))
    );
}

#[test]
fn context_forwarding_matches_the_free_functions() {
    let context = SandboxContext::new();
    let mut error = SandboxError::new("Error", "boom");

    assert_eq!(context.chain_state(&error), ChainState::Unseen);
    context.attach(&mut error, snapshot!["s1.js":1:1]);
    assert_eq!(context.chain_state(&error), ChainState::Attached);
    context.chain(&mut error, snapshot!["s2.js":2:2]);
    assert_eq!(context.chain_state(&error), ChainState::Chained);

    assert_eq!(
        error.hidden_get(context.registry().key()).map(TraceNode::segments),
        Some(2)
    );
}

#[test]
fn chaining_never_disturbs_previously_captured_segments() {
    let registry = BoundaryRegistry::new();
    let mut error = SandboxError::new("Error", "boom");

    chain(&mut error, &registry, snapshot!["s1.js":1:1 => "first"]);
    let after_one = error.hidden_get(registry.key()).cloned().unwrap();

    chain(&mut error, &registry, snapshot!["s2.js":2:2 => "second"]);
    match error.hidden_get(registry.key()).unwrap() {
        TraceNode::Pair { older, .. } => assert_eq!(**older, after_one),
        other => panic!("expected a pair, got {other:?}"),
    }
}
