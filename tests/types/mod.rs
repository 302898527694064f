use trace_splice::snapshot;
use trace_splice::types::{Frame, TraceNode, TraceSnapshot};

#[test]
fn frame_constructors_carry_provenance() {
    let named = Frame::named("f", "a.js", 3, 7);
    assert_eq!(named.function_name(), "f");
    assert_eq!(named.script_name(), "a.js");
    assert_eq!(named.line(), 3);
    assert_eq!(named.column(), 7);
    assert!(!named.is_eval());
    assert_eq!(named.script_id(), None);

    let anon = Frame::anonymous("b.js", 10, 2);
    assert_eq!(anon.function_name(), "");
    assert!(!anon.is_eval());

    let eval = Frame::eval(1, 5);
    assert!(eval.is_eval());
    assert_eq!(eval.script_id(), None);

    let eval_in = Frame::eval_in("c.js", 42, 8, 9);
    assert!(eval_in.is_eval());
    assert_eq!(eval_in.script_id(), Some(42));
    assert_eq!(eval_in.script_name(), "c.js");
}

#[test]
fn empty_function_name_is_the_anonymous_form() {
    assert_eq!(Frame::named("", "a.js", 1, 1), Frame::anonymous("a.js", 1, 1));
}

#[test]
fn capture_preserves_frame_order() {
    let snapshot = TraceSnapshot::capture([
        Frame::named("inner", "a.js", 3, 7),
        Frame::named("outer", "a.js", 9, 1),
    ]);

    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot.frames()[0].function_name(), "inner");
    assert_eq!(snapshot.frames()[1].function_name(), "outer");
}

#[test]
fn capture_of_nothing_is_empty() {
    let snapshot = TraceSnapshot::capture([]);
    assert!(snapshot.is_empty());
    assert_eq!(snapshot.len(), 0);
}

#[test]
fn snapshot_macro_builds_named_and_anonymous_frames() {
    let snapshot = snapshot!["a.js":3:7 => "f", "b.js":10:2];

    assert_eq!(snapshot.frames()[0], Frame::named("f", "a.js", 3, 7));
    assert_eq!(snapshot.frames()[1], Frame::anonymous("b.js", 10, 2));
    assert!(snapshot![].is_empty());
}

#[test]
fn pair_counts_segments_across_nesting() {
    let leaf = || TraceNode::snapshot(snapshot!["a.js":1:1]);

    assert_eq!(leaf().segments(), 1);
    assert_eq!(TraceNode::text("just a message").segments(), 1);

    let two = TraceNode::pair(leaf(), leaf());
    assert_eq!(two.segments(), 2);
    assert!(two.is_pair());

    let three = TraceNode::pair(leaf(), two);
    assert_eq!(three.segments(), 3);
}

#[test]
fn trace_node_from_snapshot_is_a_snapshot_leaf() {
    let node = TraceNode::from(snapshot!["a.js":1:1]);
    assert!(!node.is_pair());
    assert_eq!(node, TraceNode::snapshot(snapshot!["a.js":1:1]));
}

#[cfg(feature = "serde")]
mod serde_support {
    use trace_splice::snapshot;
    use trace_splice::types::{Frame, TraceNode};

    #[test]
    fn trace_node_round_trips_through_json() {
        let node = TraceNode::pair(
            TraceNode::snapshot(snapshot!["outer.js":10:1 => "run"]),
            TraceNode::pair(
                TraceNode::snapshot(snapshot!["inner.js":3:7 => "f"]),
                TraceNode::text("Error: boom\n    at foo:1:1"),
            ),
        );

        let json = serde_json::to_string(&node).unwrap();
        let back: TraceNode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, node);
    }

    #[test]
    fn frame_round_trips_through_json() {
        let frame = Frame::eval_in("c.js", 42, 8, 9);
        let json = serde_json::to_string(&frame).unwrap();
        let back: Frame = serde_json::from_str(&json).unwrap();
        assert_eq!(back, frame);
    }
}
