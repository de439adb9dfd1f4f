use super::*;
use pretty_assertions::assert_eq;

fn start(index: i64, id: &str, name: &str) -> ToolCallEvent {
    ToolCallEvent::Start {
        index,
        id: id.to_string(),
        name: name.to_string(),
    }
}

fn delta(index: i64, id: &str, text: &str) -> ToolCallEvent {
    ToolCallEvent::Delta {
        index,
        id: id.to_string(),
        delta: text.to_string(),
    }
}

fn end(index: i64, id: &str) -> ToolCallEvent {
    ToolCallEvent::End {
        index,
        id: id.to_string(),
    }
}

#[test]
fn test_start_then_deltas() {
    let mut tracker = RawChunkTracker::new();
    let events = tracker.process_chunk(
        &RawToolCallChunk::new(0)
            .with_id("call_1")
            .with_name("read_file")
            .with_arguments("{\"pa"),
    );
    assert_eq!(
        events,
        vec![start(0, "call_1", "read_file"), delta(0, "call_1", "{\"pa")]
    );

    let events = tracker.process_chunk(&RawToolCallChunk::new(0).with_arguments("th\":1}"));
    assert_eq!(events, vec![delta(0, "call_1", "th\":1}")]);
}

#[test]
fn test_deltas_before_name_are_replayed_in_order() {
    let mut tracker = RawChunkTracker::new();
    assert!(
        tracker
            .process_chunk(&RawToolCallChunk::new(0).with_id("c").with_arguments("a"))
            .is_empty()
    );
    assert!(
        tracker
            .process_chunk(&RawToolCallChunk::new(0).with_arguments("b"))
            .is_empty()
    );
    let events = tracker.process_chunk(
        &RawToolCallChunk::new(0)
            .with_name("list_files")
            .with_arguments("c"),
    );
    assert_eq!(
        events,
        vec![
            start(0, "c", "list_files"),
            delta(0, "c", "a"),
            delta(0, "c", "b"),
            delta(0, "c", "c"),
        ]
    );
}

#[test]
fn test_orphan_arguments_adopted_when_id_arrives() {
    let mut tracker = RawChunkTracker::new();
    assert!(
        tracker
            .process_chunk(&RawToolCallChunk::new(2).with_arguments("{}"))
            .is_empty()
    );
    let events = tracker.process_chunk(&RawToolCallChunk::new(2).with_id("x").with_name("t"));
    assert_eq!(events, vec![start(2, "x", "t"), delta(2, "x", "{}")]);
}

#[test]
fn test_first_name_wins_and_start_once() {
    let mut tracker = RawChunkTracker::new();
    tracker.process_chunk(&RawToolCallChunk::new(0).with_id("c").with_name("first"));
    let events = tracker.process_chunk(
        &RawToolCallChunk::new(0)
            .with_id("c")
            .with_name("second")
            .with_arguments("x"),
    );
    assert_eq!(events, vec![delta(0, "c", "x")]);
}

#[test]
fn test_empty_name_does_not_start() {
    let mut tracker = RawChunkTracker::new();
    let events = tracker.process_chunk(&RawToolCallChunk::new(0).with_id("c").with_name(""));
    assert!(events.is_empty());
    assert_eq!(tracker.len(), 1);
}

#[test]
fn test_finish_ends_started_tracks_only() {
    let mut tracker = RawChunkTracker::new();
    tracker.process_chunk(&RawToolCallChunk::new(1).with_id("b").with_name("t"));
    tracker.process_chunk(&RawToolCallChunk::new(0).with_id("a").with_name("t"));
    tracker.process_chunk(&RawToolCallChunk::new(2).with_id("pending"));

    assert!(tracker.process_finish(FinishReason::Other).is_empty());
    let events = tracker.process_finish(FinishReason::ToolCalls);
    assert_eq!(events, vec![end(0, "a"), end(1, "b")]);
    assert_eq!(tracker.len(), 1);
    assert!(tracker.process_finish(FinishReason::ToolCalls).is_empty());
}

#[test]
fn test_finalize_is_idempotent() {
    let mut tracker = RawChunkTracker::new();
    tracker.process_chunk(&RawToolCallChunk::new(0).with_id("a").with_name("t"));
    tracker.process_chunk(&RawToolCallChunk::new(1).with_id("b").with_name("t"));
    tracker.process_chunk(&RawToolCallChunk::new(2).with_id("unnamed"));
    tracker.process_chunk(&RawToolCallChunk::new(3).with_arguments("orphan"));

    let events = tracker.finalize();
    assert_eq!(events, vec![end(0, "a"), end(1, "b")]);
    assert!(tracker.is_empty());
    assert!(tracker.finalize().is_empty());
}

#[test]
fn test_clear_drops_everything() {
    let mut tracker = RawChunkTracker::new();
    tracker.process_chunk(&RawToolCallChunk::new(0).with_id("a").with_name("t"));
    tracker.clear();
    assert!(tracker.is_empty());
    assert!(tracker.finalize().is_empty());
}
