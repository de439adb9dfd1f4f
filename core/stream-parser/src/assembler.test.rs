use super::*;
use std::task::Poll;

use futures::stream;
use pretty_assertions::assert_eq;
use toolcall_args::NativeArgs;
use toolcall_args::ReadFileArgs;

fn assembler() -> ToolCallAssembler {
    ToolCallAssembler::from_config(&ToolCallConfig::default())
}

fn chunk(index: i64) -> RawToolCallChunk {
    RawToolCallChunk::new(index)
}

fn completed(outputs: &[AssemblerOutput]) -> Vec<&ParsedToolCall> {
    outputs.iter().filter_map(AssemblerOutput::completed).collect()
}

#[test]
fn test_interleaved_calls_complete_on_finish() {
    let mut assembler = assembler();
    assembler.begin_request();
    let mut outputs = Vec::new();
    outputs.extend(assembler.push_chunk(&chunk(0).with_id("a").with_name("read_file")));
    outputs.extend(assembler.push_chunk(&chunk(1).with_id("b").with_name("list_files")));
    outputs.extend(assembler.push_chunk(&chunk(0).with_arguments(r#"{"path": "src/"#)));
    outputs.extend(assembler.push_chunk(&chunk(1).with_arguments(r#"{"path": ".", "#)));
    outputs.extend(assembler.push_chunk(&chunk(0).with_arguments(r#"lib.rs"}"#)));
    outputs.extend(assembler.push_chunk(&chunk(1).with_arguments(r#""recursive": "true"}"#)));
    assert!(completed(&outputs).is_empty());
    assert!(outputs.iter().all(|o| matches!(o, AssemblerOutput::Partial(_))));

    let outputs = assembler.finish(FinishReason::ToolCalls);
    let calls = completed(&outputs);
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].id(), "a");
    assert_eq!(calls[1].id(), "b");
    let read = calls[0].as_tool_use().unwrap();
    let Some(NativeArgs::ReadFile(ReadFileArgs { files, .. })) = &read.native_args else {
        panic!("expected read_file args");
    };
    assert_eq!(files[0].path, "src/lib.rs");

    assert!(assembler.end_stream().is_empty());
}

#[test]
fn test_stream_without_finish_is_finalized() {
    let mut assembler = assembler();
    assembler.begin_request();
    assembler.push_chunk(
        &chunk(0)
            .with_id("a")
            .with_name("attempt_completion")
            .with_arguments(r#"{"result": "done"}"#),
    );
    let outputs = assembler.end_stream();
    assert_eq!(completed(&outputs).len(), 1);
    assert!(assembler.end_stream().is_empty());
}

#[test]
fn test_replayed_call_yields_one_final_record() {
    let mut assembler = assembler();
    assembler.begin_request();
    let call = chunk(0)
        .with_id("a")
        .with_name("attempt_completion")
        .with_arguments(r#"{"result": "done"}"#);

    let mut finals = 0;
    for _ in 0..2 {
        assembler.push_chunk(&call);
        finals += completed(&assembler.finish(FinishReason::ToolCalls)).len();
    }
    finals += completed(&assembler.end_stream()).len();
    assert_eq!(finals, 1);

    // A new request forgets finalized ids.
    assembler.begin_request();
    assembler.push_chunk(&call);
    assert_eq!(completed(&assembler.end_stream()).len(), 1);
}

#[test]
fn test_failed_call_is_reported() {
    let mut assembler = assembler();
    assembler.begin_request();
    assembler.push_chunk(&chunk(0).with_id("a").with_name("format_disk"));
    let outputs = assembler.end_stream();
    assert_eq!(outputs.len(), 1);
    let AssemblerOutput::Failed(err) = &outputs[0] else {
        panic!("expected failure");
    };
    assert_eq!(err.call_id(), "a");
}

#[tokio::test]
async fn test_consume_stream() {
    let mut assembler = assembler();
    assembler.begin_request();
    let events = vec![
        ProviderEvent::Chunk(chunk(0).with_id("a")),
        ProviderEvent::Chunk(chunk(0).with_name("execute_command")),
        ProviderEvent::Chunk(chunk(0).with_arguments(r#"{"command":"#)),
        ProviderEvent::Chunk(chunk(0).with_arguments(r#" "ls"}"#)),
        ProviderEvent::Finish(FinishReason::from_provider("tool_calls")),
    ];
    let outcome = assembler
        .consume(stream::iter(events), &CancellationToken::new())
        .await;
    assert!(!outcome.cancelled);
    let calls: Vec<_> = outcome.completed().collect();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].name(), "execute_command");
    assert_eq!(outcome.failures().count(), 0);
}

#[tokio::test]
async fn test_consume_stops_on_cancel() {
    let mut assembler = assembler();
    assembler.begin_request();
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    let events = stream::iter(vec![ProviderEvent::Chunk(
        chunk(0)
            .with_id("a")
            .with_name("attempt_completion")
            .with_arguments(r#"{"result": "x"}"#),
    )])
    .chain(stream::poll_fn(move |_| {
        trigger.cancel();
        Poll::Pending
    }));

    let outcome = assembler.consume(events, &cancel).await;
    assert!(outcome.cancelled);
    assert_eq!(outcome.completed().count(), 0);

    assembler.begin_request();
    assert!(assembler.end_stream().is_empty());
}

#[tokio::test]
async fn test_consume_already_cancelled() {
    let mut assembler = assembler();
    let cancel = CancellationToken::new();
    cancel.cancel();
    let outcome = assembler
        .consume(stream::iter(Vec::<ProviderEvent>::new()), &cancel)
        .await;
    assert!(outcome.cancelled);
    assert!(outcome.outputs.is_empty());
}
