use retroplay::source::{EventLogSource, FileSystemEventLogSource, InMemoryEventLogSource, SourceError, decode_log};
use retroplay::Decoder;
use std::sync::Arc;

const LOG: &str = "id,NYN198604140
info,usedh,false
play,1,0,bondb001,12,CBFX,8/F8
play,1,1,dyksl001,00,X,S9/G9+.B-2(E9)
";

/// Integration test: Logs read from disk decode the same as logs held in memory
#[tokio::test]
async fn file_system_and_memory_sources_agree() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("1986NYN.EVN"), LOG).unwrap();

    let disk = FileSystemEventLogSource::new(dir.path());
    let mut memory = InMemoryEventLogSource::new();
    memory.add_log("1986NYN.EVN", LOG);

    let decoder = Decoder::standard();
    let from_disk = decode_log(&disk, "1986NYN.EVN", &decoder).await.unwrap();
    let from_memory = decode_log(&memory, "1986NYN.EVN", &decoder).await.unwrap();

    assert_eq!(from_disk, from_memory);
    assert_eq!(from_disk.play_count(), 2);

    let runner = from_disk.games[0].plays[1].event.runners().next().unwrap();
    assert!(!runner.is_out);
    assert_eq!(runner.annotations, vec!["E9".to_string()]);
}

/// Integration test: Sources are usable as shared trait objects across tasks
#[tokio::test]
async fn shared_source_across_tasks() {
    let mut memory = InMemoryEventLogSource::new();
    memory.add_log("a.EVN", LOG);
    memory.add_log("b.EVN", LOG);
    let source: Arc<dyn EventLogSource> = Arc::new(memory);

    let mut handles = Vec::new();
    for name in source.list_logs().await.unwrap() {
        let source = Arc::clone(&source);
        handles.push(tokio::spawn(async move {
            decode_log(source.as_ref(), &name, &Decoder::standard()).await
        }));
    }

    for handle in handles {
        let file = handle.await.unwrap().unwrap();
        assert_eq!(file.games.len(), 1);
    }
}

#[tokio::test]
async fn missing_file_keeps_its_name() {
    let dir = tempfile::tempdir().unwrap();
    let source = FileSystemEventLogSource::new(dir.path());

    let err = decode_log(&source, "1999XXX.EVN", &Decoder::standard())
        .await
        .unwrap_err();
    match &err {
        SourceError::NotFound { name } => assert_eq!(name, "1999XXX.EVN"),
        other => panic!("Expected NotFound, got {other:?}"),
    }
    assert!(err.to_string().contains("1999XXX.EVN"));
}
