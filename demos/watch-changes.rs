use day_tasks::{TaskFields, TaskStore};

#[tokio::main]
async fn main() {
    env_logger::init();

    let dir = tempfile::tempdir().unwrap();
    let mut store = TaskStore::new(&dir.path().join("tasks.json"));

    // A view layer would re-render from each snapshot it receives.
    // Note that the channel coalesces rapid mutations: the printer may skip
    // intermediate snapshots, but always ends up on the latest contents.
    let mut snapshots = store.subscribe();
    let printer = tokio::spawn(async move {
        while snapshots.changed().await.is_ok() {
            let tasks = snapshots.borrow_and_update().clone();
            println!("-- the store now holds {} task(s) --", tasks.len());
            for task in &tasks {
                println!("  {} ({} - {})", task.name(), task.start_time(), task.end_time());
            }
        }
    });

    let standup = store
        .create(TaskFields {
            name: "Standup".to_string(),
            kind: "meeting".to_string(),
            start_time: "09:00".to_string(),
            end_time: "09:15".to_string(),
        })
        .unwrap();
    store
        .update(
            standup.id(),
            TaskFields {
                end_time: "09:30".to_string(),
                ..standup.fields()
            },
        )
        .unwrap();
    store.delete(standup.id()).unwrap();

    // Dropping the store closes the channel and lets the printer finish
    drop(store);
    printer.await.unwrap();
}
