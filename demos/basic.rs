use std::path::Path;

use day_tasks::{TaskFields, TaskStore};

const STORE_FILE: &str = "demo_tasks.json";

fn main() {
    env_logger::init();

    // The store is a hard dependency: without it there is nothing to run on
    let mut store = match TaskStore::open(Path::new(STORE_FILE)) {
        Ok(store) => store,
        Err(err) => {
            log::error!("Unable to open the task store: {}", err);
            std::process::exit(1);
        }
    };

    let standup = store
        .create(TaskFields {
            name: "Standup".to_string(),
            kind: "meeting".to_string(),
            start_time: "09:00".to_string(),
            end_time: "09:15".to_string(),
        })
        .unwrap();
    store
        .create(TaskFields {
            name: "Groceries".to_string(),
            kind: "chores".to_string(),
            start_time: "18:00".to_string(),
            end_time: "18:45".to_string(),
        })
        .unwrap();
    print_tasks(&store, "after creating two tasks");

    store
        .update(
            standup.id(),
            TaskFields {
                end_time: "09:30".to_string(),
                ..standup.fields()
            },
        )
        .unwrap();
    print_tasks(&store, "after a longer standup");

    store.delete(standup.id()).unwrap();
    print_tasks(&store, "after deleting the standup");
}

fn print_tasks(store: &TaskStore, when: &str) {
    println!("---- {} ----", when);
    for task in store.tasks() {
        println!(
            "  [{}] {}\t{} - {}\t({})",
            task.kind(),
            task.name(),
            task.start_time(),
            task.end_time(),
            task.id()
        );
    }
}
