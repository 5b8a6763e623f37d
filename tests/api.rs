mod helpers;

use helpers::setup::spawn_app;
use savin_sdk::{CreateReminderInput, LogActivityInput};
use serde_json::json;

#[actix_web::main]
#[test]
async fn test_status_ok() {
    let (_, sdk, _) = spawn_app().await;
    let status = sdk.status.check().await.expect("Expected status");
    assert_eq!(status.status, "running");
    assert_eq!(status.ollama_status, "disabled");
}

#[actix_web::main]
#[test]
async fn test_index_page() {
    let (_, sdk, _) = spawn_app().await;
    let page = sdk.status.index_page().await.expect("Expected index page");
    assert!(page.contains("<title>Savin</title>"));
}

#[actix_web::main]
#[test]
async fn test_empty_command() {
    let (_, sdk, _) = spawn_app().await;
    let res = sdk.command.process("").await.unwrap();
    assert_eq!(res.response, "I couldn't hear you. Please try again.");
}

#[actix_web::main]
#[test]
async fn test_open_app_command() {
    let (app, sdk, _) = spawn_app().await;
    let res = sdk.command.process("Open Firefox").await.unwrap();
    assert_eq!(res.response, "Opening firefox");
    assert_eq!(app.desktop.launches.lock().unwrap().len(), 1);

    let res = sdk.app.open("calculator").await.unwrap();
    assert_eq!(res.response, "Opening calculator");
    assert_eq!(app.desktop.launches.lock().unwrap().len(), 2);
}

#[actix_web::main]
#[test]
async fn test_reminder_command() {
    let (_, sdk, _) = spawn_app().await;
    let res = sdk
        .command
        .process("Remind me to stretch in 10 minutes")
        .await
        .unwrap();
    assert!(res.response.starts_with("I've set a reminder for "));
    assert!(res.response.ends_with(" about: stretch"));

    let reminders = sdk.reminder.get().await.unwrap();
    assert_eq!(reminders.len(), 1);
    assert_eq!(reminders[0].message, "stretch");
}

#[actix_web::main]
#[test]
async fn test_create_reminder() {
    let (app, sdk, _) = spawn_app().await;
    let res = sdk
        .reminder
        .create(CreateReminderInput {
            time: "tomorrow at 9am".into(),
            message: "water the plants".into(),
        })
        .await
        .unwrap();
    assert!(res.response.contains(" at 09:00 AM about: water the plants"));

    let res = sdk
        .reminder
        .create(CreateReminderInput {
            time: "in a bit".into(),
            message: "stretch".into(),
        })
        .await
        .unwrap();
    assert_eq!(
        res.response,
        "I'm sorry, I couldn't set that reminder. Please try again with a different time format."
    );
    assert_eq!(app.ctx.repos.reminder_repo.find_all().await.len(), 1);

    let res = sdk
        .reminder
        .create(CreateReminderInput {
            time: "in 5 minutes".into(),
            message: " ".into(),
        })
        .await;
    assert!(res.is_err());
}

#[actix_web::main]
#[test]
async fn test_notes() {
    let (app, sdk, _) = spawn_app().await;
    let res = sdk.command.process("take a note: buy milk").await.unwrap();
    assert_eq!(res.response, "I've written your note: buy milk");
    assert_eq!(app.desktop.opened_paths.lock().unwrap().len(), 1);

    let notes = sdk.note.get_recent(None).await.unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].content, "buy milk");
    assert!(notes[0].file_name.starts_with("note_"));

    let res = sdk.note.create("").await.unwrap();
    assert_eq!(res.response, "What would you like me to write down?");
    assert!(sdk.note.get_recent(Some(0)).await.unwrap().is_empty());
}

#[actix_web::main]
#[test]
async fn test_keyword_replies() {
    let (_, sdk, _) = spawn_app().await;
    let res = sdk.command.process("Who are you?").await.unwrap();
    assert!(res.response.starts_with("I'm Savin"));

    let res = sdk.command.process("what's the weather like").await.unwrap();
    assert!(res.response.contains("weather"));
}

#[actix_web::main]
#[test]
async fn test_simple_response() {
    let (_, sdk, _) = spawn_app().await;
    let res = sdk.command.simple_response("  ").await.unwrap();
    assert_eq!(res.response, "I couldn't understand that. Please try again.");

    let res = sdk.command.simple_response("thank you").await.unwrap();
    assert_eq!(res.response, "You're welcome! I'm happy to help.");

    // Commands are not carried out
    let res = sdk.command.simple_response("open firefox").await.unwrap();
    assert!(!res.response.starts_with("Opening"));
}

#[actix_web::main]
#[test]
async fn test_activity_log() {
    let (_, sdk, _) = spawn_app().await;
    let res = sdk
        .activity
        .log(LogActivityInput {
            activity_type: Some("command".into()),
            details: Some(json!({ "query": "open firefox" })),
        })
        .await
        .unwrap();
    assert_eq!(res.status, "success");

    sdk.activity
        .log(LogActivityInput {
            activity_type: None,
            details: None,
        })
        .await
        .unwrap();

    let log = sdk.activity.get_log().await.unwrap();
    assert_eq!(log.len(), 2);
    assert_eq!(log[0].activity_type, "command");
    assert_eq!(log[0].details["query"], "open firefox");
    assert_eq!(log[1].activity_type, "unspecified");
    assert_eq!(log[1].details, json!({}));
}
