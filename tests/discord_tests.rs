use serde_json::json;
use slack2discord::discord::{Embed, FileUpload, SendArguments};
use std::path::PathBuf;

// These verify that the argument payloads serialize to the field names
// Discord's message API expects.

#[test]
fn test_send_arguments_without_embeds() {
    let args = SendArguments {
        content: "hello".to_string(),
        embeds: None,
    };

    let payload = serde_json::to_value(&args).unwrap();
    assert_eq!(payload, json!({"content": "hello"}));
}

#[test]
fn test_send_arguments_with_embeds() {
    let args = SendArguments {
        content: String::new(),
        embeds: Some(vec![
            Embed::new(Some("A".to_string()), Some("https://a.example".to_string()), None),
            Embed::new(None, None, Some("only a description".to_string()))
                .with_author(None, Some("https://b.example/icon.png".to_string())),
        ]),
    };

    let payload = serde_json::to_value(&args).unwrap();
    assert_eq!(
        payload,
        json!({
            "content": "",
            "embeds": [
                {"title": "A", "url": "https://a.example"},
                {
                    "description": "only a description",
                    "author": {"icon_url": "https://b.example/icon.png"}
                }
            ]
        })
    );
}

#[test]
fn test_file_upload_serialization() {
    let upload = FileUpload {
        local_path: PathBuf::from("/tmp/F1/report.pdf"),
        display_name: Some("report.pdf".to_string()),
    };

    let payload = serde_json::to_value(&upload).unwrap();
    assert_eq!(
        payload,
        json!({"local_path": "/tmp/F1/report.pdf", "display_name": "report.pdf"})
    );
}
