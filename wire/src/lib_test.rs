use super::*;

fn sample_payload() -> SavePayload {
    SavePayload {
        image_url: "https://example.com/garden.jpg".to_owned(),
        annotations: vec![WirePoint::new(10.0, 10.0), WirePoint::new(20.5, 11.25)],
        bubble_save_url: "https://app.example.com/api/1.1/wf/save".to_owned(),
    }
}

// --- SavePayload ---

#[test]
fn payload_serializes_with_wire_field_names() {
    let json = serde_json::to_value(sample_payload()).expect("serialize");
    assert_eq!(json["image_url"], "https://example.com/garden.jpg");
    assert_eq!(json["bubble_save_url"], "https://app.example.com/api/1.1/wf/save");
    assert_eq!(json["annotations"][0]["x"], 10.0);
    assert_eq!(json["annotations"][1]["y"], 11.25);
}

#[test]
fn payload_round_trips() {
    let payload = sample_payload();
    let json = serde_json::to_string(&payload).expect("serialize");
    let back: SavePayload = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, payload);
}

#[test]
fn payload_accepts_an_empty_annotation_list() {
    let json = r#"{"image_url":"u","annotations":[],"bubble_save_url":"b"}"#;
    let payload: SavePayload = serde_json::from_str(json).expect("deserialize");
    assert!(payload.annotations.is_empty());
}

#[test]
fn payload_rejects_missing_fields() {
    let json = r#"{"image_url":"u","annotations":[]}"#;
    assert!(serde_json::from_str::<SavePayload>(json).is_err());
}

// --- SaveResponse ---

#[test]
fn response_ok_sets_the_success_flag() {
    let response = SaveResponse::ok("saved");
    assert!(response.success);
    assert_eq!(response.message, "saved");
}

#[test]
fn response_failure_clears_the_success_flag() {
    let response = SaveResponse::failure("no endpoint configured");
    assert!(!response.success);
    assert_eq!(response.message, "no endpoint configured");
}

#[test]
fn response_decodes_the_documented_shape() {
    let json = r#"{"success":true,"message":"Annotation saved"}"#;
    let response: SaveResponse = serde_json::from_str(json).expect("deserialize");
    assert_eq!(response, SaveResponse::ok("Annotation saved"));
}
