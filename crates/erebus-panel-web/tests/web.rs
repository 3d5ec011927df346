//! Browser tests for SupervisorPanel
//!
//! Run with `wasm-pack test --headless --firefox crates/erebus-panel-web`.

#![cfg(target_arch = "wasm32")]

use erebus_panel::{Button, Role};
use erebus_panel_web::SupervisorPanel;
use wasm_bindgen::prelude::*;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

/// Build a page with every bound element and a fake `webots` global.
fn setup_page() -> web_sys::Document {
    let document = web_sys::window().unwrap().document().unwrap();
    let mut html = String::new();
    for role in Role::all() {
        let id = role.key();
        let tag = match role {
            Role::Button(_) => format!("<button id=\"{id}\"></button>"),
            Role::FileInput(_) => format!("<input type=\"file\" id=\"{id}\">"),
            Role::HumanA(_) | Role::HumanB(_) | Role::Activity(_) => {
                format!("<svg><circle id=\"{id}\" r=\"4\"></circle></svg>")
            }
            Role::HistoryTable => format!("<table id=\"{id}\"></table>"),
            _ => format!("<div id=\"{id}\"></div>"),
        };
        html.push_str(&tag);
    }
    document.body().unwrap().set_inner_html(&html);

    js_sys::Function::new_no_args(
        "window.webots = { window: () => ({ \
            sent: [], title: null, \
            setTitle(t) { this.title = t; }, \
            send(m) { this.sent.push(m); } \
        }) };",
    )
    .call0(&JsValue::NULL)
    .unwrap();
    document
}

fn text(document: &web_sys::Document, id: &str) -> String {
    document
        .get_element_by_id(id)
        .and_then(|el| el.text_content())
        .unwrap_or_default()
}

fn robot_window_field(name: &str) -> JsValue {
    let window = web_sys::window().unwrap();
    let handle = js_sys::Reflect::get(&window, &"robotWindow".into()).unwrap();
    js_sys::Reflect::get(&handle, &name.into()).unwrap()
}

fn sent() -> Vec<String> {
    js_sys::Array::from(&robot_window_field("sent"))
        .iter()
        .filter_map(|v| v.as_string())
        .collect()
}

/// Put a file with the given contents into a file input.
fn choose_file(document: &web_sys::Document, id: &str, name: &str, contents: &str) {
    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let file = web_sys::File::new_with_str_sequence(&parts, name).unwrap();
    let transfer = web_sys::DataTransfer::new().unwrap();
    transfer.items().add_with_file(&file).unwrap();
    let input = document
        .get_element_by_id(id)
        .unwrap()
        .dyn_into::<web_sys::HtmlInputElement>()
        .unwrap();
    input.set_files(transfer.files().as_ref());
}

async fn sleep_ms(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    wasm_bindgen_futures::JsFuture::from(promise).await.unwrap();
}

/// Wait for background file reads to settle.
async fn settle() {
    for _ in 0..20 {
        if sent().iter().any(|m| m.contains("File,")) {
            break;
        }
        sleep_ms(10).await;
    }
    sleep_ms(10).await;
}

fn is_disabled(document: &web_sys::Document, id: &str) -> bool {
    document
        .get_element_by_id(id)
        .unwrap()
        .dyn_into::<web_sys::HtmlButtonElement>()
        .unwrap()
        .disabled()
}

#[wasm_bindgen_test]
fn test_attach_renders_initial_page() {
    let document = setup_page();
    let mut panel = SupervisorPanel::new(None).unwrap();
    panel.attach().unwrap();

    assert!(panel.is_attached());
    assert_eq!(robot_window_field("title").as_string().as_deref(), Some("Simulation Controls"));
    assert_eq!(text(&document, "timer"), "08:00");
    assert_eq!(text(&document, "robot0Name"), "None");
    assert!(is_disabled(&document, &Role::Button(Button::Run).key()));
}

#[wasm_bindgen_test]
fn test_attach_fails_on_missing_element() {
    let document = setup_page();
    document.get_element_by_id("timer").unwrap().remove();

    let mut panel = SupervisorPanel::new(None).unwrap();
    assert!(panel.attach().is_err());
    assert!(!panel.is_attached());
}

#[wasm_bindgen_test]
fn test_host_messages_update_page() {
    let document = setup_page();
    let mut panel = SupervisorPanel::new(None).unwrap();
    panel.attach().unwrap();

    panel.receive("update,30,15,65");
    assert_eq!(text(&document, "score0"), "30");
    assert_eq!(text(&document, "timer"), "06:55");

    panel.receive("loaded1,Rescue Bot");
    assert_eq!(text(&document, "robot1Name"), "Rescue Bot");

    // Malformed messages are logged and dropped
    panel.receive("update,1");
    assert_eq!(text(&document, "score0"), "30");
}

#[wasm_bindgen_test]
fn test_run_sends_command() {
    let document = setup_page();
    let mut panel = SupervisorPanel::new(None).unwrap();
    panel.attach().unwrap();

    panel.receive("startup");
    panel.run_pressed();
    assert!(is_disabled(&document, "runButton"));
    assert!(!is_disabled(&document, "pauseButton"));
    assert_eq!(sent(), vec!["run".to_string()]);

    panel.relocate_pressed(1).unwrap();
    assert!(panel.relocate_pressed(2).is_err());
    assert_eq!(sent(), vec!["run".to_string(), "relocate,1".to_string()]);
}

#[wasm_bindgen_test]
fn test_config_overrides_duration() {
    let document = setup_page();
    let mut panel =
        SupervisorPanel::new(Some(r#"{ "match_duration_secs": 60 }"#.to_string())).unwrap();
    panel.attach().unwrap();
    assert_eq!(text(&document, "timer"), "01:00");

    assert!(SupervisorPanel::new(Some(r#"{ "bindings": { "nope": "x" } }"#.to_string())).is_err());
}

#[wasm_bindgen_test]
fn test_state_json() {
    setup_page();
    let mut panel = SupervisorPanel::new(None).unwrap();
    panel.attach().unwrap();
    panel.receive("update,2,3,10");

    let state: serde_json::Value = serde_json::from_str(&panel.get_state_json()).unwrap();
    assert_eq!(state["match"]["scores"], serde_json::json!([2, 3]));
    assert_eq!(state["timer"], "07:50");
}

#[wasm_bindgen_test]
async fn test_file_upload_sends_contents_once() {
    let document = setup_page();
    let mut panel = SupervisorPanel::new(None).unwrap();
    panel.attach().unwrap();

    choose_file(&document, "robot0File", "controller.py", "print('hi')\n");
    panel.file_selected(0).unwrap();
    settle().await;

    assert_eq!(sent(), vec!["robot0File,print('hi')\n".to_string()]);
}

#[wasm_bindgen_test]
async fn test_unload_skips_pending_read() {
    let document = setup_page();
    let mut panel = SupervisorPanel::new(None).unwrap();
    panel.attach().unwrap();

    choose_file(&document, "robot1File", "controller.py", "import math");
    panel.file_selected(1).unwrap();
    panel.unload_pressed(1).unwrap();
    settle().await;

    assert_eq!(sent(), vec!["robot1Unload".to_string()]);
}

#[wasm_bindgen_test]
async fn test_wrong_file_type_is_not_read() {
    let document = setup_page();
    let mut panel = SupervisorPanel::new(None).unwrap();
    panel.attach().unwrap();

    // Suppress the blocking alert
    js_sys::Function::new_no_args("window.alert = () => {};")
        .call0(&JsValue::NULL)
        .unwrap();
    choose_file(&document, "robot0File", "notes.txt", "hello");
    panel.file_selected(0).unwrap();
    settle().await;

    assert!(sent().is_empty());
}
