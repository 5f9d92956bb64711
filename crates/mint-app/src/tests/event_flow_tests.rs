use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use kanal::AsyncReceiver;
use mint_anki::{AnkiError, FlashcardStore};
use mint_config::Config;
use mint_core::LineKind;
use mint_images::{ImageError, ImageSearch};
use mint_io::{PageCommand, WsSurface, parse_event};
use mint_translator::{LanguageCode, TranslateError, Translation, Translator};
use mint_types::{AppEvent, ClickTarget, FlashcardPayload};
use tokio::time::timeout;

use crate::context::{AppContext, Services};
use crate::events::handle_event;
use crate::state::AppState;

struct StubTranslator;

#[async_trait]
impl Translator for StubTranslator {
    async fn translate(
        &self,
        text: &str,
        _from: LanguageCode,
        _to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        assert_eq!(text, "hello");
        Ok(Translation {
            text: "привет".to_string(),
            alternatives: vec!["здравствуй".to_string(), "хай".to_string()],
        })
    }
}

struct StubImages;

#[async_trait]
impl ImageSearch for StubImages {
    async fn search(&self, _query: &str) -> Result<Option<String>, ImageError> {
        Ok(Some("https://img/hello.jpg".to_string()))
    }
}

#[derive(Default)]
struct MemoryStore {
    notes: Mutex<Vec<FlashcardPayload>>,
}

#[async_trait]
impl FlashcardStore for MemoryStore {
    async fn check_connection(&self) -> Result<u32, AnkiError> {
        Ok(6)
    }

    async fn add_note(&self, payload: &FlashcardPayload) -> Result<u64, AnkiError> {
        let mut notes = self.notes.lock().unwrap();
        notes.push(payload.clone());
        Ok(notes.len() as u64)
    }
}

async fn app() -> (AppContext, AsyncReceiver<PageCommand>, Arc<MemoryStore>) {
    let (tx, rx) = kanal::unbounded_async();
    let store = Arc::new(MemoryStore::default());

    let services = Services {
        translator: Arc::new(StubTranslator),
        images: Arc::new(StubImages),
        store: store.clone(),
        surface: Arc::new(WsSurface::new(tx)),
    };
    let state = Arc::new(AppState::new(Config::default()));
    let ctx = AppContext::new(state, services).await;

    (ctx, rx, store)
}

async fn next_command(rx: &AsyncReceiver<PageCommand>) -> PageCommand {
    timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("no page command")
        .expect("channel closed")
}

fn event(raw: &str) -> AppEvent {
    parse_event(raw).expect("bad event")
}

const DOUBLE_CLICK: &str = r#"{"type":"gesture","kind":"double_click","pointer":{"x":100.0,"y":50.0},"selection":"  hello "}"#;

#[tokio::test]
async fn double_click_mounts_popup_on_page() {
    let (ctx, rx, _) = app().await;

    handle_event(&ctx, event(DOUBLE_CLICK));

    match next_command(&rx).await {
        PageCommand::Mount { popup } => {
            assert_eq!(popup.position.x, 110.0);
            assert_eq!(popup.position.y, 70.0);
            assert_eq!(popup.lines[0].text, "[ru] привет");
            assert!(popup.line_index(LineKind::SaveButton, "Add to Anki").is_some());
        }
        other => panic!("Expected mount, got {:?}", other),
    }
    assert!(ctx.popups.is_open());
}

#[tokio::test]
async fn page_click_unmounts_popup() {
    let (ctx, rx, _) = app().await;

    handle_event(&ctx, event(DOUBLE_CLICK));
    let PageCommand::Mount { popup } = next_command(&rx).await else {
        panic!("Expected mount");
    };

    handle_event(&ctx, event(r#"{"type":"click","target":{"kind":"page"}}"#));

    match next_command(&rx).await {
        PageCommand::Unmount { popup: id } => assert_eq!(id, popup.id),
        other => panic!("Expected unmount, got {:?}", other),
    }
    assert!(!ctx.popups.is_open());
}

#[tokio::test]
async fn alternative_click_saves_card_and_closes() {
    let (ctx, rx, store) = app().await;

    handle_event(&ctx, event(DOUBLE_CLICK));
    let PageCommand::Mount { popup } = next_command(&rx).await else {
        panic!("Expected mount");
    };

    let line = popup
        .line_index(LineKind::Alternative, "здравствуй")
        .expect("alternative line");
    handle_event(
        &ctx,
        AppEvent::Click {
            target: ClickTarget::Popup {
                popup: popup.id,
                line: Some(line),
            },
        },
    );

    match next_command(&rx).await {
        PageCommand::Unmount { popup: id } => assert_eq!(id, popup.id),
        other => panic!("Expected unmount, got {:?}", other),
    }

    let notes = store.notes.lock().unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].front, "hello");
    assert!(notes[0].back.contains("<strong>здравствуй</strong>"));
    assert!(notes[0].back.ends_with("<ul><li>хай</li></ul>"));
    assert_eq!(notes[0].description, "<br>Альтернативы:<br><ul><li>хай</li></ul>");
    assert_eq!(notes[0].image_url, "https://img/hello.jpg");
}

#[tokio::test]
async fn blank_selection_sends_nothing() {
    let (ctx, rx, _) = app().await;

    handle_event(
        &ctx,
        event(r#"{"type":"gesture","kind":"double_click","pointer":{"x":1.0,"y":1.0},"selection":"   "}"#),
    );

    let result = timeout(Duration::from_millis(200), rx.recv()).await;
    assert!(result.is_err(), "Blank selection must not reach the page");
    assert!(!ctx.popups.is_open());
}

#[tokio::test]
async fn plain_mouse_up_is_ignored() {
    let (ctx, rx, _) = app().await;

    handle_event(
        &ctx,
        event(r#"{"type":"gesture","kind":"mouse_up","pointer":{"x":1.0,"y":1.0},"selection":"hello"}"#),
    );

    let result = timeout(Duration::from_millis(200), rx.recv()).await;
    assert!(result.is_err());
}
