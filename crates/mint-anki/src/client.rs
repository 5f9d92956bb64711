use async_trait::async_trait;
use mint_types::FlashcardPayload;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{AnkiError, FlashcardStore};

#[derive(Clone)]
pub struct AnkiConnectClient {
    base_url: String,
    client: reqwest::Client,
    deck: String,
    model: String,
    duplicate_scope: String,
}

impl AnkiConnectClient {
    pub fn new(base_url: String, deck: String, model: String, duplicate_scope: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
            deck,
            model,
            duplicate_scope,
        }
    }

    fn note_params(&self, payload: &FlashcardPayload) -> serde_json::Value {
        json!({
            "note": {
                "deckName": self.deck,
                "modelName": self.model,
                "fields": {
                    "Front": payload.front,
                    "Back": payload.back,
                    "Description": payload.description,
                    "IMGurl": payload.image_url
                },
                "options": {
                    "allowDuplicate": false,
                    "duplicateScope": self.duplicate_scope
                },
                "tags": payload.tags
            }
        })
    }

    /// Invoke an AnkiConnect API action
    async fn invoke<T>(&self, action: &str, params: serde_json::Value) -> Result<AnkiResponse<T>, AnkiError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let request = AnkiRequest {
            action: action.to_string(),
            version: 6,
            params,
        };

        let response = self.client.post(&self.base_url).json(&request).send().await?;

        if !response.status().is_success() {
            return Err(AnkiError::Status(response.status().as_u16()));
        }

        Ok(response.json::<AnkiResponse<T>>().await?)
    }
}

#[async_trait]
impl FlashcardStore for AnkiConnectClient {
    async fn check_connection(&self) -> Result<u32, AnkiError> {
        let response: AnkiResponse<u32> = self.invoke("version", json!({})).await?;
        response.into_result()
    }

    async fn add_note(&self, payload: &FlashcardPayload) -> Result<u64, AnkiError> {
        let params = self.note_params(payload);
        let response: AnkiResponse<u64> = self.invoke("addNote", params).await?;
        response.into_result()
    }
}

#[derive(Serialize)]
struct AnkiRequest {
    action: String,
    version: u32,
    params: serde_json::Value,
}

#[derive(Deserialize)]
struct AnkiResponse<T> {
    result: Option<T>,
    error: Option<String>,
}

impl<T> AnkiResponse<T> {
    fn into_result(self) -> Result<T, AnkiError> {
        if let Some(error) = self.error {
            return Err(AnkiError::Rejected(error));
        }

        self.result.ok_or(AnkiError::EmptyResult)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn note_params_shape() {
        let client = AnkiConnectClient::new(
            "http://127.0.0.1:8765".into(),
            "Default".into(),
            "Basic".into(),
            "deck".into(),
        );
        let payload = FlashcardPayload {
            front: "hello".into(),
            back: "Превод: <strong>привет</strong>".into(),
            description: String::new(),
            image_url: "https://img/1".into(),
            tags: BTreeSet::from(["min-translator".to_string()]),
        };

        let params = client.note_params(&payload);
        let note = &params["note"];

        assert_eq!(note["deckName"], "Default");
        assert_eq!(note["modelName"], "Basic");
        assert_eq!(note["fields"]["Front"], "hello");
        assert_eq!(note["fields"]["IMGurl"], "https://img/1");
        assert_eq!(note["fields"]["Description"], "");
        assert_eq!(note["options"]["allowDuplicate"], false);
        assert_eq!(note["options"]["duplicateScope"], "deck");
        assert_eq!(note["tags"], json!(["min-translator"]));
    }

    #[test]
    fn error_field_wins() {
        let response: AnkiResponse<u64> =
            serde_json::from_str(r#"{"result":null,"error":"cannot create note because it is a duplicate"}"#)
                .unwrap();

        match response.into_result() {
            Err(AnkiError::Rejected(msg)) => assert!(msg.contains("duplicate")),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn null_result_is_empty() {
        let response: AnkiResponse<u32> =
            serde_json::from_str(r#"{"result":null,"error":null}"#).unwrap();

        assert!(matches!(response.into_result(), Err(AnkiError::EmptyResult)));
    }

    #[test]
    fn version_result() {
        let response: AnkiResponse<u32> =
            serde_json::from_str(r#"{"result":6,"error":null}"#).unwrap();

        assert_eq!(response.into_result().unwrap(), 6);
    }
}
