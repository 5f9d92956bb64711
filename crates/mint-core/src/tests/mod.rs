
use mint_types::TranslationResult;

/// The translation used across scenarios
pub(crate) fn hello() -> TranslationResult {
    TranslationResult::new(
        "привет",
        vec!["здравствуй".to_string(), "хай".to_string()],
    )
}
