/// Resolves user-facing strings for the active locale.
///
/// Keys are the source-language strings themselves; a translator that has no
/// entry for a key returns the key unchanged.
pub trait Translator: Send + Sync {
    /// Returns the localized text for a key.
    fn translate(&self, key: &str) -> String;
}

/// Translator that returns every key unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTranslator;

impl Translator for IdentityTranslator {
    fn translate(&self, key: &str) -> String {
        key.to_owned()
    }
}

impl<T: Translator + ?Sized> Translator for std::sync::Arc<T> {
    fn translate(&self, key: &str) -> String {
        (**self).translate(key)
    }
}
