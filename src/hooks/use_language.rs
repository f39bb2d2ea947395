use gloo_storage::Storage;
use yew::prelude::*;

use crate::config::Config;
use crate::i18n::Language;

/// Handle returned by `use_language` hook
#[derive(Clone, PartialEq)]
pub struct LanguageHandle {
    pub language: Language,
    pub toggle: Callback<()>,
}

/// Custom hook for the display language with localStorage persistence.
/// Changing the language never triggers a fetch.
#[hook]
pub fn use_language() -> LanguageHandle {
    // Load language from localStorage, fallback to default (Hindi)
    let language = use_state(|| load_language_preference().unwrap_or_default());

    // Effect: Persist language to localStorage on change
    {
        let language_value = *language;
        use_effect_with(language_value, move |language| {
            save_language_preference(*language);
            || ()
        });
    }

    let toggle = {
        let language = language.clone();
        Callback::from(move |()| language.set(language.toggle()))
    };

    LanguageHandle {
        language: *language,
        toggle,
    }
}

/// Load language preference from localStorage
fn load_language_preference() -> Option<Language> {
    gloo_storage::LocalStorage::get(Config::LANGUAGE_STORAGE_KEY).ok()
}

/// Save language preference to localStorage
fn save_language_preference(language: Language) {
    if let Err(e) = gloo_storage::LocalStorage::set(Config::LANGUAGE_STORAGE_KEY, language) {
        gloo::console::warn!(format!("Failed to save language: {e:?}"));
    }
}
