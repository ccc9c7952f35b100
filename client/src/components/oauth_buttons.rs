//! Third-party sign-in buttons.
//!
//! Rendered for layout only; no provider flow is attached to them.

#[cfg(test)]
#[path = "oauth_buttons_test.rs"]
mod oauth_buttons_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OAuthProvider {
    GitHub,
    Google,
}

impl OAuthProvider {
    pub const ALL: [Self; 2] = [Self::GitHub, Self::Google];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::GitHub => "GitHub",
            Self::Google => "Google",
        }
    }

    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::GitHub => "oauth-icon oauth-icon--github",
            Self::Google => "oauth-icon oauth-icon--google",
        }
    }
}

#[component]
pub fn OAuthButtons() -> impl IntoView {
    view! {
        <div class="oauth-buttons">
            {OAuthProvider::ALL
                .into_iter()
                .map(|provider| {
                    view! {
                        <button
                            type="button"
                            class="button button--outline button--lg button--full"
                            aria-label=format!("Continue with {}", provider.label())
                        >
                            <span class=provider.icon_class() aria-hidden="true"></span>
                            <span class="oauth-buttons__label">{provider.label()}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
