use super::*;
#[cfg(feature = "ssr")]
use leptos::prelude::*;

#[test]
fn providers_render_github_then_google() {
    let labels: Vec<&str> = OAuthProvider::ALL.iter().map(|p| p.label()).collect();
    assert_eq!(labels, ["GitHub", "Google"]);
}

#[test]
fn provider_icons_are_distinct() {
    assert_ne!(OAuthProvider::GitHub.icon_class(), OAuthProvider::Google.icon_class());
}

#[cfg(feature = "ssr")]
#[test]
fn rendered_buttons_show_provider_names() {
    let html = Owner::new().with(|| OAuthButtons().to_html());
    assert!(html.contains(">GitHub<"));
    assert!(html.contains(">Google<"));
    assert!(html.contains("oauth-icon--github"));
    assert!(html.contains("oauth-icon--google"));
    assert!(!html.contains("disabled"));
}
