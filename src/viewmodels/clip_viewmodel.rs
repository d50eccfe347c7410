// ============================================================================
// CLIP VIEWMODEL - Configuración observable del widget de clip
// ============================================================================

use crate::state::{ClipLifecycle, ClipPhase};
use crate::utils::constants::CLIP_EMBED_BASE_URL;

/// Lo que recibe el widget de embed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClipEmbedConfig {
    pub clip_slug: Option<String>,
    pub hidden: bool,
    /// `None` sin slug o con un slug que no es seguro poner en la URL
    pub embed_url: Option<String>,
    /// Spinner visible mientras el clip carga y no está oculto
    pub show_spinner: bool,
}

impl ClipEmbedConfig {
    pub fn derive(lifecycle: &ClipLifecycle, embed_parent: &str) -> Self {
        let loading = matches!(lifecycle.phase(), ClipPhase::Loading(_));
        let clip_slug = lifecycle.clip_slug().map(str::to_string);
        let embed_url = clip_slug
            .as_deref()
            .and_then(|slug| embed_url(slug, embed_parent));

        Self {
            clip_slug,
            hidden: lifecycle.hidden(),
            show_spinner: loading && !lifecycle.hidden() && embed_url.is_some(),
            embed_url,
        }
    }

    /// Clase CSS del contenedor según la fase
    pub fn phase_class(&self, loaded: bool) -> &'static str {
        match (&self.clip_slug, loaded) {
            (None, _) => "clip clip--idle",
            (Some(_), false) => "clip clip--loading",
            (Some(_), true) => "clip clip--loaded",
        }
    }
}

/// Los slugs de Twitch son alfanuméricos con `-` y `_`
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

pub fn embed_url(slug: &str, embed_parent: &str) -> Option<String> {
    if !is_valid_slug(slug) {
        log::warn!("⚠️ [CLIP] Slug inválido, no se embebe: {:?}", slug);
        return None;
    }
    let parent = if is_valid_parent(embed_parent) {
        embed_parent
    } else {
        "localhost"
    };
    Some(format!(
        "{}?clip={}&parent={}&autoplay=false",
        CLIP_EMBED_BASE_URL, slug, parent
    ))
}

fn is_valid_parent(host: &str) -> bool {
    !host.is_empty()
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_clip_has_no_embed() {
        let config = ClipEmbedConfig::derive(&ClipLifecycle::new(false), "localhost");
        assert_eq!(config.clip_slug, None);
        assert_eq!(config.embed_url, None);
        assert!(!config.show_spinner);
        assert_eq!(config.phase_class(false), "clip clip--idle");
    }

    #[test]
    fn loading_clip_shows_spinner_until_loaded() {
        let mut clip = ClipLifecycle::new(false);
        clip.set_clip_slug(Some("FunnyClipSlug-1a".into()));

        let config = ClipEmbedConfig::derive(&clip, "stream-tweeter.example");
        assert_eq!(
            config.embed_url.as_deref(),
            Some("https://clips.twitch.tv/embed?clip=FunnyClipSlug-1a&parent=stream-tweeter.example&autoplay=false")
        );
        assert!(config.show_spinner);

        clip.on_embed_loaded("FunnyClipSlug-1a");
        let config = ClipEmbedConfig::derive(&clip, "stream-tweeter.example");
        assert!(!config.show_spinner);
        assert_eq!(config.phase_class(clip.loaded()), "clip clip--loaded");
    }

    #[test]
    fn hidden_clip_keeps_embed_but_no_spinner() {
        let mut clip = ClipLifecycle::new(true);
        clip.set_clip_slug(Some("abc".into()));
        let config = ClipEmbedConfig::derive(&clip, "localhost");
        assert!(config.hidden);
        assert!(config.embed_url.is_some());
        assert!(!config.show_spinner);
    }

    #[test]
    fn unsafe_slug_is_not_embedded() {
        let mut clip = ClipLifecycle::new(false);
        clip.set_clip_slug(Some("abc&parent=evil.com".into()));
        let config = ClipEmbedConfig::derive(&clip, "localhost");
        assert_eq!(config.embed_url, None);
        assert!(!config.show_spinner);
    }

    #[test]
    fn invalid_parent_falls_back_to_localhost() {
        let url = embed_url("abc", "evil.com/?x").unwrap();
        assert!(url.ends_with("parent=localhost&autoplay=false"));
    }
}
