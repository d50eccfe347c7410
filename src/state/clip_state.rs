// ============================================================================
// CLIP STATE - Ciclo de vida del clip embebido
// ============================================================================
// Idle(sin slug) -> Loading(slug) -> Loaded(slug)
// Cambio de slug desde Loading|Loaded vuelve a Loading (loaded = false).
// `hidden` es una dimensión independiente de `loaded`.
// ============================================================================

use crate::state::reactivity::ReactiveState;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClipPhase {
    Idle,
    Loading(String),
    Loaded(String),
}

/// Resultado de aplicar un evento al ciclo de vida
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClipTransition {
    Unchanged,
    SlugChanged,
    VisibilityChanged,
    Loaded,
    /// Señal de carga para un slug que ya no es el actual (o sin slug)
    IgnoredStaleLoad,
}

impl ClipTransition {
    pub fn is_change(self) -> bool {
        matches!(
            self,
            ClipTransition::SlugChanged | ClipTransition::VisibilityChanged | ClipTransition::Loaded
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClipLifecycle {
    clip_slug: Option<String>,
    hidden: bool,
    loaded: bool,
}

impl ClipLifecycle {
    pub fn new(hidden: bool) -> Self {
        Self {
            clip_slug: None,
            hidden,
            loaded: false,
        }
    }

    pub fn clip_slug(&self) -> Option<&str> {
        self.clip_slug.as_deref()
    }

    pub fn hidden(&self) -> bool {
        self.hidden
    }

    pub fn loaded(&self) -> bool {
        self.loaded
    }

    pub fn phase(&self) -> ClipPhase {
        match (&self.clip_slug, self.loaded) {
            (None, _) => ClipPhase::Idle,
            (Some(slug), false) => ClipPhase::Loading(slug.clone()),
            (Some(slug), true) => ClipPhase::Loaded(slug.clone()),
        }
    }

    /// Slug vacío o sólo espacios cuenta como ausente
    pub fn set_clip_slug(&mut self, slug: Option<String>) -> ClipTransition {
        let slug = slug
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        if slug == self.clip_slug {
            return ClipTransition::Unchanged;
        }

        self.clip_slug = slug;
        self.loaded = false;
        ClipTransition::SlugChanged
    }

    pub fn set_hidden(&mut self, hidden: bool) -> ClipTransition {
        if self.hidden == hidden {
            return ClipTransition::Unchanged;
        }
        self.hidden = hidden;
        ClipTransition::VisibilityChanged
    }

    /// Señal del widget de embed. Idempotente para el mismo slug.
    pub fn on_embed_loaded(&mut self, slug: &str) -> ClipTransition {
        match self.clip_slug.as_deref() {
            Some(current) if current == slug.trim() => {
                if self.loaded {
                    ClipTransition::Unchanged
                } else {
                    self.loaded = true;
                    ClipTransition::Loaded
                }
            }
            _ => ClipTransition::IgnoredStaleLoad,
        }
    }
}

/// Estado de clip compartido (Rc) con notificaciones
#[derive(Clone)]
pub struct ClipState {
    lifecycle: ReactiveState<ClipLifecycle>,
}

impl ClipState {
    pub fn new(hidden: bool) -> Self {
        Self {
            lifecycle: ReactiveState::new(ClipLifecycle::new(hidden)),
        }
    }

    pub fn lifecycle(&self) -> ClipLifecycle {
        self.lifecycle.get()
    }

    pub fn clip_slug(&self) -> Option<String> {
        self.lifecycle.with(|clip| clip.clip_slug().map(str::to_string))
    }

    pub fn set_clip_slug(&self, slug: Option<String>) -> ClipTransition {
        let transition = self.apply(|clip| clip.set_clip_slug(slug));
        if transition == ClipTransition::SlugChanged {
            log::info!("🎬 [CLIP] Nuevo slug: {:?}", self.clip_slug());
        }
        transition
    }

    pub fn set_hidden(&self, hidden: bool) -> ClipTransition {
        self.apply(|clip| clip.set_hidden(hidden))
    }

    pub fn on_embed_loaded(&self, slug: &str) -> ClipTransition {
        let transition = self.apply(|clip| clip.on_embed_loaded(slug));
        match transition {
            ClipTransition::Loaded => log::info!("✅ [CLIP] Clip {} cargado", slug),
            ClipTransition::IgnoredStaleLoad => {
                log::debug!("⏭️ [CLIP] Carga de {} ignorada (slug no vigente)", slug)
            }
            _ => {}
        }
        transition
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.lifecycle.subscribe(callback);
    }

    fn apply<F>(&self, event: F) -> ClipTransition
    where
        F: FnOnce(&mut ClipLifecycle) -> ClipTransition,
    {
        let mut transition = ClipTransition::Unchanged;
        self.lifecycle.update_if(|clip| {
            transition = event(clip);
            transition.is_change()
        });
        transition
    }
}

impl Default for ClipState {
    fn default() -> Self {
        Self::new(false)
    }
}
