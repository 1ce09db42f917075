use tokio::sync::watch;
use tracing::{debug, instrument, warn};

use crate::domain::{
    common::entities::app_errors::CoreError,
    kitchen::entities::{GenerationStatus, KitchenSnapshot},
    recipe::{entities::GeneratedRecipes, ports::RecipeService},
};

/// Top-level coordinator holding the ingredient set and the generation status.
///
/// The whole [`KitchenSnapshot`] lives in a single watched slot. Every
/// mutation replaces it atomically and wakes subscribers, so a presentation
/// layer never sees a half-written state such as old recipes next to a new
/// error.
pub struct Kitchen<S>
where
    S: RecipeService,
{
    service: S,
    state: watch::Sender<KitchenSnapshot>,
}

impl<S> Kitchen<S>
where
    S: RecipeService,
{
    pub fn new(service: S) -> Self {
        let (state, _) = watch::channel(KitchenSnapshot::default());
        Self { service, state }
    }

    pub fn snapshot(&self) -> KitchenSnapshot {
        self.state.borrow().clone()
    }

    /// Receives the current snapshot and every later update.
    pub fn subscribe(&self) -> watch::Receiver<KitchenSnapshot> {
        self.state.subscribe()
    }

    pub fn add_ingredient(&self, text: &str) -> bool {
        let added = self
            .state
            .send_if_modified(|snapshot| snapshot.ingredients.add(text));
        debug!(added, "add ingredient");
        added
    }

    pub fn remove_ingredient(&self, position: usize) -> Option<String> {
        let mut removed = None;
        self.state.send_if_modified(|snapshot| {
            removed = snapshot.ingredients.remove(position);
            removed.is_some()
        });
        debug!(position, removed = removed.is_some(), "remove ingredient");
        removed
    }

    /// Runs one generation over the current ingredients and records its
    /// outcome.
    ///
    /// Generation failures do not surface as `Err`: they are stored as
    /// [`GenerationStatus::Failed`] and returned. The only error is
    /// [`CoreError::GenerationInProgress`], when another call is still
    /// pending; the status is left untouched in that case.
    #[instrument(skip(self))]
    pub async fn generate(&self) -> Result<GenerationStatus, CoreError> {
        let mut ingredients = None;
        self.state.send_if_modified(|snapshot| {
            if snapshot.status.is_loading() {
                return false;
            }
            snapshot.status = GenerationStatus::Loading;
            ingredients = Some(snapshot.ingredients.to_vec());
            true
        });
        let ingredients = ingredients.ok_or(CoreError::GenerationInProgress)?;
        let guard = LoadingGuard::new(&self.state);

        let status = match self.service.generate_recipes(ingredients).await {
            Ok(GeneratedRecipes::NoIngredients) => GenerationStatus::Idle,
            Ok(GeneratedRecipes::Recipes(recipes)) => GenerationStatus::Ready { recipes },
            Err(e) => {
                warn!("recipe generation failed: {}", e);
                GenerationStatus::Failed {
                    message: e.to_string(),
                }
            }
        };

        guard.finish(status.clone());

        Ok(status)
    }
}

/// Leaves the status `Loading` only while a generation future is alive. If the
/// future is dropped before the service answers, the status falls back to
/// `Idle` so the next call can start.
struct LoadingGuard<'a> {
    state: &'a watch::Sender<KitchenSnapshot>,
    armed: bool,
}

impl<'a> LoadingGuard<'a> {
    fn new(state: &'a watch::Sender<KitchenSnapshot>) -> Self {
        Self { state, armed: true }
    }

    fn finish(mut self, status: GenerationStatus) {
        self.armed = false;
        self.state.send_modify(|snapshot| snapshot.status = status);
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }

        warn!("recipe generation dropped before completion");
        self.state.send_if_modified(|snapshot| {
            if !snapshot.status.is_loading() {
                return false;
            }
            snapshot.status = GenerationStatus::Idle;
            true
        });
    }
}
