use std::sync::Arc;

use ferriskitchen_core::application::FerrisKitchen;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub kitchen: Arc<FerrisKitchen>,
}

impl AppState {
    pub fn new(args: Arc<Args>, kitchen: FerrisKitchen) -> Self {
        Self {
            args,
            kitchen: Arc::new(kitchen),
        }
    }
}
