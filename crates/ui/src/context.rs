use std::sync::Arc;

use services::GameService;

/// What the launcher hands the page: the configured game service.
pub trait UiApp: Send + Sync {
    fn game_service(&self) -> Arc<GameService>;
}

/// Root context read by `GameView`.
#[derive(Clone)]
pub struct AppContext {
    game: Arc<GameService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            game: app.game_service(),
        }
    }

    #[must_use]
    pub fn game_service(&self) -> Arc<GameService> {
        Arc::clone(&self.game)
    }
}
