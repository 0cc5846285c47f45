mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod voyages;
pub use voyages::VoyagesView;

mod auth_screen;
pub use auth_screen::{AuthMode, AuthScreen};

mod app_shell;
pub use app_shell::AppShell;
