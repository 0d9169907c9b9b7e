pub mod session;
pub mod view_mode;

pub use session::{PortfolioSession, SessionError};
pub use view_mode::{resolve, ViewMode};
