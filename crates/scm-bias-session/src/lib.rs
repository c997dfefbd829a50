pub mod command;
pub mod session;

pub use command::SessionCommand;
pub use session::{SessionView, SurveySession};
