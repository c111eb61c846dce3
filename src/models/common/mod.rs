pub mod choices;
pub mod notification;
pub mod resource;
pub mod response;

pub use choices::{ChoiceOption, SelectOption};
pub use notification::{Notification, Severity};
pub use resource::ResourceKind;
pub use response::ApiResponse;
