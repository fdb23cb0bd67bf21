pub mod camera;
pub mod catalog;
pub mod contact;
pub mod session;
pub mod state;

pub use camera::{CameraDevice, CameraError, capture_photo};
pub use contact::{ContactData, ContactField};
pub use session::{ProgressUpdate, run_submission};
pub use state::{FormField, FormState};
