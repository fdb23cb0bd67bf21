pub mod ad_generation;
pub mod base;
pub mod poller;

pub use ad_generation::{generate_ad, retrieve_results, submit_form};
pub use poller::{PollSchedule, StatusSource, poll_until_terminal};
