// Analysis module - frequency discovery and timing statistics
// Sequence order is the order of analysis; callers opt into chronological
// order with `sort_chronologically`.

pub mod discovery;
pub mod duration;

pub use discovery::process_discovery;
pub use duration::{average_inter_event_duration, sort_chronologically, total_event_duration};
