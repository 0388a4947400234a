pub mod mock_channel;

pub use mock_channel::{Behavior, MockChannel};
