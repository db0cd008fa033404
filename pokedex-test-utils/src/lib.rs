mod fake_transport;
pub mod fixtures;
mod setup;

pub use fake_transport::{
    FakeTransport,
    RecordedRequest,
};
pub use setup::setup_test_environment;
