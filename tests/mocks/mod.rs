//! Test doubles shared by the integration tests.

pub mod mock_record_store;
pub mod scripted_console;

#[allow(unused_imports)]
pub use mock_record_store::MockRecordStore;
#[allow(unused_imports)]
pub use scripted_console::ScriptedConsole;
