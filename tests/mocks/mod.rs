pub mod dom;
pub mod services_mock;
