pub mod core;
pub mod host;
pub mod hooks;

// The handler set bound to the host's extension points
pub mod handlers;

// Text utilities used by the handlers
pub mod helpers;
