/// Simple message-carrying error.
pub mod custom_error;
