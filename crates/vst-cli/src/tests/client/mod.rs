mod client;
mod error_message;
