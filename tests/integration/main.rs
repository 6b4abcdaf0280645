//! Integration tests

mod live_server;
