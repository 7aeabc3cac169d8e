//! Service scanning engine.
//!
//! [`scanner`] orchestrates a scan: it asks a [`scanner::PortSource`] which
//! ports are listening and hands each one to a [`scanner::ServiceDetector`].
//! [`system`] holds the operating system backed port source, and [`server`]
//! answers scan requests over HTTP.

pub mod cache;
pub mod scanner;
pub mod server;
pub mod system;
