//! Content-file front end for the Blender host application.
//!
//! Format detection is a closed enum; every recognized variant maps to one
//! host import operator. Scene semantics stay inside the host.

pub mod format;
pub mod host;

pub use format::ContentFormat;
pub use host::{convert_target, HostConfig, HostInvocation, HostRequest};
