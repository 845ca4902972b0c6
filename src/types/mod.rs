//! Type definitions for controller requests
//!
//! This module contains the data structures serialized into request bodies.

pub mod request;

pub use request::{
    AUTHORIZE_GUEST_CMD, CommandEnvelope, GuestDescriptor, LoginRequest, is_valid_mac,
};
