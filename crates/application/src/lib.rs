//! Application-layer services for the Wattgrant portal.
//!
//! Hosts the access-control resolver consumed by route guards, list and
//! dialog action rendering, and form submission guards.

#![forbid(unsafe_code)]

mod access_policy;
mod access_service;

pub use access_policy::RolePermissionTable;
pub use access_service::AccessControlService;
