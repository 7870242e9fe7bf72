//! Data containers stored by the SPFE.
//!
//! User containers are bound to a user and addressed with an authenticated ticket; a Service
//! Provider may keep several of them per user, distinguished by name. Service Provider
//! containers are not bound to any user and are addressed by their [Pfid].
//!
//! Both kinds can be locked to serialize read-modify-write cycles between application instances.

mod containers_client;
mod pfid;
mod sp_containers_client;

pub use containers_client::ContainersClient;
pub use pfid::Pfid;
pub use sp_containers_client::SpContainersClient;
