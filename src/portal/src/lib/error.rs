/// The type to represent portal results.
pub type PortalResult<T = ()> = anyhow::Result<T>;
