use async_trait::async_trait;

use crate::{
    device::{Device, DeviceId, DevicePatch},
    ports::errors::DeviceStoreError,
};

/// Persistence contract of the device registry.
///
/// Every call is one round trip to the backing store. Implementations keep no
/// state between calls besides their connection pool.
#[async_trait]
pub trait DeviceStorePort: Send + Sync {
    /// List devices in the store's natural order.
    ///
    /// An empty `status` disables the status filter. `limit` is handed to the
    /// store unchanged; no match yields an empty vector, not an error.
    async fn get_devices(
        &self,
        skip: u64,
        limit: i64,
        status: &str,
    ) -> Result<Vec<Device>, DeviceStoreError>;

    /// Fetch one device, or [`DeviceStoreError::NotFound`] when absent.
    async fn get_device(&self, id: &DeviceId) -> Result<Device, DeviceStoreError>;

    /// Insert or partially update the device identified by `patch.id`.
    async fn put_device(&self, patch: DevicePatch) -> Result<(), DeviceStoreError>;
}

#[cfg(test)]
mockall::mock! {
    pub DeviceStore {}

    #[async_trait]
    impl DeviceStorePort for DeviceStore {
        async fn get_devices(
            &self,
            skip: u64,
            limit: i64,
            status: &str,
        ) -> Result<Vec<Device>, DeviceStoreError>;
        async fn get_device(&self, id: &DeviceId) -> Result<Device, DeviceStoreError>;
        async fn put_device(&self, patch: DevicePatch) -> Result<(), DeviceStoreError>;
    }
}
