//! Store construction.

use std::sync::Arc;

use da_core::{config::AppConfig, ports::DeviceStorePort};
use da_infra::docstore::{
    init_store_pool, ports::DocumentSessionPool, DeviceDocumentMapper, DocumentDeviceStore,
};

/// Connect to the configured document store and wrap it as a
/// [`DeviceStorePort`].
///
/// Fails if the initial connection cannot be established; no half-built
/// store is ever returned.
pub async fn build_device_store(config: &AppConfig) -> anyhow::Result<Arc<dyn DeviceStorePort>> {
    let pool = init_store_pool(&config.store).await?;
    ::tracing::info!("Device store ready");
    Ok(device_store_from_pool(pool))
}

/// Wrap an already-open session pool.
pub fn device_store_from_pool<P>(pool: P) -> Arc<dyn DeviceStorePort>
where
    P: DocumentSessionPool + 'static,
{
    Arc::new(DocumentDeviceStore::new(pool, DeviceDocumentMapper))
}
