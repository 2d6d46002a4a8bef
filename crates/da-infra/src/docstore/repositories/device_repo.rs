use async_trait::async_trait;
use tracing::{debug, debug_span, Instrument};

use da_core::device::{Device, DeviceId, DevicePatch};
use da_core::ports::{DeviceStoreError, DeviceStorePort};

use crate::docstore::error_map::to_domain_error;
use crate::docstore::ports::{DocumentHandle, DocumentMapper, DocumentSessionPool, UpdateMapper};
use crate::docstore::query::{id_filter, status_filter, upsert_update};

const LIST_CONTEXT: &str = "failed to fetch device list";
const GET_CONTEXT: &str = "failed to fetch device";
const PUT_CONTEXT: &str = "failed to store device";

/// Device store backed by a document database.
///
/// Each call acquires its own handle from `pool` and drops it before
/// returning, whatever the outcome. Errors are returned, never logged.
pub struct DocumentDeviceStore<P, M> {
    pool: P,
    mapper: M,
}

impl<P, M> DocumentDeviceStore<P, M> {
    pub fn new(pool: P, mapper: M) -> Self {
        Self { pool, mapper }
    }
}

#[async_trait]
impl<P, M> DeviceStorePort for DocumentDeviceStore<P, M>
where
    P: DocumentSessionPool,
    M: DocumentMapper<Device> + UpdateMapper<DevicePatch>,
{
    async fn get_devices(
        &self,
        skip: u64,
        limit: i64,
        status: &str,
    ) -> Result<Vec<Device>, DeviceStoreError> {
        let span = debug_span!("infra.mongo.get_devices", skip, limit, status = %status);

        async {
            let handle = self
                .pool
                .acquire()
                .map_err(|e| to_domain_error(e, LIST_CONTEXT))?;

            let docs = handle
                .find(status_filter(status), skip, limit)
                .await
                .map_err(|e| to_domain_error(e, LIST_CONTEXT))?;

            let devices = docs
                .into_iter()
                .map(|doc| self.mapper.to_domain(doc))
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| to_domain_error(e, LIST_CONTEXT))?;

            debug!(count = devices.len(), "Fetched device list");
            Ok::<_, DeviceStoreError>(devices)
        }
        .instrument(span)
        .await
    }

    async fn get_device(&self, id: &DeviceId) -> Result<Device, DeviceStoreError> {
        let span = debug_span!("infra.mongo.get_device", device_id = %id);

        async {
            let handle = self
                .pool
                .acquire()
                .map_err(|e| to_domain_error(e, GET_CONTEXT))?;

            let doc = handle
                .find_one(id_filter(id))
                .await
                .map_err(|e| to_domain_error(e, GET_CONTEXT))?;

            self.mapper
                .to_domain(doc)
                .map_err(|e| to_domain_error(e, GET_CONTEXT))
        }
        .instrument(span)
        .await
    }

    async fn put_device(&self, patch: DevicePatch) -> Result<(), DeviceStoreError> {
        let span = debug_span!("infra.mongo.put_device", device_id = %patch.id);

        async {
            let fields = self
                .mapper
                .to_fields(&patch)
                .map_err(|e| to_domain_error(e, PUT_CONTEXT))?;
            let update = upsert_update(&patch.id, fields);

            let handle = self
                .pool
                .acquire()
                .map_err(|e| to_domain_error(e, PUT_CONTEXT))?;

            handle
                .upsert(id_filter(&patch.id), update)
                .await
                .map_err(|e| to_domain_error(e, PUT_CONTEXT))?;

            debug!("Stored device");
            Ok::<_, DeviceStoreError>(())
        }
        .instrument(span)
        .await
    }
}
