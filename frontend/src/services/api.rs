//! HTTP implementations of the asset and record stores.
//!
//! Endpoints (paths come from `GalleryConfig`):
//! - `POST {assets_endpoint}`: multipart form with an `image` part, replies `{ "url": ... }`.
//! - `POST {images_endpoint}`: JSON `NewImageRecord`; any 2xx reply means stored,
//!   `{ "id": ... }` is read when present.
//! - `GET {images_endpoint}?after=<cursor>`: one `ImagePage` of the collection.

use std::rc::Rc;

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;
use web_sys::FormData;

use common::cache::CollectionCache;
use common::model::image_record::{ImagePage, NewImageRecord, RecordId};
use common::requests::{CreatedRecord, UploadedAsset};
use common::submission::{AssetStore, CollaboratorError, RecordStore};

pub struct HttpAssetStore {
    endpoint: String,
}

impl HttpAssetStore {
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
        }
    }
}

impl AssetStore for HttpAssetStore {
    type File = web_sys::File;

    async fn upload(&self, file: &web_sys::File) -> Result<String, CollaboratorError> {
        let form = FormData::new().map_err(js_error)?;
        form.append_with_blob_and_filename("image", file, &file.name())
            .map_err(js_error)?;

        let response = Request::post(&self.endpoint)
            .body(form)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;

        let asset: UploadedAsset = decode(response).await?;
        Ok(asset.url)
    }
}

#[derive(Clone)]
pub struct HttpRecordStore {
    endpoint: String,
    cache: Rc<CollectionCache>,
}

impl HttpRecordStore {
    pub fn new(endpoint: &str, cache: Rc<CollectionCache>) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            cache,
        }
    }

    /// Fetches the page starting at `after`, or the first page.
    pub async fn fetch_page(&self, after: Option<&str>) -> Result<ImagePage, CollaboratorError> {
        let mut request = Request::get(&self.endpoint);
        if let Some(cursor) = after {
            request = request.query([("after", cursor)]);
        }

        let response = request.send().await.map_err(network)?;
        decode(response).await
    }
}

impl RecordStore for HttpRecordStore {
    async fn create_record(
        &self,
        record: &NewImageRecord,
    ) -> Result<Option<RecordId>, CollaboratorError> {
        let response = Request::post(&self.endpoint)
            .json(record)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;

        let body = response.text().await.unwrap_or_default();
        if !response.ok() {
            return Err(CollaboratorError::Status {
                code: response.status(),
                body,
            });
        }
        // A 2xx reply means the record is stored, whatever the body says.
        Ok(CreatedRecord::id_from_reply(&body))
    }

    fn invalidate(&self, collection_key: &str) {
        self.cache.invalidate(collection_key);
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, CollaboratorError> {
    if !response.ok() {
        return Err(CollaboratorError::Status {
            code: response.status(),
            body: response.text().await.unwrap_or_default(),
        });
    }
    response
        .json::<T>()
        .await
        .map_err(|e| CollaboratorError::Decode(e.to_string()))
}

fn network(err: gloo_net::Error) -> CollaboratorError {
    CollaboratorError::Network(err.to_string())
}

fn js_error(err: JsValue) -> CollaboratorError {
    CollaboratorError::Network(format!("{:?}", err))
}
