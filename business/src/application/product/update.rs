use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{CatalogEntry, ProductPatch, UpdateResponse};
use crate::domain::shared::value_objects::ProductId;

use super::store::ProductStore;

impl ProductStore {
    /// Sends only the fields in `patch`, swaps the matching local entry for
    /// the response, then reconciles. A product missing locally is still
    /// updated on the server; the cache just has nothing to swap.
    pub async fn update(
        &self,
        id: &ProductId,
        patch: ProductPatch,
    ) -> Result<UpdateResponse, ProductError> {
        self.run("Update product", async move {
            let credentials = self.resolve_credentials()?;
            self.logger.info(&format!("Updating product: {}", id));

            let response = self.gateway.update(id, &patch, &credentials.token).await?;
            if let UpdateResponse::Raw { message } = &response {
                self.logger.warn(&format!(
                    "Update of {} answered with a non-product body: {}",
                    id, message
                ));
            }

            let entry = CatalogEntry::from_update(id, response.clone());
            let swapped = self.write(|state| {
                match state.products.iter_mut().find(|e| e.id() == id) {
                    Some(existing) => {
                        *existing = entry;
                        true
                    }
                    None => false,
                }
            });
            if !swapped {
                self.logger
                    .debug(&format!("Product {} not cached locally", id));
            }

            self.reconcile().await?;
            Ok(response)
        })
        .await
    }
}
