use crate::domain::product::errors::ProductError;
use crate::domain::shared::value_objects::ProductId;

use super::store::ProductStore;

impl ProductStore {
    /// Deletes on the server, then drops the matching local entry. The rest
    /// of the list is left untouched; there is no reconciling fetch.
    pub async fn delete(&self, id: &ProductId) -> Result<(), ProductError> {
        self.run("Delete product", async move {
            let credentials = self.resolve_credentials()?;
            self.logger.info(&format!("Deleting product: {}", id));

            self.gateway.delete(id, &credentials.token).await?;

            self.write(|state| state.products.retain(|entry| entry.id() != id));
            self.logger.info(&format!("Product deleted: {}", id));
            Ok(())
        })
        .await
    }
}
