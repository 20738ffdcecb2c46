use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{CatalogEntry, NewProductRequest, Product};

use super::store::ProductStore;

impl ProductStore {
    /// Creates a product on the server, then reconciles the local list.
    ///
    /// Credentials and the name are checked before any request is made.
    /// Missing optional fields are filled with defaults and the creator is
    /// set to the signed-in user.
    pub async fn create(&self, request: NewProductRequest) -> Result<Product, ProductError> {
        self.run("Create product", async move {
            let credentials = self.resolve_credentials()?;
            request.validate()?;

            self.logger
                .info(&format!("Creating product: {}", request.name));
            let payload = request.normalized(&credentials.user_id);

            let created = self.gateway.create(&payload, &credentials.token).await?;
            self.logger
                .info(&format!("Product created with id: {}", created.id));

            self.write(|state| state.products.push(CatalogEntry::from(created.clone())));
            self.reconcile().await?;
            Ok(created)
        })
        .await
    }
}
