use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

use super::store::ProductStore;

impl ProductStore {
    /// Replaces the local list with the server's, in server order. On
    /// failure the current list is kept. No retries.
    pub async fn fetch_all(&self) -> Result<Vec<Product>, ProductError> {
        self.run("Fetch products", async {
            self.logger.info("Fetching all products");
            let products = self.gateway.list().await?;
            self.replace_all(&products);
            self.logger
                .info(&format!("Fetched {} products", products.len()));
            Ok(products)
        })
        .await
    }
}
