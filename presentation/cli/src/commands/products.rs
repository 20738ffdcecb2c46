//! Product catalog commands.

use clap::{Args, Subcommand};

use business::application::product::store::ProductStore;
use business::domain::product::errors::ProductError;
use business::domain::product::model::{NewProductRequest, ProductPatch};
use business::domain::shared::value_objects::ProductId;

#[derive(Subcommand)]
pub enum ProductAction {
    /// List every product
    List,
    /// Create a product; unset fields get the storefront defaults
    Add(NewProductArgs),
    /// Change some fields of a product
    Update {
        /// Product id
        id: String,
        #[command(flatten)]
        fields: PatchArgs,
    },
    /// Delete a product
    Delete {
        /// Product id
        id: String,
    },
}

#[derive(Args)]
pub struct NewProductArgs {
    #[arg(short, long)]
    pub name: String,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub image_url: Option<String>,
    #[arg(long)]
    pub price: Option<f64>,
    #[arg(long)]
    pub stock: Option<u32>,
    #[arg(long)]
    pub on_discount: Option<bool>,
    #[arg(long)]
    pub discount_pct: Option<f64>,
    #[arg(long)]
    pub hidden: Option<bool>,
}

impl From<NewProductArgs> for NewProductRequest {
    fn from(args: NewProductArgs) -> Self {
        Self {
            name: args.name,
            description: args.description,
            image_url: args.image_url,
            price: args.price,
            stock: args.stock,
            is_on_discount: args.on_discount,
            discount_pct: args.discount_pct,
            is_hidden: args.hidden,
            created_by: None,
        }
    }
}

#[derive(Args)]
pub struct PatchArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub image_url: Option<String>,
    #[arg(long)]
    pub price: Option<f64>,
    #[arg(long)]
    pub stock: Option<u32>,
    #[arg(long)]
    pub on_discount: Option<bool>,
    #[arg(long)]
    pub discount_pct: Option<f64>,
    #[arg(long)]
    pub hidden: Option<bool>,
}

impl From<PatchArgs> for ProductPatch {
    fn from(args: PatchArgs) -> Self {
        Self {
            name: args.name,
            description: args.description,
            image_url: args.image_url,
            price: args.price,
            stock: args.stock,
            is_on_discount: args.on_discount,
            discount_pct: args.discount_pct,
            is_hidden: args.hidden,
        }
    }
}

pub async fn run(store: &ProductStore, action: ProductAction) -> anyhow::Result<()> {
    let outcome = match action {
        ProductAction::List => store.fetch_all().await.map(|_| ()),
        ProductAction::Add(args) => store
            .create(args.into())
            .await
            .map(|created| println!("Created product {}", created.id)),
        ProductAction::Update { id, fields } => {
            let patch = ProductPatch::from(fields);
            if patch.is_empty() {
                anyhow::bail!("nothing to update: pass at least one field");
            }
            store.update(&ProductId::new(id), patch).await.map(|_| ())
        }
        ProductAction::Delete { id } => {
            let id = ProductId::new(id);
            store
                .delete(&id)
                .await
                .map(|()| println!("Deleted product {}", id))
        }
    };

    if shows_catalog_after(&outcome) {
        println!("{}", serde_json::to_string_pretty(&store.products())?);
    }
    Ok(outcome?)
}

/// The cached list is worth showing whenever the write reached the server,
/// including when only the refresh afterwards failed.
fn shows_catalog_after(outcome: &Result<(), ProductError>) -> bool {
    matches!(outcome, Ok(()) | Err(ProductError::Reconciliation(_)))
}
