use tracing::{info, warn};

use nextgen_content_base::page::products::ProductCatalog;
use nextgen_content_base::page::{
    cctv, document_management, hero, solutions, web_hosting, why_choose_us,
};
use nextgen_content_base::{CmsClient, CmsConfig, ContentState};

/// Probes every content provider against the configured CMS and logs a
/// one-line summary each, so editors can verify their fields resolve.
#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    tracing_subscriber::fmt::init();
    color_eyre::install()?;

    let config = match std::env::args().nth(1) {
        Some(path) => CmsConfig::from_yaml_file(&path)?,
        None => CmsConfig::from_env(),
    };
    info!("probing content source at {}", config.base_url);
    let client = CmsClient::new(config);

    report("hero", &hero::load(&client).await);
    report("why-choose-us", &why_choose_us::load(&client).await);
    report("solutions", &solutions::load(&client).await);
    report("cctv", &cctv::load(&client).await);
    report(
        "document-management",
        &document_management::load(&client).await,
    );
    report("web-hosting", &web_hosting::load(&client).await);

    let catalog = ProductCatalog::new(client);
    let products = catalog.load().await;
    match (&products.data, &products.error) {
        (Some(items), None) => info!("products: ok ({} items)", items.len()),
        (Some(items), Some(notice)) => {
            warn!("products: degraded ({} items, {})", items.len(), notice)
        }
        _ => warn!("products: no data"),
    }

    Ok(())
}

fn report<T>(page: &str, state: &ContentState<T>) {
    match &state.error {
        None => info!("{}: ok", page),
        Some(notice) => warn!("{}: degraded ({})", page, notice),
    }
}
