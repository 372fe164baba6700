use std::sync::Arc;

use swatch::{ColorLoader, ColorResolver, ColorSource, NetworkFetcher, StaticTokenRegistry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let registry = StaticTokenRegistry::from_json(
        r##"{ "brand.primary": "#ff5500", "surface.overlay": "rgba(0, 0, 0, 0.4)" }"##,
    )?;
    let resolver = ColorResolver::new().with_registry(Arc::new(registry));

    let mut inputs: Vec<String> = std::env::args().skip(1).collect();
    if inputs.is_empty() {
        inputs = ["#3498db", "#F00", "rgba(255, 0, 0, 0.5)", "$brand.primary", "orange", "nope!!"]
            .into_iter()
            .map(String::from)
            .collect();
    }

    let mut loader = ColorLoader::new(
        resolver.clone(),
        NetworkFetcher::new(),
        tokio::runtime::Handle::current(),
    );

    for input in &inputs {
        match ColorSource::classify(input) {
            ColorSource::Token(token) => match resolver.resolve(&token) {
                Ok(color) => println!("{token:<24} -> {color}"),
                Err(e) => println!("{token:<24} !! {e}"),
            },
            ColorSource::Url(url) => {
                let label = url.clone();
                loader.resolve_from_url(url, move |result| match result {
                    Ok(color) => println!("{label:<24} -> {color}"),
                    Err(e) => println!("{label:<24} !! {e}"),
                });
            }
        }
    }

    let fetched = loader.dispatch_all().await;
    if fetched > 0 {
        println!("{fetched} URL(s) resolved");
    }

    Ok(())
}
