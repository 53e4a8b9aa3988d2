use crate::app::{AppContext, EngawaError, Result};
use crate::domain::{ContentItem, ContentKind};
use crate::recommend::{self, ThreadRandom};

pub async fn list_posts(ctx: &AppContext) -> Result<()> {
    let posts = ctx.resolver.resolve(ContentKind::Post).await;

    if posts.is_empty() {
        println!("No posts");
        return Ok(());
    }

    for post in &posts {
        print_line(post);
    }

    Ok(())
}

pub async fn list_products(ctx: &AppContext) -> Result<()> {
    let products = ctx.resolver.resolve(ContentKind::Product).await;

    if products.is_empty() {
        println!("No products");
        return Ok(());
    }

    for product in &products {
        print_line(product);
    }

    Ok(())
}

pub async fn show_item(ctx: &AppContext, key: &str, product: bool) -> Result<()> {
    let kind = if product {
        ContentKind::Product
    } else {
        ContentKind::Post
    };

    let items = ctx.resolver.resolve(kind).await;
    let item = items
        .iter()
        .find(|i| i.key() == key || i.id == key)
        .ok_or_else(|| EngawaError::ItemNotFound(key.to_string()))?;

    println!("{}", item.display_title());
    let date = item.display_date();
    if !date.is_empty() {
        println!("{}", date);
    }
    if let Some(author) = item.author_name() {
        println!("By: {}", author);
    }
    if !item.tags.is_empty() {
        println!("[{}]", item.tags.join(", "));
    }
    println!();

    match ctx.resolver.resolve_body(item).await {
        Ok(body) => println!("{}", body),
        Err(e) => {
            tracing::warn!("body resolution failed for {}: {}", key, e);
            println!("{}", crate::overlay::LOAD_FAILED_MESSAGE);
        }
    }

    Ok(())
}

pub async fn recommend(ctx: &AppContext) -> Result<()> {
    let (posts, products) = tokio::join!(
        ctx.resolver.resolve(ContentKind::Post),
        ctx.resolver.resolve(ContentKind::Product),
    );

    let caps = &ctx.config.recommend;
    let mut rng = ThreadRandom;
    let products = recommend::select(&products, caps.product_cap, caps.product_cap, &mut rng);
    let posts = recommend::select(&posts, caps.post_cap, caps.post_cap, &mut rng);

    if products.is_empty() && posts.is_empty() {
        println!("Nothing to recommend");
        return Ok(());
    }

    for item in products.iter().chain(posts.iter()) {
        print_line(item);
    }

    Ok(())
}

fn print_line(item: &ContentItem) {
    let marker = if item.pinned { "★" } else { " " };
    let date = item.display_date();
    let date = if date.is_empty() {
        "          ".to_string()
    } else {
        date
    };

    if item.tags.is_empty() {
        println!("{} {} {}", marker, date, item.display_title());
    } else {
        println!(
            "{} {} {} [{}]",
            marker,
            date,
            item.display_title(),
            item.tags.join(", ")
        );
    }
}
