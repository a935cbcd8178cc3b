use anyhow::{anyhow, bail, Context, Result};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use reviewcard::cards::{CardDraft, CardStore, JsonFileCardStore, ReviewCard};
use reviewcard::config::AppConfig;
use reviewcard::review::ReviewGenerator;
use reviewcard::services::llm::{ReviewRequest, StarRating};
use reviewcard::services::ReviewDesk;

const USAGE: &str = "usage:
  reviewcard generate <business name> [count]
  reviewcard add <business name> <google maps url> [category] [type]
  reviewcard edit <slug> <business name> <google maps url> [category] [type]
  reviewcard list
  reviewcard remove <slug>
  reviewcard suggest <slug> [rating]";

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;

    let config = AppConfig::load()?;
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some((command, rest)) = args.split_first() else {
        println!("{}", USAGE);
        return Ok(());
    };

    match command.as_str() {
        "generate" => generate(&config, rest),
        "add" => add(&config, rest),
        "edit" => edit(&config, rest),
        "list" => list(&config),
        "remove" => remove(&config, rest),
        "suggest" => suggest(&config, rest).await,
        other => bail!("unknown command `{}`\n{}", other, USAGE),
    }
}

fn generate(config: &AppConfig, args: &[String]) -> Result<()> {
    let name = args.first().ok_or_else(|| anyhow!("missing business name\n{}", USAGE))?;
    let count = match args.get(1) {
        Some(raw) => raw.parse::<usize>().with_context(|| format!("invalid count `{}`", raw))?,
        None => 1,
    };

    let mut generator = ReviewGenerator::new(config.load_corpus()?, config.generator.clone())?;
    for _ in 0..count {
        println!("{}", generator.generate(name));
    }

    let stats = generator.stats();
    tracing::info!(
        "Generated {} reviews, avg {:.2} attempts, {} suffix fallbacks",
        stats.generated,
        stats.avg_attempts,
        stats.suffix_fallbacks
    );
    Ok(())
}

fn add(config: &AppConfig, args: &[String]) -> Result<()> {
    let (name, url) = match args {
        [name, url, ..] => (name, url),
        _ => bail!("missing business name or maps url\n{}", USAGE),
    };

    let mut draft = CardDraft::new(name.as_str(), url.as_str());
    draft.category = args.get(2).cloned().unwrap_or_default();
    draft.kind = args.get(3).cloned().unwrap_or_default();

    let card = ReviewCard::create(draft)?;
    let mut store = JsonFileCardStore::open(&config.store.path)?;
    store.insert(card.clone())?;
    println!("{}  {}  {}", card.id, card.business_name, card.review_path());
    Ok(())
}

fn edit(config: &AppConfig, args: &[String]) -> Result<()> {
    let (slug, name, url) = match args {
        [slug, name, url, ..] => (slug, name, url),
        _ => bail!("missing slug, business name or maps url\n{}", USAGE),
    };

    let mut store = JsonFileCardStore::open(&config.store.path)?;
    let mut card = store
        .get_by_slug(slug)
        .ok_or_else(|| anyhow!("no card with slug `{}`", slug))?;

    let draft = CardDraft {
        business_name: name.clone(),
        category: args.get(3).cloned().unwrap_or_else(|| card.category.clone()),
        kind: args.get(4).cloned().unwrap_or_else(|| card.kind.clone()),
        description: card.description.clone(),
        location: card.location.clone(),
        logo_url: card.logo_url.clone(),
        google_maps_url: url.clone(),
    };
    card.apply(draft)?;
    store.update(card.clone())?;
    println!("{}  {}  {}", card.id, card.business_name, card.review_path());
    Ok(())
}

fn list(config: &AppConfig) -> Result<()> {
    let store = JsonFileCardStore::open(&config.store.path)?;
    let cards = store.list();
    if cards.is_empty() {
        println!("no cards in {}", store.path().display());
    }
    for card in cards {
        println!("{:<24} {:<32} {}", card.slug, card.business_name, card.google_maps_url);
    }
    Ok(())
}

fn remove(config: &AppConfig, args: &[String]) -> Result<()> {
    let slug = args.first().ok_or_else(|| anyhow!("missing slug\n{}", USAGE))?;
    let mut store = JsonFileCardStore::open(&config.store.path)?;
    let card = store
        .get_by_slug(slug)
        .ok_or_else(|| anyhow!("no card with slug `{}`", slug))?;
    store.delete(card.id)?;
    println!("removed {}", card.business_name);
    Ok(())
}

async fn suggest(config: &AppConfig, args: &[String]) -> Result<()> {
    let slug = args.first().ok_or_else(|| anyhow!("missing slug\n{}", USAGE))?;
    let rating = match args.get(1) {
        Some(raw) => {
            let stars = raw.parse::<u8>().with_context(|| format!("invalid rating `{}`", raw))?;
            StarRating::new(stars)?
        }
        None => StarRating::default(),
    };

    let store = JsonFileCardStore::open(&config.store.path)?;
    let card = store
        .get_by_slug(slug)
        .ok_or_else(|| anyhow!("no card with slug `{}`", slug))?;

    let mut desk = ReviewDesk::from_config(config)?;
    let suggestion = desk.suggest(&ReviewRequest::for_card(&card, rating)).await;
    println!("{}", suggestion.text);
    println!("-> {}", card.google_maps_url);
    Ok(())
}
