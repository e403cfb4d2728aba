//! `categories` and `browse` commands.

use std::io::{self, Write};

use tiffin_storefront::views::RestaurantCard;
use tiffin_storefront::{BrowseSession, Catalog};

/// Print one category per line.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn categories(catalog: &Catalog, out: &mut impl Write) -> io::Result<()> {
    for category in catalog.categories() {
        writeln!(out, "{category}")?;
    }
    Ok(())
}

/// Print the home screen list after tapping `category` and typing `search`.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn browse(
    catalog: &Catalog,
    category: Option<&str>,
    search: Option<&str>,
    out: &mut impl Write,
) -> io::Result<()> {
    let mut session = BrowseSession::new(catalog);
    if let Some(category) = category {
        session.press_category(catalog, category);
    }
    if let Some(query) = search {
        session.search(catalog, query);
    }

    if session.is_empty() {
        writeln!(out, "No restaurants found")?;
        return Ok(());
    }

    for card in session.visible(catalog).into_iter().map(RestaurantCard::from) {
        let heart = if card.favorite { " ♥" } else { "" };
        writeln!(
            out,
            "{:>3}  {} [{}] ★{} · {}{}",
            card.id, card.name, card.category, card.rating, card.delivery_time, heart
        )?;
    }
    Ok(())
}
