use std::time::Duration;

use reqwest::blocking::Client;
use scraper::{ElementRef, Html, Selector};
use serde::Deserialize;

use crate::{Error, Result};

pub const MONKEYTYPE_URL: &str = "https://monkeytype.com/quotes/english.json";
pub const TYPERACER_URL: &str = "https://typeracerdata.com/texts?texts=full&sort=relative_average";

/// Index of the table cell holding the quote text on the typeracer page.
const TYPERACER_TEXT_CELL: usize = 5;

/// monkeytype quote file: only the quote texts are used.
#[derive(Deserialize)]
struct MonkeytypeQuotes {
	quotes: Vec<MonkeytypeQuote>,
}

#[derive(Deserialize)]
struct MonkeytypeQuote {
	text: String,
}

/// Creates the blocking HTTP client used for both sources.
pub fn http_client(timeout: Duration) -> Result<Client> {
	let client = Client::builder().timeout(timeout).build()?;
	Ok(client)
}

/// Sends a GET request and returns the response body as text.
fn get_text(client: &Client, url: &str) -> Result<String> {
	log::info!("fetching {url}");
	let response = client.get(url).send()?.error_for_status()?;
	Ok(response.text()?)
}

/// Downloads and parses the monkeytype quote list.
pub fn fetch_monkeytype(client: &Client, url: &str) -> Result<Vec<String>> {
	parse_monkeytype(&get_text(client, url)?)
}

/// Downloads and parses the typeracer text table.
pub fn fetch_typeracer(client: &Client, url: &str) -> Result<Vec<String>> {
	parse_typeracer(&get_text(client, url)?)
}

/// Extracts the `text` of every entry of a monkeytype quote document.
///
/// # Errors
/// Returns an error if the document has no `quotes` list or an entry has no `text`.
pub fn parse_monkeytype(json: &str) -> Result<Vec<String>> {
	let document: MonkeytypeQuotes = serde_json::from_str(json)?;
	Ok(document.quotes.into_iter().map(|quote| quote.text).collect())
}

/// Extracts the quote texts of the first table of a typeracer page.
///
/// - The first row is the header and is skipped
/// - Each other row contributes the text of its sixth cell
///
/// # Errors
/// Returns an error if the page has no table or a data row is too short.
pub fn parse_typeracer(html: &str) -> Result<Vec<String>> {
	let document = Html::parse_document(html);
	let table_selector = selector("table")?;
	let row_selector = selector("tr")?;

	let table = document
		.select(&table_selector)
		.next()
		.ok_or_else(|| Error::Html("no table found".to_owned()))?;

	let mut quotes = Vec::new();
	for (index, row) in table.select(&row_selector).enumerate().skip(1) {
		let cell = row
			.children()
			.filter_map(ElementRef::wrap)
			.filter(|element| matches!(element.value().name(), "td" | "th"))
			.nth(TYPERACER_TEXT_CELL)
			.ok_or_else(|| Error::Html(format!("row {index} has fewer than {} cells", TYPERACER_TEXT_CELL + 1)))?;
		quotes.push(cell.text().collect::<String>());
	}

	Ok(quotes)
}

fn selector(css: &str) -> Result<Selector> {
	Selector::parse(css).map_err(|e| Error::Html(format!("invalid selector '{css}': {e}")))
}
